use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SuffixError};

/// Normalize a raw country code: trim surrounding whitespace, then uppercase.
///
/// Normalizing an already-normalized code is a no-op.
pub fn normalize_country_code(code: &str) -> String {
    code.trim_matches(is_trimmed_whitespace).to_uppercase()
}

/// Whitespace stripped from the ends of a code: Unicode whitespace plus the
/// byte-order mark, excluding NEL (U+0085).
fn is_trimmed_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Two-letter uppercase ASCII country code (ISO 3166-1 alpha-2 shape)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parse and normalize a country code.
    ///
    /// Accepts surrounding whitespace and any case; the result is always
    /// exactly two uppercase ASCII letters.
    pub fn parse(code: &str) -> Result<Self> {
        let normalized = normalize_country_code(code);
        if !is_valid_country_code(&normalized) {
            return Err(SuffixError::InvalidCountryCode(code.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Check that a code is exactly two uppercase ASCII letters
pub(crate) fn is_valid_country_code(code: &str) -> bool {
    code.len() == 2 && code.bytes().all(|b| b.is_ascii_uppercase())
}

/// Domain suffix such as `.de` or `.co.uk`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct DomainSuffix(String);

impl DomainSuffix {
    /// Parse and normalize a domain suffix.
    ///
    /// The suffix is trimmed and lowercased, must start with `.` and consist of
    /// non-empty labels of ASCII letters, digits and inner hyphens.
    pub fn parse(suffix: &str) -> Result<Self> {
        let normalized = suffix.trim().to_ascii_lowercase();
        if !is_valid_suffix(&normalized) {
            return Err(SuffixError::InvalidSuffix(suffix.to_string()));
        }
        Ok(Self(normalized))
    }

    /// Wrap a suffix already known to satisfy the suffix invariants.
    pub(crate) fn from_static(suffix: &'static str) -> Self {
        debug_assert!(is_valid_suffix(suffix));
        Self(suffix.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub(crate) fn is_valid_suffix(suffix: &str) -> bool {
    let Some(rest) = suffix.strip_prefix('.') else {
        return false;
    };
    if rest.is_empty() {
        return false;
    }

    rest.split('.').all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
    })
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DomainSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DomainSuffix {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CountryCode {
    type Err = SuffixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for DomainSuffix {
    type Err = SuffixError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = SuffixError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl TryFrom<String> for DomainSuffix {
    type Error = SuffixError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl From<DomainSuffix> for String {
    fn from(suffix: DomainSuffix) -> Self {
        suffix.0
    }
}

/// Parsed country/suffix entry, as read from a rules document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub code: CountryCode,
    pub suffix: DomainSuffix,
    /// Line number in the original text (for error reporting)
    pub line_num: usize,
}
