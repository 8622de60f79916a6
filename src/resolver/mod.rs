//! Suffix resolver module.
//!
//! Maps country codes to domain suffixes, either through the built-in table
//! or through a [`SuffixResolver`] extended with caller-supplied entries.

use std::collections::HashMap;
use std::path::Path;

use crate::error::Result;
use crate::parser::{parse_suffix_rules, parse_suffix_rules_from_file};
use crate::table::{BUILTIN_ENTRIES, COUNTRY_TO_DOMAIN_SUFFIX, DEFAULT_SUFFIX};
use crate::types::{normalize_country_code, CountryCode, DomainSuffix, SuffixRule};

/// Return the domain suffix for a country code, or [`DEFAULT_SUFFIX`] when
/// the code is unknown.
///
/// The code is trimmed and uppercased before lookup, so `"gb"`, `" Gb "` and
/// `"GB"` all resolve to `.co.uk`. Never fails.
///
/// ```rust
/// use country_suffix::domain_suffix_for_country;
///
/// assert_eq!(domain_suffix_for_country("US"), ".com");
/// assert_eq!(domain_suffix_for_country("gb"), ".co.uk");
/// assert_eq!(domain_suffix_for_country("ZZ"), ".com");
/// ```
pub fn domain_suffix_for_country(country_code: &str) -> &'static str {
    let code = normalize_country_code(country_code);
    COUNTRY_TO_DOMAIN_SUFFIX
        .get(code.as_str())
        .copied()
        .unwrap_or(DEFAULT_SUFFIX)
}

/// Resolver with its own copy of the suffix table.
///
/// Starts from the built-in table (or empty) and can be extended with extra
/// entries before use. The global table is never touched.
#[derive(Debug, Clone)]
pub struct SuffixResolver {
    suffixes: HashMap<String, DomainSuffix>,
    default_suffix: DomainSuffix,
}

impl SuffixResolver {
    /// Create a resolver seeded with the built-in table.
    pub fn new() -> Self {
        let suffixes = BUILTIN_ENTRIES
            .iter()
            .map(|(code, suffix)| (code.to_string(), DomainSuffix::from_static(suffix)))
            .collect();
        Self {
            suffixes,
            default_suffix: DomainSuffix::from_static(DEFAULT_SUFFIX),
        }
    }

    /// Create a resolver with no entries; every code resolves to the default.
    pub fn empty() -> Self {
        Self {
            suffixes: HashMap::new(),
            default_suffix: DomainSuffix::from_static(DEFAULT_SUFFIX),
        }
    }

    /// Create a resolver from the built-in table extended with rules text.
    pub fn from_rules(rules: &str) -> Result<Self> {
        Ok(Self::new().extended(parse_suffix_rules(rules)?))
    }

    /// Create a resolver from the built-in table extended with a rules file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new().extended(parse_suffix_rules_from_file(path)?))
    }

    fn extended(mut self, rules: Vec<SuffixRule>) -> Self {
        for rule in rules {
            self.insert(rule.code, rule.suffix);
        }
        self
    }

    /// Add an entry, overriding any existing one for the same code.
    pub fn with_entry(mut self, code: &str, suffix: &str) -> Result<Self> {
        let code = CountryCode::parse(code)?;
        let suffix = DomainSuffix::parse(suffix)?;
        self.insert(code, suffix);
        Ok(self)
    }

    /// Add several entries; stops at the first invalid one.
    pub fn with_entries<'a, I>(self, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        entries
            .into_iter()
            .try_fold(self, |resolver, (code, suffix)| resolver.with_entry(code, suffix))
    }

    /// Replace the suffix returned for unknown codes.
    pub fn with_default(mut self, suffix: &str) -> Result<Self> {
        self.default_suffix = DomainSuffix::parse(suffix)?;
        Ok(self)
    }

    fn insert(&mut self, code: CountryCode, suffix: DomainSuffix) {
        let code = String::from(code);
        if let Some(previous) = self.suffixes.get(&code) {
            tracing::debug!(
                code = %code,
                previous = %previous,
                suffix = %suffix,
                "overriding domain suffix"
            );
        }
        self.suffixes.insert(code, suffix);
    }

    /// Resolve a country code to a suffix, falling back to the default.
    pub fn resolve(&self, country_code: &str) -> &str {
        self.get(country_code)
            .unwrap_or_else(|| self.default_suffix.as_str())
    }

    /// Look up a country code without applying the fallback.
    pub fn get(&self, country_code: &str) -> Option<&str> {
        let code = normalize_country_code(country_code);
        self.suffixes.get(&code).map(DomainSuffix::as_str)
    }

    /// Check whether a country code has an entry.
    pub fn contains(&self, country_code: &str) -> bool {
        self.get(country_code).is_some()
    }

    /// Suffix returned for unknown codes.
    pub fn default_suffix(&self) -> &str {
        self.default_suffix.as_str()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    /// All entries, sorted by country code.
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self
            .suffixes
            .iter()
            .map(|(code, suffix)| (code.as_str(), suffix.as_str()))
            .collect();
        entries.sort_unstable_by_key(|(code, _)| *code);
        entries
    }
}

impl Default for SuffixResolver {
    fn default() -> Self {
        Self::new()
    }
}
