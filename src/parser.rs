use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SuffixError};
use crate::types::{CountryCode, DomainSuffix, SuffixRule};

/// Regex pattern for parsing suffix rules
/// Format: CODE = SUFFIX
static RULE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^\s=]+)\s*=\s*(\S+)$").expect("RULE_PATTERN: hardcoded regex is invalid")
});

/// Parse suffix rules from text.
///
/// One `CODE = SUFFIX` entry per line; `#` starts a comment. A code may
/// appear only once per document.
pub fn parse_suffix_rules(text: &str) -> Result<Vec<SuffixRule>> {
    let mut rules = Vec::new();
    let mut seen = HashSet::new();

    for (line_num, line) in text.lines().enumerate() {
        let line_num = line_num + 1; // 1-based line numbers

        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        let rule = parse_single_rule(line, line_num)?;
        if !seen.insert(rule.code.clone()) {
            return Err(SuffixError::DuplicateCountryCode {
                code: rule.code.to_string(),
                line: line_num,
            });
        }
        rules.push(rule);
    }

    tracing::trace!(count = rules.len(), "parsed suffix rules");
    Ok(rules)
}

/// Parse suffix rules from a file.
pub fn parse_suffix_rules_from_file(path: impl AsRef<Path>) -> Result<Vec<SuffixRule>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| {
        SuffixError::ParseError(format!(
            "Failed to read rules file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_suffix_rules(&text)
}

/// Parse a single rule line
fn parse_single_rule(line: &str, line_num: usize) -> Result<SuffixRule> {
    let captures = RULE_PATTERN
        .captures(line)
        .ok_or_else(|| SuffixError::ParseErrorAtLine {
            line: line_num,
            message: format!("Invalid rule format: {}", line),
        })?;

    let code = CountryCode::parse(&captures[1]).map_err(|e| SuffixError::ParseErrorAtLine {
        line: line_num,
        message: e.to_string(),
    })?;
    let suffix = DomainSuffix::parse(&captures[2]).map_err(|e| SuffixError::ParseErrorAtLine {
        line: line_num,
        message: e.to_string(),
    })?;

    Ok(SuffixRule {
        code,
        suffix,
        line_num,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_pattern_regex_compiles() {
        assert!(RULE_PATTERN.is_match("GB = .co.uk"));
    }

    #[test]
    fn test_parse_simple_rule() {
        let rules = parse_suffix_rules("GB = .co.uk").unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].code.as_str(), "GB");
        assert_eq!(rules[0].suffix.as_str(), ".co.uk");
        assert_eq!(rules[0].line_num, 1);
    }

    #[test]
    fn test_parse_normalizes_code_and_suffix() {
        let rules = parse_suffix_rules("nz=.CO.NZ").unwrap();
        assert_eq!(rules[0].code.as_str(), "NZ");
        assert_eq!(rules[0].suffix.as_str(), ".co.nz");
    }

    #[test]
    fn test_parse_comments_and_blank_lines() {
        let text = r#"
# Overrides for the Pacific region
nz = .co.nz   # not shared with Australia

jp = .co.jp
"#;
        let rules = parse_suffix_rules(text).unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].line_num, 3);
        assert_eq!(rules[1].code.as_str(), "JP");
        assert_eq!(rules[1].line_num, 5);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(parse_suffix_rules("").unwrap().is_empty());
        assert!(parse_suffix_rules("   \n# only a comment\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_format() {
        let result = parse_suffix_rules("GB .co.uk");
        assert!(matches!(
            result,
            Err(SuffixError::ParseErrorAtLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_invalid_code_reports_line() {
        let result = parse_suffix_rules("GB = .co.uk\nGBR = .co.uk");
        match result {
            Err(SuffixError::ParseErrorAtLine { line, message }) => {
                assert_eq!(line, 2);
                assert!(message.contains("GBR"), "got: {}", message);
            }
            other => panic!("expected ParseErrorAtLine, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_invalid_suffix() {
        let result = parse_suffix_rules("JP = co.jp");
        assert!(matches!(
            result,
            Err(SuffixError::ParseErrorAtLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_code() {
        let result = parse_suffix_rules("jp = .co.jp\nJP = .jp");
        match result {
            Err(SuffixError::DuplicateCountryCode { code, line }) => {
                assert_eq!(code, "JP");
                assert_eq!(line, 2);
            }
            other => panic!("expected DuplicateCountryCode, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_missing_file() {
        let path = std::env::temp_dir().join("country_suffix_missing_rules.txt");
        let _ = std::fs::remove_file(&path);
        let result = parse_suffix_rules_from_file(&path);
        assert!(matches!(result, Err(SuffixError::ParseError(_))));
    }
}
