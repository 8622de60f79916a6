use thiserror::Error;

/// Country suffix error types
#[derive(Error, Debug)]
pub enum SuffixError {
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),

    #[error("Invalid domain suffix: {0:?}")]
    InvalidSuffix(String),

    #[error("Duplicate country code {code} at line {line}")]
    DuplicateCountryCode { code: String, line: usize },

    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type Result<T> = std::result::Result<T, SuffixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_line() {
        let err = SuffixError::ParseErrorAtLine {
            line: 7,
            message: "Invalid rule format: GB".into(),
        };
        let display = format!("{}", err);
        assert!(display.contains("line 7"), "got: {}", display);
        assert!(display.contains("GB"), "got: {}", display);
    }

    #[test]
    fn test_duplicate_code_is_matchable() {
        let err = SuffixError::DuplicateCountryCode {
            code: "GB".into(),
            line: 3,
        };
        match &err {
            SuffixError::DuplicateCountryCode { code, line } => {
                assert_eq!(code, "GB");
                assert_eq!(*line, 3);
            }
            _ => panic!("expected DuplicateCountryCode"),
        }
    }
}
