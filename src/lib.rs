//! Country Suffix - map country codes to a plausible domain suffix
//!
//! This library provides:
//! - A built-in table from ISO 3166-1 alpha-2 codes to domain suffixes
//! - Case- and whitespace-insensitive lookup with a `.com` fallback
//! - An extensible resolver for caller-supplied entries
//! - A small text format for loading extra entries from a string or file
//!
//! # Example
//!
//! ```rust
//! use country_suffix::{domain_suffix_for_country, SuffixResolver};
//!
//! assert_eq!(domain_suffix_for_country("gb"), ".co.uk");
//! assert_eq!(domain_suffix_for_country(" DE "), ".de");
//! assert_eq!(domain_suffix_for_country("ZZ"), ".com");
//!
//! let rules = "
//! nz = .co.nz   # override the built-in entry
//! jp = .co.jp
//! ";
//!
//! let resolver = SuffixResolver::from_rules(rules).unwrap();
//! assert_eq!(resolver.resolve("NZ"), ".co.nz");
//! assert_eq!(resolver.resolve("jp"), ".co.jp");
//! assert_eq!(resolver.resolve("gb"), ".co.uk");
//! ```
//!
//! # Rule Syntax
//!
//! ```text
//! CODE = SUFFIX   # comment
//! ```
//!
//! | Part | Example | Description |
//! |------|---------|-------------|
//! | Code | `nz` | Two ASCII letters, any case |
//! | Suffix | `.co.nz` | Leading dot, dot-separated labels |

pub mod error;
pub mod parser;
pub mod resolver;
pub mod table;
pub mod types;

// Re-export commonly used items
pub use error::{Result, SuffixError};
pub use parser::{parse_suffix_rules, parse_suffix_rules_from_file};
pub use resolver::{domain_suffix_for_country, SuffixResolver};
pub use table::{BUILTIN_ENTRIES, COUNTRY_TO_DOMAIN_SUFFIX, DEFAULT_SUFFIX};
pub use types::{normalize_country_code, CountryCode, DomainSuffix, SuffixRule};
