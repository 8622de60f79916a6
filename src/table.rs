//! Built-in country code to domain suffix table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Suffix returned for any code missing from the table.
pub const DEFAULT_SUFFIX: &str = ".com";

/// Built-in entries, in source order.
pub const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // North America
    ("US", ".com"),
    ("CA", ".ca"),
    // United Kingdom & Europe
    ("GB", ".co.uk"),
    ("IE", ".ie"),
    ("AT", ".at"),
    ("BE", ".be"),
    ("FR", ".fr"),
    ("DE", ".de"),
    ("IT", ".it"),
    ("NL", ".nl"),
    ("ES", ".es"),
    ("CH", ".ch"),
    ("SE", ".se"),
    ("PL", ".pl"),
    ("RU", ".ru"),
    // Asia-Pacific
    ("AU", ".com.au"),
    // New Zealand often uses .com.au
    ("NZ", ".com.au"),
    ("IN", ".in"),
    ("HK", ".com.hk"),
    ("MY", ".com.my"),
    ("SG", ".com.sg"),
    ("PH", ".ph"),
    ("TW", ".com.tw"),
    // China
    ("CN", ".com.cn"),
];

/// Read-only view of the built-in table, keyed by uppercase country code.
pub static COUNTRY_TO_DOMAIN_SUFFIX: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| BUILTIN_ENTRIES.iter().copied().collect());
