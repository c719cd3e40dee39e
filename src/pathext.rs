//! Executable-extension list parsing
//!
//! Parses a `;`-separated extension value (the `PATHEXT` convention, e.g.
//! `.COM;.EXE;.BAT;.CMD`) into an ordered list of suffixes the locator
//! appends when a bare name has no directly matching executable. The value
//! is taken as an explicit argument so the parser is testable without
//! touching process-wide environment state; `from_env` memoizes the one
//! real lookup for the process lifetime.

use std::env;
use std::sync::OnceLock;

/// Environment variable holding the `;`-separated extension list.
pub const EXTENSION_LIST_VAR: &str = "PATHEXT";

/// Ordered executable-extension suffixes, stored without the leading dot.
///
/// Order is significant: the locator tries entries front to back and the
/// first hit wins. Entries are kept verbatim (matching is case-sensitive).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionList(Vec<String>);

impl ExtensionList {
    /// Parse a `;`-separated value. Empty entries (consecutive separators,
    /// leading/trailing separators) are dropped; a single leading `.` per
    /// entry is stripped. An absent value yields an empty list, which makes
    /// the locator perform a direct search only.
    pub fn parse(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::default();
        };
        let entries = value
            .split(';')
            .filter(|entry| !entry.is_empty())
            .map(|entry| entry.strip_prefix('.').unwrap_or(entry).to_string())
            .filter(|entry| !entry.is_empty())
            .collect();
        Self(entries)
    }

    /// Parse the process environment value, once per process.
    pub fn from_env() -> Self {
        static PARSED: OnceLock<ExtensionList> = OnceLock::new();
        PARSED
            .get_or_init(|| Self::parse(env::var(EXTENSION_LIST_VAR).ok().as_deref()))
            .clone()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Extensions in priority order, leading dot excluded.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<const N: usize> From<[&str; N]> for ExtensionList {
    fn from(entries: [&str; N]) -> Self {
        Self::parse(Some(&entries.join(";")))
    }
}
