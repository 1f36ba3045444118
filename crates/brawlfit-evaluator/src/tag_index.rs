//! Normalized lookup structure over one entity's tag sequence.
//!
//! Tags come in two shapes:
//!
//! - valued tags, `key:value` (e.g. `range:long`, `control:2`)
//! - flags, `has:key` (e.g. `has:wallbreak`)
//!
//! Building an index lower-cases and trims every tag, drops empty strings and
//! removes duplicates while keeping the first occurrence in place. Value lookups
//! scan in that order, so when a key appears more than once the first tag wins.
//!
//! Strings of any other shape are kept but never match a lookup.

use std::collections::HashSet;

/// Prefix shared by all flag tags.
pub const FLAG_PREFIX: &str = "has:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: Vec<String>,
}

impl TagIndex {
    #[must_use]
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let tags = tags
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .filter(|t| seen.insert(t.clone()))
            .collect();
        Self { tags }
    }

    /// Value of the first tag shaped `key:...`.
    #[must_use]
    pub fn value_of(&self, key: &str) -> Option<&str> {
        let key = key.to_lowercase();
        self.tags.iter().find_map(|tag| {
            tag.strip_prefix(key.as_str())
                .and_then(|rest| rest.strip_prefix(':'))
        })
    }

    /// Like [`Self::value_of`], parsed as a finite number.
    #[must_use]
    pub fn number_of(&self, key: &str) -> Option<f64> {
        self.value_of(key)?
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
    }

    /// Exact membership test for a whole tag, typically a `has:` flag.
    #[must_use]
    pub fn has(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| *t == tag)
    }

    /// Shorthand for `has("has:<name>")`.
    #[must_use]
    pub fn has_flag(&self, name: &str) -> bool {
        self.has(&format!("{FLAG_PREFIX}{name}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
