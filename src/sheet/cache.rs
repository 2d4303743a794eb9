//! Deduplication cache keyed by rule hash.

use std::collections::HashMap;

use crate::hash::RuleHash;

/// Maps rule hashes to the names they were materialized under.
///
/// The cache mirrors the live [`StyleSheet`](super::StyleSheet): an entry
/// exists exactly when the rule is live, and both are cleared together on
/// flush. A hit means the rule needs no further work.
#[derive(Debug, Clone, Default)]
pub struct RuleCache {
    entries: HashMap<RuleHash, String>,
}

impl RuleCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the name stored for `hash`.
    pub fn lookup(&self, hash: RuleHash) -> Option<&str> {
        self.entries.get(&hash).map(String::as_str)
    }

    /// Records the name a rule was materialized under.
    pub fn store(&mut self, hash: RuleHash, name: impl Into<String>) {
        self.entries.insert(hash, name.into());
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of cached rules.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_after_store() {
        let mut cache = RuleCache::new();
        let hash = RuleHash::from_value(7);

        assert_eq!(cache.lookup(hash), None);
        cache.store(hash, "css-7");
        assert_eq!(cache.lookup(hash), Some("css-7"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cache = RuleCache::new();
        cache.store(RuleHash::from_value(1), "css-1");
        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.lookup(RuleHash::from_value(1)), None);
    }
}
