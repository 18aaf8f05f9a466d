//! Memoizing partial-content cache.
//!
//! Maps page names to fetched HTML text. Entries are created on first
//! successful fetch and never evicted or invalidated; the cache lives as
//! long as the router that owns it.

use std::collections::HashMap;

/// In-memory map from page name to partial HTML text.
#[derive(Debug, Default)]
pub struct PartialCache {
    entries: HashMap<String, String>,
}

impl PartialCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up cached content by page name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Store fetched content under `name`. A repeated insert for the
    /// same name overwrites the previous body.
    pub fn insert(&mut self, name: &str, body: String) {
        self.entries.insert(name.to_string(), body);
    }

    /// Check whether `name` has cached content.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of cached partials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_retrieve() {
        let mut cache = PartialCache::new();
        cache.insert("about", "<p>About</p>".into());

        assert!(cache.contains("about"));
        assert_eq!(cache.get("about"), Some("<p>About</p>"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn get_missing_returns_none() {
        let cache = PartialCache::new();
        assert_eq!(cache.get("missing"), None);
        assert!(!cache.contains("missing"));
    }

    #[test]
    fn entries_are_never_evicted() {
        let mut cache = PartialCache::new();
        for i in 0..1000 {
            cache.insert(&format!("page{i}"), format!("<p>{i}</p>"));
        }

        assert_eq!(cache.len(), 1000);
        assert_eq!(cache.get("page0"), Some("<p>0</p>"));
        assert_eq!(cache.get("page999"), Some("<p>999</p>"));
    }

    #[test]
    fn repeated_insert_overwrites() {
        let mut cache = PartialCache::new();
        cache.insert("home", "old".into());
        cache.insert("home", "new".into());

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("home"), Some("new"));
    }

    #[test]
    fn clear_cache() {
        let mut cache = PartialCache::new();
        cache.insert("home", "<p>Home</p>".into());
        cache.insert("about", "<p>About</p>".into());
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("home"));
    }
}
