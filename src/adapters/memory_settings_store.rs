use std::collections::BTreeMap;

use serde_json::Value;

use crate::ports::SettingsStore;

/// In-memory settings store, populated once and read through [`SettingsStore`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, Value>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Merge `other` into this store; keys in `other` win.
    pub fn merge(&mut self, other: MemorySettingsStore) {
        self.values.extend(other.values);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        if key.is_empty() {
            return None;
        }
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MemorySettingsStore {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn returns_stored_values() {
        let store = MemorySettingsStore::new().with("COUNTRY", "Erebor").with("MAX_DWARVES", 13);

        assert_eq!(store.get("COUNTRY"), Some(json!("Erebor")));
        assert_eq!(store.get("MAX_DWARVES"), Some(json!(13)));
        assert_eq!(store.get("WEBSITE"), None);
    }

    #[test]
    fn empty_key_is_never_found() {
        let store = MemorySettingsStore::new().with("", "hidden");
        assert!(!store.contains(""));
    }

    #[test]
    fn merge_prefers_incoming_values() {
        let mut base = MemorySettingsStore::new().with("COUNTRY", "Erebor").with("KING", "Thror");
        base.merge(MemorySettingsStore::new().with("COUNTRY", "Khazad Dum"));

        assert_eq!(base.get("COUNTRY"), Some(json!("Khazad Dum")));
        assert_eq!(base.get("KING"), Some(json!("Thror")));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn collects_from_pairs() {
        let store: MemorySettingsStore = [("A", 1), ("B", 2)].into_iter().collect();
        assert_eq!(store.keys().collect::<Vec<_>>(), vec!["A", "B"]);
    }
}
