use serde_json::Value;

use super::MemorySettingsStore;
use crate::ports::SettingsStore;

/// Two stores stacked: keys in `upper` shadow the same keys in `lower`.
#[derive(Debug, Clone)]
pub struct LayeredSettingsStore<U, L> {
    upper: U,
    lower: L,
}

impl<U: SettingsStore, L: SettingsStore> LayeredSettingsStore<U, L> {
    pub fn new(upper: U, lower: L) -> Self {
        Self { upper, lower }
    }
}

impl<U: SettingsStore, L: SettingsStore> SettingsStore for LayeredSettingsStore<U, L> {
    fn get(&self, key: &str) -> Option<Value> {
        self.upper.get(key).or_else(|| self.lower.get(key))
    }
}

/// Shadow a few keys of `base` without touching it.
pub fn override_settings<L, I, K, V>(base: L, overrides: I) -> LayeredSettingsStore<MemorySettingsStore, L>
where
    L: SettingsStore,
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<Value>,
{
    LayeredSettingsStore::new(overrides.into_iter().collect(), base)
}
