//! Read-only access to the process-wide configuration store.
//!
//! The store is populated once at startup and only read afterwards. Mixins
//! receive it explicitly wherever they resolve settings.

use std::sync::Arc;

use serde_json::Value;

/// Port for looking up configuration values by key.
pub trait SettingsStore {
    /// Return the value stored under `key`, or `None` when the key is absent.
    ///
    /// A key that is present with a `null` value is *not* absent.
    fn get(&self, key: &str) -> Option<Value>;

    /// Whether `key` is defined in the store.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for &T {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Box<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

impl<T: SettingsStore + ?Sized> SettingsStore for Arc<T> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}
