use std::env;

use serde_json::Value;

use crate::domain::parse_literal;
use crate::ports::SettingsStore;

/// Settings read from process environment variables named `{prefix}{key}`.
///
/// Values that parse as JSON are returned as JSON (`13`, `true`, `["a"]`);
/// anything else is returned as a plain string. The environment is read on
/// every lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSettingsStore {
    prefix: String,
}

impl EnvSettingsStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    fn variable(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }
}

impl SettingsStore for EnvSettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        if key.is_empty() {
            return None;
        }
        env::var(self.variable(key)).ok().map(|raw| parse_literal(&raw))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use serial_test::serial;

    use super::*;
    use crate::testing::EnvVarGuard;

    #[test]
    #[serial]
    fn reads_prefixed_variable_as_string() {
        let _guard = EnvVarGuard::set("SMTEST_COUNTRY", "Khazad Dum");
        let store = EnvSettingsStore::new("SMTEST_");

        assert_eq!(store.get("COUNTRY"), Some(json!("Khazad Dum")));
    }

    #[test]
    #[serial]
    fn parses_json_values() {
        let _count = EnvVarGuard::set("SMTEST_MAX_DWARVES", "13");
        let _list = EnvVarGuard::set("SMTEST_GATES", "[\"front\", \"side\"]");
        let store = EnvSettingsStore::new("SMTEST_");

        assert_eq!(store.get("MAX_DWARVES"), Some(json!(13)));
        assert_eq!(store.get("GATES"), Some(json!(["front", "side"])));
    }

    #[test]
    #[serial]
    fn missing_variable_is_absent() {
        let _guard = EnvVarGuard::remove("SMTEST_WEBSITE");
        let store = EnvSettingsStore::new("SMTEST_");

        assert!(!store.contains("WEBSITE"));
        assert!(!store.contains(""));
    }
}
