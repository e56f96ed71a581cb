use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;
use crate::impl_validated_id;

use super::validation::validate_keyword;

/// A validated setting name.
///
/// Setting names become keyword-argument keys, so they follow keyword rules:
/// - Non-empty
/// - Starts with an ASCII letter or `_`
/// - Contains only ASCII alphanumerics or `_`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SettingName(String);

impl_validated_id!(SettingName, validate_keyword, AppError::InvalidSettingName);

impl SettingName {
    /// Conventional attribute holding this name's lookup key.
    pub fn setting_attribute(&self) -> String {
        format!("{}_setting", self.0)
    }

    /// Conventional attribute holding this name's default.
    pub fn default_attribute(&self) -> String {
        format!("{}_default", self.0)
    }
}

impl From<SettingName> for String {
    fn from(val: SettingName) -> Self {
        val.0
    }
}

impl Serialize for SettingName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SettingName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        SettingName::new(&s).map_err(serde::de::Error::custom)
    }
}
