//! Mixin declaration files.
//!
//! A declaration describes one mixin in TOML, YAML or JSON and is turned into
//! a [`SettingMixin`] through the factory, so the factory's rules apply:
//!
//! ```toml
//! names = ["country", "website"]
//!
//! [attributes]
//! country_setting = "COUNTRY"
//! country_default = "Erebor"
//!
//! [[settings]]
//! name = "website"
//! lookup_key = "WEBSITE"
//! default = "www.erebor.net"
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::adapters::FileFormat;
use crate::domain::{AppError, SettingMixin, SettingMixinFactory};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MixinDeclaration {
    /// Managed names, in order.
    #[serde(default)]
    pub names: Vec<String>,
    /// Shared lookup key (single-name declarations only).
    #[serde(default)]
    pub setting: String,
    /// Shared default (single-name declarations only).
    #[serde(default = "unset")]
    pub default: Value,
    /// Extra attributes, including `{name}_setting` / `{name}_default` pairs.
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
    /// Explicit per-name table; names not listed in `names` are appended.
    #[serde(default)]
    pub settings: Vec<SettingEntry>,
}

/// One row of the per-name table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingEntry {
    pub name: String,
    #[serde(default)]
    pub lookup_key: String,
    #[serde(default = "unset")]
    pub default: Value,
}

fn unset() -> Value {
    Value::String(String::new())
}

impl MixinDeclaration {
    pub fn parse(content: &str, format: FileFormat, what: &str) -> Result<Self, AppError> {
        let document = match format.parse(content, what)? {
            Value::Null => Value::Object(serde_json::Map::new()),
            other => other,
        };
        serde_json::from_value(document).map_err(|e| AppError::parse_error(what, e))
    }

    /// Build the mixin. Per-name table rows win over `[attributes]`.
    pub fn into_mixin(self) -> Result<SettingMixin, AppError> {
        let MixinDeclaration { mut names, setting, default, mut attributes, settings } = self;

        for entry in settings {
            attributes.insert(format!("{}_setting", entry.name), Value::String(entry.lookup_key));
            attributes.insert(format!("{}_default", entry.name), entry.default);
            if !names.contains(&entry.name) {
                names.push(entry.name);
            }
        }

        SettingMixinFactory::new(names).lookup_key(setting).default(default).attributes(attributes).build()
    }
}

/// Load a declaration file and build its mixin.
pub fn load_mixin(path: &Path) -> Result<SettingMixin, AppError> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    MixinDeclaration::parse(&content, format, &path.display().to_string())?.into_mixin()
}
