//! Settings files: TOML, YAML or JSON documents with upper-case top-level keys.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use super::MemorySettingsStore;
use crate::domain::AppError;

/// Supported document formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Toml,
    Yaml,
    Json,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(FileFormat::Toml),
            Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
            Some("json") => Ok(FileFormat::Json),
            _ => Err(AppError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse `content` into a JSON value.
    pub fn parse(self, content: &str, what: &str) -> Result<Value, AppError> {
        match self {
            FileFormat::Toml => Ok(toml_to_json(toml::Value::Table(toml::from_str(content)?))),
            FileFormat::Yaml => serde_yaml::from_str(content).map_err(|e| AppError::parse_error(what, e)),
            FileFormat::Json => serde_json::from_str(content).map_err(|e| AppError::parse_error(what, e)),
        }
    }
}

/// Load a settings file into a store.
pub fn load(path: &Path) -> Result<MemorySettingsStore, AppError> {
    let format = FileFormat::from_path(path)?;
    let content = fs::read_to_string(path)?;
    parse_settings(&content, format, &path.display().to_string())
}

/// Parse settings content. Only upper-case top-level keys are settings.
pub fn parse_settings(content: &str, format: FileFormat, what: &str) -> Result<MemorySettingsStore, AppError> {
    let document = match format.parse(content, what)? {
        Value::Object(map) => map,
        Value::Null => serde_json::Map::new(),
        other => {
            return Err(AppError::parse_error(
                what,
                format!("expected a mapping of settings, found {}", type_name(&other)),
            ));
        }
    };

    let mut store = MemorySettingsStore::new();
    for (key, value) in document {
        if is_setting_key(&key) {
            store.insert(key, value);
        } else {
            debug!(key = %key, file = %what, "skipping non upper-case key in settings file");
        }
    }
    Ok(store)
}

fn is_setting_key(key: &str) -> bool {
    key.chars().any(char::is_uppercase) && key == key.to_uppercase()
}

/// Datetimes become their RFC 3339 text; non-finite floats become null.
fn toml_to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::from(i),
        toml::Value::Float(f) => serde_json::Number::from_f64(f).map_or(Value::Null, Value::Number),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
        toml::Value::Table(table) => {
            Value::Object(table.into_iter().map(|(k, v)| (k, toml_to_json(v))).collect())
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a mapping",
    }
}
