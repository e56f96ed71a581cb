use std::collections::BTreeMap;

use serde_json::Value;

use crate::domain::{AppError, SettingName};

use super::{SettingMixin, SettingPair};

/// Hand-assembles a [`SettingMixin`] from names and attributes.
///
/// Attributes follow the `{name}_setting` / `{name}_default` convention: at
/// build time each managed name claims its two attributes as its pair and
/// everything else stays an extra attribute. Unlike the factory, a builder
/// may produce a mixin with no names.
#[derive(Debug, Clone, Default)]
pub struct MixinBuilder {
    names: Vec<String>,
    attributes: BTreeMap<String, Value>,
}

impl MixinBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the managed names.
    pub fn setting_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    /// Manage `name` (if not already managed) with the given lookup key and default.
    pub fn setting(
        mut self,
        name: impl Into<String>,
        lookup_key: impl Into<String>,
        default: impl Into<Value>,
    ) -> Self {
        let name = name.into();
        self.attributes.insert(format!("{}_setting", name), Value::String(lookup_key.into()));
        self.attributes.insert(format!("{}_default", name), default.into());
        if !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    /// Set a single attribute, replacing any previous value.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Set several attributes at once.
    pub fn attributes<I, K>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn build(self) -> Result<SettingMixin, AppError> {
        let MixinBuilder { names, mut attributes } = self;

        let names = names.iter().map(|name| SettingName::new(name)).collect::<Result<Vec<_>, _>>()?;

        let mut pairs = BTreeMap::new();
        for name in &names {
            if pairs.contains_key(name) {
                continue;
            }
            let setting_attr = name.setting_attribute();
            let default_attr = name.default_attribute();

            let lookup_key = match attributes.remove(&setting_attr) {
                Some(Value::String(key)) => key,
                Some(other) => {
                    return Err(AppError::InvalidAttribute {
                        attribute: setting_attr,
                        reason: format!("lookup key must be a string, got {}", other),
                    });
                }
                None => {
                    return Err(AppError::IncompleteSetting {
                        name: name.to_string(),
                        attribute: setting_attr,
                    });
                }
            };
            let default = attributes.remove(&default_attr).ok_or_else(|| {
                AppError::IncompleteSetting { name: name.to_string(), attribute: default_attr }
            })?;

            pairs.insert(name.clone(), SettingPair { lookup_key, default });
        }

        Ok(SettingMixin::from_parts(names, pairs, attributes))
    }
}
