use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::app::declaration::load_mixin;
use crate::domain::{AppError, SettingMixin};

/// Machine-readable view of a mixin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixinDescription {
    pub setting_names: Vec<String>,
    /// Per managed name, its `{name}_setting` and `{name}_default` attributes.
    pub settings: BTreeMap<String, BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, Value>,
}

impl From<&SettingMixin> for MixinDescription {
    fn from(mixin: &SettingMixin) -> Self {
        let settings = mixin
            .pairs()
            .map(|(name, pair)| {
                let attributes = BTreeMap::from([
                    (name.setting_attribute(), Value::String(pair.lookup_key.clone())),
                    (name.default_attribute(), pair.default.clone()),
                ]);
                (name.to_string(), attributes)
            })
            .collect();

        Self {
            setting_names: mixin.setting_names().iter().map(|n| n.to_string()).collect(),
            settings,
            attributes: mixin.extra_attributes().clone(),
        }
    }
}

pub fn execute(mixin_path: &Path) -> Result<MixinDescription, AppError> {
    let mixin = load_mixin(mixin_path)?;
    Ok(MixinDescription::from(&mixin))
}
