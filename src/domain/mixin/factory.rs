use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::domain::AppError;

use super::{MixinBuilder, SettingMixin};

/// Create a setting mixin from the provided name(s).
///
/// Every name receives `lookup_key` and `default` as its pair. A shared pair
/// only makes sense for a single name, so with several names both must be
/// left unset (empty string) and per-name pairs go through
/// `extra_attributes` as `{name}_setting` / `{name}_default`. Those only fill
/// the half of a pair whose shared value is unset.
pub fn setting_mixin_factory<I, S>(
    names: I,
    lookup_key: &str,
    default: impl Into<Value>,
    extra_attributes: BTreeMap<String, Value>,
) -> Result<SettingMixin, AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SettingMixinFactory::new(names)
        .lookup_key(lookup_key)
        .default(default)
        .attributes(extra_attributes)
        .build()
}

/// Fluent form of [`setting_mixin_factory`].
#[derive(Debug, Clone)]
pub struct SettingMixinFactory {
    names: Vec<String>,
    lookup_key: String,
    default: Value,
    attributes: BTreeMap<String, Value>,
}

impl SettingMixinFactory {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            lookup_key: String::new(),
            default: unset(),
            attributes: BTreeMap::new(),
        }
    }

    /// Shared lookup key (single-name mixins only).
    pub fn lookup_key(mut self, lookup_key: impl Into<String>) -> Self {
        self.lookup_key = lookup_key.into();
        self
    }

    /// Shared default (single-name mixins only).
    pub fn default(mut self, default: impl Into<Value>) -> Self {
        self.default = default.into();
        self
    }

    /// Extra attribute set on the produced mixin.
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn attributes<I, K>(mut self, attributes: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        self.attributes.extend(attributes.into_iter().map(|(k, v)| (k.into(), v)));
        self
    }

    pub fn build(self) -> Result<SettingMixin, AppError> {
        let SettingMixinFactory { names, lookup_key, default, mut attributes } = self;

        if names.is_empty() {
            return Err(AppError::MissingSettingNames);
        }
        if names.len() > 1 && (!lookup_key.is_empty() || default != unset()) {
            return Err(AppError::MultipleSettingsWithDefaults { count: names.len() });
        }

        for name in &names {
            claim(
                &mut attributes,
                format!("{}_setting", name),
                Value::String(lookup_key.clone()),
                lookup_key.is_empty(),
            );
            claim(&mut attributes, format!("{}_default", name), default.clone(), default == unset());
        }
        let mixin = MixinBuilder::new().setting_names(names).attributes(attributes).build()?;

        debug!(names = ?mixin.setting_names(), "created setting mixin");
        Ok(mixin)
    }
}

fn unset() -> Value {
    Value::String(String::new())
}

/// An explicit shared value always lands; an unset one only fills a gap.
fn claim(attributes: &mut BTreeMap<String, Value>, key: String, value: Value, is_unset: bool) {
    if is_unset {
        attributes.entry(key).or_insert(value);
    } else {
        attributes.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::adapters::MemorySettingsStore;
    use crate::domain::{Arguments, SettingPair};

    #[test]
    fn no_names_is_rejected() {
        let result = SettingMixinFactory::new(Vec::<String>::new()).build();
        assert!(matches!(result, Err(AppError::MissingSettingNames)));
    }

    #[test]
    fn no_names_message_mentions_at_least_one_setting() {
        let err = setting_mixin_factory(Vec::<&str>::new(), "", "", BTreeMap::new()).unwrap_err();
        assert!(err.to_string().contains("at least one setting"));
    }

    #[test]
    fn multiple_names_with_shared_pair_is_rejected() {
        let err = SettingMixinFactory::new(["country", "website"])
            .lookup_key("COUNTRY")
            .default("Erebor")
            .build()
            .unwrap_err();

        assert!(matches!(err, AppError::MultipleSettingsWithDefaults { count: 2 }));
        assert_eq!(
            err.to_string(),
            "When setting_mixin_factory() is called with 2 setting names it doesn't expect \
             to handle the setting label and default as well."
        );
    }

    #[test]
    fn multiple_names_with_only_default_is_rejected() {
        let result = SettingMixinFactory::new(["a", "b", "c"]).default(Value::Null).build();
        assert!(matches!(result, Err(AppError::MultipleSettingsWithDefaults { count: 3 })));
    }

    #[test]
    fn single_name_takes_shared_pair() {
        let mixin =
            SettingMixinFactory::new(["country"]).lookup_key("COUNTRY").default("Erebor").build().unwrap();

        assert_eq!(mixin.pair("country"), Some(&SettingPair::new("COUNTRY", "Erebor")));
        let injected = mixin.inject(&MemorySettingsStore::new(), Arguments::new());
        assert_eq!(injected.kwargs, json!({"country": "Erebor"}).as_object().cloned().unwrap());
    }

    #[test]
    fn shared_pair_beats_per_name_attributes() {
        let mixin = SettingMixinFactory::new(["country"])
            .lookup_key("COUNTRY")
            .default("Erebor")
            .attribute("country_setting", "OTHER")
            .attribute("country_default", "Moria")
            .build()
            .unwrap();
        let store = MemorySettingsStore::new().with("COUNTRY", "Khazad Dum");

        assert_eq!(mixin.pair("country"), Some(&SettingPair::new("COUNTRY", "Erebor")));
        assert_eq!(mixin.get_setting(&store, "country").unwrap(), json!("Khazad Dum"));
    }

    #[test]
    fn per_name_attribute_fills_unset_half() {
        let mixin = SettingMixinFactory::new(["country"])
            .lookup_key("COUNTRY")
            .attribute("country_default", "Erebor")
            .build()
            .unwrap();

        assert_eq!(mixin.pair("country"), Some(&SettingPair::new("COUNTRY", "Erebor")));
    }

    #[test]
    fn multiple_names_get_empty_pairs() {
        let mixin = SettingMixinFactory::new(["country", "website"]).build().unwrap();

        assert_eq!(mixin.pair("country"), Some(&SettingPair::new("", "")));
        assert_eq!(mixin.pair("website"), Some(&SettingPair::new("", "")));
    }

    #[test]
    fn per_name_attributes_seed_multi_name_mixin() {
        let mixin = SettingMixinFactory::new(["country", "website"])
            .attribute("country_setting", "COUNTRY")
            .attribute("country_default", "Erebor")
            .attribute("website_setting", "WEBSITE")
            .attribute("website_default", "www.erebor.net")
            .build()
            .unwrap();
        let store = MemorySettingsStore::new().with("COUNTRY", "Khazad Dum");

        let injected = mixin.inject(&store, Arguments::new());
        assert_eq!(
            Value::Object(injected.kwargs),
            json!({"country": "Khazad Dum", "website": "www.erebor.net"})
        );
    }

    #[test]
    fn invalid_name_is_rejected_after_count_checks() {
        let result = SettingMixinFactory::new(["bad name"]).build();
        assert!(matches!(result, Err(AppError::InvalidSettingName(_))));
    }

    fn names_strategy() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z_][a-z0-9_]{0,8}", 1..6)
    }

    proptest! {
        #[test]
        fn managed_names_match_input_order(names in names_strategy()) {
            let mixin = SettingMixinFactory::new(names.clone()).build().unwrap();
            let managed: Vec<String> =
                mixin.setting_names().iter().map(|n| n.to_string()).collect();
            prop_assert_eq!(managed, names);
        }

        #[test]
        fn shared_pair_with_many_names_reports_count(
            names in prop::collection::vec("[a-z]{1,6}", 2..8),
            lookup_key in "[A-Z]{1,8}",
        ) {
            let count = names.len();
            let err = SettingMixinFactory::new(names).lookup_key(lookup_key).build().unwrap_err();
            prop_assert!(err.to_string().contains(&count.to_string()));
            let is_multiple = matches!(err, AppError::MultipleSettingsWithDefaults { .. });
            prop_assert!(is_multiple);
        }
    }
}
