use std::collections::BTreeMap;

use serde_json::Value;
use tracing::{debug, trace};

use crate::domain::{AppError, Arguments, Kwargs, SettingName};
use crate::ports::{Initializer, SettingsStore};

use super::builder::MixinBuilder;

/// Lookup key and fallback default for one managed setting.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingPair {
    /// Key read from the settings store. Empty means "always use the default".
    pub lookup_key: String,
    /// Value used when `lookup_key` is absent from the store.
    pub default: Value,
}

impl SettingPair {
    pub fn new(lookup_key: impl Into<String>, default: impl Into<Value>) -> Self {
        Self { lookup_key: lookup_key.into(), default: default.into() }
    }

    /// Resolve against `store`, falling back to the default.
    pub fn resolve<S: SettingsStore + ?Sized>(&self, store: &S) -> Value {
        if !self.lookup_key.is_empty() {
            if let Some(value) = store.get(&self.lookup_key) {
                trace!(lookup_key = %self.lookup_key, "setting found in store");
                return value;
            }
        }
        debug!(lookup_key = %self.lookup_key, "setting not found in store, using default");
        self.default.clone()
    }
}

/// A set of managed settings injected as keyword arguments before construction.
///
/// Built by [`setting_mixin_factory`](super::setting_mixin_factory), by
/// [`MixinBuilder`], or derived from another mixin with [`SettingMixin::subclass`].
/// Immutable once built; every resolution reads the store afresh.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingMixin {
    names: Vec<SettingName>,
    pairs: BTreeMap<SettingName, SettingPair>,
    attributes: BTreeMap<String, Value>,
}

impl SettingMixin {
    /// The base mixin: manages nothing and forwards arguments untouched.
    pub fn base() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(
        names: Vec<SettingName>,
        pairs: BTreeMap<SettingName, SettingPair>,
        attributes: BTreeMap<String, Value>,
    ) -> Self {
        Self { names, pairs, attributes }
    }

    /// Managed setting names, in declaration order.
    pub fn setting_names(&self) -> &[SettingName] {
        &self.names
    }

    /// Lookup key and default for a managed name.
    pub fn pair(&self, name: &str) -> Option<&SettingPair> {
        self.pairs.get(name)
    }

    /// Managed names with their pairs, in declaration order, without repeats.
    pub fn pairs(&self) -> impl Iterator<Item = (&SettingName, &SettingPair)> {
        let mut seen: Vec<&SettingName> = Vec::with_capacity(self.names.len());
        self.names.iter().filter_map(move |name| {
            if seen.contains(&name) {
                return None;
            }
            seen.push(name);
            self.pairs.get(name).map(|pair| (name, pair))
        })
    }

    /// Attributes that are not the lookup key or default of a managed name.
    pub fn extra_attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Read an attribute by its conventional name.
    ///
    /// `{name}_setting` and `{name}_default` of managed names map onto their
    /// pair; anything else is looked up among the extra attributes.
    pub fn attribute(&self, key: &str) -> Option<Value> {
        for (name, pair) in &self.pairs {
            if key.strip_suffix("_setting") == Some(name.as_str()) {
                return Some(Value::String(pair.lookup_key.clone()));
            }
            if key.strip_suffix("_default") == Some(name.as_str()) {
                return Some(pair.default.clone());
            }
        }
        self.attributes.get(key).cloned()
    }

    /// Resolve one setting against `store`.
    ///
    /// Returns the store's value under the name's lookup key, or the default
    /// when the key is empty or absent. Names that are not managed may still be
    /// resolved when both `{name}_setting` and `{name}_default` exist among the
    /// extra attributes.
    pub fn get_setting<S: SettingsStore + ?Sized>(
        &self,
        store: &S,
        name: &str,
    ) -> Result<Value, AppError> {
        if let Some(pair) = self.pairs.get(name) {
            return Ok(pair.resolve(store));
        }

        let lookup_key = self.attributes.get(&format!("{}_setting", name));
        let default = self.attributes.get(&format!("{}_default", name));
        match (lookup_key, default) {
            (Some(Value::String(lookup_key)), Some(default)) => {
                Ok(SettingPair::new(lookup_key.clone(), default.clone()).resolve(store))
            }
            _ => Err(AppError::UnknownSetting(name.to_string())),
        }
    }

    /// Fill every managed name missing from `kwargs`. Present values are kept.
    pub fn resolve_into<S: SettingsStore + ?Sized>(&self, store: &S, kwargs: &mut Kwargs) {
        for name in &self.names {
            if kwargs.contains_key(name.as_str()) {
                continue;
            }
            if let Some(pair) = self.pairs.get(name) {
                kwargs.insert(name.to_string(), pair.resolve(store));
            }
        }
    }

    /// Return `arguments` with missing managed settings filled in.
    pub fn inject<S: SettingsStore + ?Sized>(&self, store: &S, mut arguments: Arguments) -> Arguments {
        self.resolve_into(store, &mut arguments.kwargs);
        arguments
    }

    /// Inject settings, then hand everything to `T`'s initializer.
    pub fn construct<T, S>(&self, store: &S, arguments: Arguments) -> Result<T, AppError>
    where
        T: Initializer,
        S: SettingsStore + ?Sized,
    {
        T::initialize(self.inject(store, arguments))
    }

    /// Start a builder that inherits this mixin's names, pairs and attributes.
    pub fn subclass(&self) -> MixinBuilder {
        let mut builder = MixinBuilder::new()
            .setting_names(self.names.iter().map(SettingName::as_str))
            .attributes(self.attributes.clone());
        for (name, pair) in &self.pairs {
            builder = builder.setting(name.as_str(), pair.lookup_key.clone(), pair.default.clone());
        }
        builder
    }
}
