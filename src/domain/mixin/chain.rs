use crate::domain::{AppError, Arguments, SettingName};
use crate::ports::{Initializer, SettingsStore};

use super::SettingMixin;

/// Several mixins composed ahead of one initializer.
///
/// Mixins run in order and never overwrite a present keyword, so the first
/// mixin that manages a name decides its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MixinChain {
    mixins: Vec<SettingMixin>,
}

impl MixinChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mixin after the existing ones.
    pub fn with(mut self, mixin: SettingMixin) -> Self {
        self.mixins.push(mixin);
        self
    }

    /// Every name managed somewhere in the chain, first occurrence first.
    pub fn setting_names(&self) -> Vec<&SettingName> {
        let mut names: Vec<&SettingName> = Vec::new();
        for name in self.mixins.iter().flat_map(|m| m.setting_names()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }

    pub fn inject<S: SettingsStore + ?Sized>(&self, store: &S, arguments: Arguments) -> Arguments {
        self.mixins.iter().fold(arguments, |arguments, mixin| mixin.inject(store, arguments))
    }

    pub fn construct<T, S>(&self, store: &S, arguments: Arguments) -> Result<T, AppError>
    where
        T: Initializer,
        S: SettingsStore + ?Sized,
    {
        T::initialize(self.inject(store, arguments))
    }
}

impl FromIterator<SettingMixin> for MixinChain {
    fn from_iter<I: IntoIterator<Item = SettingMixin>>(iter: I) -> Self {
        Self { mixins: iter.into_iter().collect() }
    }
}
