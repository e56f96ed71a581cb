//! Setting mixins: managed names resolved into keyword arguments.

pub mod builder;
pub mod chain;
pub mod factory;
pub mod setting_mixin;

pub use builder::MixinBuilder;
pub use chain::MixinChain;
pub use factory::{SettingMixinFactory, setting_mixin_factory};
pub use setting_mixin::{SettingMixin, SettingPair};
