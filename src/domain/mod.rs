pub mod arguments;
pub mod error;
pub mod identifiers;
pub mod mixin;

pub use arguments::{Arguments, Kwargs, parse_literal};
pub use error::AppError;
pub use identifiers::SettingName;
pub use mixin::{
    MixinBuilder, MixinChain, SettingMixin, SettingMixinFactory, SettingPair, setting_mixin_factory,
};
