//! setting-mixins: resolve configuration-backed keyword arguments with fallback defaults.
//!
//! A [`SettingMixin`] manages a list of setting names. Each name is paired with
//! a lookup key into a [`SettingsStore`] and a default. Before an
//! [`Initializer`] runs, the mixin fills in every managed keyword argument the
//! caller did not pass, reading the store and falling back to the default.
//!
//! ```
//! use setting_mixins::{Arguments, MemorySettingsStore, SettingMixinFactory};
//!
//! let mixin = SettingMixinFactory::new(["country"])
//!     .lookup_key("COUNTRY")
//!     .default("Erebor")
//!     .build()?;
//!
//! let store = MemorySettingsStore::new().with("COUNTRY", "Khazad Dum");
//! let arguments = mixin.inject(&store, Arguments::new());
//! assert_eq!(arguments.kwargs["country"], "Khazad Dum");
//! # Ok::<(), setting_mixins::AppError>(())
//! ```

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::{
    EnvSettingsStore, FileFormat, LayeredSettingsStore, MemorySettingsStore, override_settings,
};
pub use app::api::{MixinDescription, ResolveOptions, describe, load_mixin, resolve};
pub use app::declaration::{MixinDeclaration, SettingEntry};
pub use domain::{
    AppError, Arguments, Kwargs, MixinBuilder, MixinChain, SettingMixin, SettingMixinFactory,
    SettingName, SettingPair, parse_literal, setting_mixin_factory,
};
pub use ports::{FromKwargs, Initializer, SettingsStore};
