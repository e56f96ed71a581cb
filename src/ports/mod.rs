mod initializer;
mod settings_store;

pub use initializer::{FromKwargs, Initializer};
pub use settings_store::SettingsStore;
