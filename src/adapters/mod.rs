pub mod env_settings_store;
pub mod layered_settings_store;
pub mod memory_settings_store;
pub mod settings_file;

pub use env_settings_store::EnvSettingsStore;
pub use layered_settings_store::{LayeredSettingsStore, override_settings};
pub use memory_settings_store::MemorySettingsStore;
pub use settings_file::FileFormat;
