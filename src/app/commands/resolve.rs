use std::path::PathBuf;

use serde_json::Value;
use tracing::debug;

use crate::adapters::{EnvSettingsStore, LayeredSettingsStore, MemorySettingsStore, settings_file};
use crate::app::declaration::load_mixin;
use crate::domain::{AppError, Arguments, Kwargs};
use crate::ports::SettingsStore;

#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Mixin declaration file.
    pub mixin: PathBuf,
    /// Settings files, merged in order; later files win.
    pub settings: Vec<PathBuf>,
    /// When set, environment variables `{prefix}{KEY}` shadow file settings.
    pub env_prefix: Option<String>,
    /// Keyword arguments supplied by the caller; never overridden.
    pub kwargs: Vec<(String, Value)>,
}

/// Load the mixin and the settings store, then return the forwarded kwargs.
pub fn execute(options: &ResolveOptions) -> Result<Kwargs, AppError> {
    let mixin = load_mixin(&options.mixin)?;
    let store = build_store(&options.settings, options.env_prefix.as_deref())?;

    let arguments = Arguments::from_kwargs(options.kwargs.iter().cloned().collect());

    Ok(mixin.inject(&*store, arguments).kwargs)
}

/// Merge settings files and optionally layer the environment on top.
pub fn build_store(
    files: &[PathBuf],
    env_prefix: Option<&str>,
) -> Result<Box<dyn SettingsStore>, AppError> {
    let mut merged = MemorySettingsStore::new();
    for path in files {
        let store = settings_file::load(path)?;
        debug!(file = %path.display(), settings = store.len(), "loaded settings file");
        merged.merge(store);
    }

    Ok(match env_prefix {
        Some(prefix) => Box::new(LayeredSettingsStore::new(EnvSettingsStore::new(prefix), merged)),
        None => Box::new(merged),
    })
}
