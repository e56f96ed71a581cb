//! API facade for the application.
//!
//! High-level functions that glue file loading to command execution.

use std::path::Path;

use crate::app::commands::{describe, resolve};
use crate::domain::{AppError, Kwargs, SettingMixin};

pub use crate::app::commands::describe::MixinDescription;
pub use crate::app::commands::resolve::ResolveOptions;

/// Resolve a declared mixin against settings files and the environment.
///
/// Returns the keyword arguments that would be forwarded to the initializer.
pub fn resolve(options: &ResolveOptions) -> Result<Kwargs, AppError> {
    resolve::execute(options)
}

/// Describe the managed settings of a declared mixin.
pub fn describe(mixin_path: &Path) -> Result<MixinDescription, AppError> {
    describe::execute(mixin_path)
}

/// Load a mixin declaration file (TOML, YAML or JSON).
pub fn load_mixin(path: &Path) -> Result<SettingMixin, AppError> {
    crate::app::declaration::load_mixin(path)
}
