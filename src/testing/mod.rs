mod env_var_guard;
mod fixtures;
mod recording_target;

pub use env_var_guard::EnvVarGuard;
pub use fixtures::erebor_mixin;
pub use recording_target::RecordingTarget;
