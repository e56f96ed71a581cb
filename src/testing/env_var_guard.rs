use std::env;
use std::ffi::OsString;

/// Sets or removes an environment variable and restores it on drop.
///
/// Tests using it must be `#[serial]`.
pub struct EnvVarGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set(key: &str, value: &str) -> Self {
        let original = env::var_os(key);
        unsafe {
            env::set_var(key, value);
        }
        Self { key: key.to_string(), original }
    }

    pub fn remove(key: &str) -> Self {
        let original = env::var_os(key);
        unsafe {
            env::remove_var(key);
        }
        Self { key: key.to_string(), original }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        match self.original.as_ref() {
            Some(original) => unsafe { env::set_var(&self.key, original) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}
