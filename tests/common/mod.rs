//! Shared testing utilities for setting-mixins integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Directory holding the test's files.
    pub fn work_dir(&self) -> &Path {
        self.root.path()
    }

    /// Write `content` to `name` inside the work directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir().join(name);
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Declaration for the `country` / `website` mixin used throughout the tests.
    pub fn erebor_mixin(&self) -> PathBuf {
        self.write(
            "mixin.toml",
            r#"
names = ["country", "website"]

[attributes]
country_default = "Erebor"
country_setting = "COUNTRY"
website_default = "www.erebor.net"
website_setting = "WEBSITE"
"#,
        )
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("setting-mixins").expect("Failed to locate setting-mixins binary");
        cmd.current_dir(self.work_dir()).env_remove("SETTING_MIXINS_SETTINGS").env_remove("RUST_LOG");
        cmd
    }
}
