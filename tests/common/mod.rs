//! Shared testing utilities for promptmaster CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Application home passed as `PROMPTMASTER_HOME`.
    pub fn app_home(&self) -> PathBuf {
        self.root.path().join("app")
    }

    /// Directory used as the working directory for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for the compiled binary with no API key in its environment.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("promptmaster").expect("Failed to locate binary");
        cmd.current_dir(self.work_dir())
            .env("HOME", self.home())
            .env("PROMPTMASTER_HOME", self.app_home())
            .env_remove("GEMINI_API_KEY")
            .env_remove("API_KEY")
            .env_remove("PROMPTMASTER_LOG");
        cmd
    }

    /// Same as [`cli`](Self::cli) with an API key set.
    pub fn cli_with_key(&self) -> Command {
        let mut cmd = self.cli();
        cmd.env("GEMINI_API_KEY", "test-key");
        cmd
    }

    /// Point the client at `base_url` through `config.toml`.
    pub fn write_config(&self, base_url: &str) {
        fs::create_dir_all(self.app_home()).expect("Failed to create app home");
        let content = format!("[api]\nbase_url = \"{}/\"\n", base_url.trim_end_matches('/'));
        fs::write(self.app_home().join("config.toml"), content).expect("Failed to write config");
    }

    /// Path of the saved configuration list.
    pub fn storage_file(&self) -> PathBuf {
        self.app_home().join("storage").join("promptMasterConfigs.json")
    }

    /// Seed the saved configuration list with raw JSON.
    pub fn write_storage(&self, json: &str) {
        let path = self.storage_file();
        fs::create_dir_all(path.parent().expect("storage dir")).expect("Failed to create storage");
        fs::write(path, json).expect("Failed to write storage");
    }
}
