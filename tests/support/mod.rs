use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub struct TestStore {
    dir: TempDir,
}

impl TestStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join("tasks.json")
    }

    pub fn read_state(&self) -> Value {
        let raw = fs::read_to_string(self.state_path()).expect("read state file");
        serde_json::from_str(&raw).expect("state json")
    }

    pub fn write_config(&self, contents: &str) -> std::io::Result<PathBuf> {
        let path = self.dir.path().join(".tick.toml");
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Build a tick command pointed at this store.
    pub fn cmd(&self) -> Command {
        let mut cmd = tick_cmd();
        cmd.current_dir(self.dir.path());
        cmd.env("TICK_STORE", self.state_path());
        cmd
    }

    /// Add a task via the CLI and return its id.
    pub fn add_task(&self, title: &str) -> String {
        let output = self
            .cmd()
            .args(["add", title, "--json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let value: Value = serde_json::from_slice(&output).expect("add json");
        value["data"]["id"].as_str().expect("task id").to_string()
    }
}

pub fn tick_cmd() -> Command {
    Command::cargo_bin("tick").expect("tick binary")
}
