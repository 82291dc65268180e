//! Consolidated test utilities for repo-switcher
//!
//! Provides an isolated environment per test: a temporary HOME and
//! XDG_CONFIG_HOME, a config file pointing at a temporary repository tree,
//! and helpers for creating fake repositories (directories with a `.git`
//! marker).

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    /// Creates a fresh environment with a config pointing at `repos_root()`.
    pub fn new() -> anyhow::Result<Self> {
        let env = Self {
            root: TempDir::new()?,
        };
        fs::create_dir_all(env.repos_root())?;
        env.write_config(&[env.repos_root()])?;
        Ok(env)
    }

    /// Where XDG_CONFIG_HOME points during the test.
    pub fn config_home(&self) -> PathBuf {
        self.root.path().join("config")
    }

    /// Root path the config tells repo-switcher to scan.
    pub fn repos_root(&self) -> PathBuf {
        self.root.path().join("repos")
    }

    /// The cache file the binary is expected to write.
    pub fn cache_file(&self) -> PathBuf {
        self.config_home()
            .join("repo-switcher")
            .join("repos-cache.json")
    }

    /// Writes `config.json` with the given root paths.
    pub fn write_config(&self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let dir = self.config_home().join("repo-switcher");
        fs::create_dir_all(&dir)?;
        let paths: Vec<String> = paths
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
        let content = serde_json::to_string_pretty(&serde_json::json!({ "paths": paths }))?;
        fs::write(dir.join("config.json"), content)?;
        Ok(())
    }

    /// Creates a fake repository: a directory holding a `.git` marker.
    pub fn add_repo(&self, rel: &str) -> anyhow::Result<PathBuf> {
        let repo = self.repos_root().join(rel);
        fs::create_dir_all(repo.join(".git"))?;
        Ok(repo)
    }

    /// A `repo-switcher` command wired to this environment.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("repo-switcher").expect("binary builds");
        cmd.env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env_remove("RUST_LOG");
        cmd
    }
}
