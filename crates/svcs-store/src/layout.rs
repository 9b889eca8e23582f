//! On-disk layout of a repository.

use crate::errors::{io_error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use svcs_core::model::METADATA_DIR;

pub const INDEX_FILE: &str = "index.txt";
pub const LOG_FILE: &str = "log.jsonl";
pub const CONFIG_FILE: &str = "config.toml";
pub const COMMITS_DIR: &str = "commits";

/// Every durable path, derived from the working-tree root.
#[derive(Debug, Clone)]
pub struct RepoLayout {
    root: PathBuf,
}

impl RepoLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Working-tree root
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn metadata_dir(&self) -> PathBuf {
        self.root.join(METADATA_DIR)
    }

    pub fn index_path(&self) -> PathBuf {
        self.metadata_dir().join(INDEX_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.metadata_dir().join(LOG_FILE)
    }

    pub fn config_path(&self) -> PathBuf {
        self.metadata_dir().join(CONFIG_FILE)
    }

    pub fn commits_dir(&self) -> PathBuf {
        self.metadata_dir().join(COMMITS_DIR)
    }

    /// Create the metadata and commits directories if missing
    ///
    /// # Errors
    ///
    /// Returns an IO error if a directory cannot be created.
    pub fn bootstrap(&self) -> Result<()> {
        let commits = self.commits_dir();
        fs::create_dir_all(&commits).map_err(|e| io_error("bootstrap", &commits, e))?;
        tracing::debug!(root = %self.root.display(), "Bootstrapped repository layout");
        Ok(())
    }
}
