//! Repository handle bundling every durable component.
//!
//! Constructed once per invocation and passed explicitly into each engine
//! operation; no component reads global state.

use crate::commit_log::CommitLogFile;
use crate::config::ConfigFile;
use crate::errors::Result;
use crate::index::IndexFile;
use crate::layout::RepoLayout;
use crate::snapshot::SnapshotStore;
use std::path::{Path, PathBuf};

/// Durable state of one working tree
#[derive(Debug, Clone)]
pub struct Repository {
    layout: RepoLayout,
    index: IndexFile,
    log: CommitLogFile,
    config: ConfigFile,
    snapshots: SnapshotStore,
}

impl Repository {
    /// Open the repository rooted at `root` without touching the disk
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let layout = RepoLayout::new(root);
        Self {
            index: IndexFile::new(layout.index_path()),
            log: CommitLogFile::new(layout.log_path()),
            config: ConfigFile::new(layout.config_path()),
            snapshots: SnapshotStore::new(layout.commits_dir()),
            layout,
        }
    }

    /// Open the repository and create its metadata directories
    ///
    /// # Errors
    ///
    /// Returns an IO error if the directories cannot be created.
    pub fn init(root: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self::open(root);
        repo.layout.bootstrap()?;
        Ok(repo)
    }

    /// Working-tree root
    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    pub fn layout(&self) -> &RepoLayout {
        &self.layout
    }

    pub fn index(&self) -> &IndexFile {
        &self.index
    }

    pub fn log(&self) -> &CommitLogFile {
        &self.log
    }

    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn snapshots(&self) -> &SnapshotStore {
        &self.snapshots
    }
}
