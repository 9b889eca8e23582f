//! svcs Store - persistence adapter
//!
//! The only crate that touches the repository's durable state:
//! - Tracked-file index (`vcs/index.txt`, newline-delimited, append-only)
//! - Commit log (`vcs/log.jsonl`, one JSON record per line, append-only)
//! - Repository configuration (`vcs/config.toml`)
//! - Snapshot store (`vcs/commits/<fingerprint>/...`)
//!
//! ## Concurrency
//!
//! There is no locking across invocations. Two processes working on the
//! same repository at once can interleave index or log appends and can
//! observe a snapshot directory while it is being published. The tool is
//! meant for a single local user running one command at a time.

pub mod atomic;
pub mod commit_log;
pub mod config;
pub mod errors;
pub mod index;
pub mod layout;
pub mod repo;
pub mod snapshot;

// Re-export key types
pub use commit_log::CommitLogFile;
pub use config::{ConfigFile, RepoConfig};
pub use errors::Result;
pub use index::IndexFile;
pub use layout::RepoLayout;
pub use repo::Repository;
pub use snapshot::{CreateOutcome, SnapshotContents, SnapshotStore};
