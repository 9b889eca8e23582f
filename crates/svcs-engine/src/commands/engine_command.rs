//! Engine-level commands.
//!
//! A single dispatch point so front ends do not need to know which
//! function implements which operation.

use crate::commands::checkout::{self, CheckoutResult};
use crate::commands::commit::{self, CommitOutcome};
use crate::commands::{config, history, track};
use svcs_core::identity::IdentitySource;
use svcs_core::model::{CommitLogEntry, TrackOutcome, TrackedPath};
use svcs_store::errors::Result;
use svcs_store::Repository;

/// Operations the engine can perform against a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Start tracking a working-tree path.
    Track { path: String },
    /// List tracked paths in tracking order.
    ListTracked,
    /// Snapshot the tracked files. `None` is refused as a missing message.
    Commit { message: Option<String> },
    /// Restore a snapshot. `None` is refused as a missing fingerprint.
    Checkout { fingerprint: Option<String> },
    /// List the commit log, most recent first.
    Log,
    /// Show the configured username.
    ShowAuthor,
    /// Set the username.
    SetAuthor { name: String },
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommandResult {
    Track(TrackOutcome),
    ListTracked(Vec<TrackedPath>),
    Commit(CommitOutcome),
    Checkout(CheckoutResult),
    Log(Vec<CommitLogEntry>),
    ShowAuthor(Option<String>),
    SetAuthor(String),
}

/// Apply an engine command.
///
/// `identity` supplies the author for `Commit`; other commands ignore it.
///
/// # Errors
///
/// Propagates the error of the underlying operation.
pub fn apply_engine_command(
    cmd: EngineCommand,
    repo: &Repository,
    identity: &dyn IdentitySource,
) -> Result<EngineCommandResult> {
    match cmd {
        EngineCommand::Track { path } => track::track(repo, &path).map(EngineCommandResult::Track),
        EngineCommand::ListTracked => {
            track::list_tracked(repo).map(EngineCommandResult::ListTracked)
        }
        EngineCommand::Commit { message } => {
            commit::commit(repo, identity, message.as_deref()).map(EngineCommandResult::Commit)
        }
        EngineCommand::Checkout { fingerprint } => {
            checkout::checkout(repo, fingerprint.as_deref()).map(EngineCommandResult::Checkout)
        }
        EngineCommand::Log => history::history(repo).map(EngineCommandResult::Log),
        EngineCommand::ShowAuthor => config::show_author(repo).map(EngineCommandResult::ShowAuthor),
        EngineCommand::SetAuthor { name } => {
            config::set_author(repo, &name).map(EngineCommandResult::SetAuthor)
        }
    }
}
