//! Commit orchestration.
//!
//! ## Pipeline (in order):
//! 1. Require a non-blank message (no writes otherwise)
//! 2. Read the index and compute the snapshot fingerprint
//!    - nothing tracked ⇒ `NothingToCommit`
//! 3. Dedup: snapshot already exists ⇒ `NothingToCommit`, no log entry
//! 4. Resolve the author; none configured ⇒ refused before any write
//! 5. Publish the snapshot
//! 6. Append the log entry
//!
//! A failure in step 5 leaves no log entry. A failure in step 6 leaves a
//! published snapshot without a log entry; the next identical commit then
//! reports `NothingToCommit`.

use std::time::Instant;
use svcs_core::errors::{ExError, SvcsError};
use svcs_core::fingerprint;
use svcs_core::identity::IdentitySource;
use svcs_core::model::{CommitLogEntry, Fingerprint};
use svcs_core::{log_op_end, log_op_error, log_op_start};
use svcs_store::errors::Result;
use svcs_store::snapshot::CreateOutcome;
use svcs_store::Repository;

/// Why a commit produced nothing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NothingToCommit {
    /// The index is empty
    NoTrackedFiles,
    /// A snapshot of exactly this state already exists
    Unchanged { fingerprint: Fingerprint },
}

/// Terminal state of a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new snapshot was published and logged
    Committed(CommitLogEntry),
    /// No-op; not an error
    NothingToCommit(NothingToCommit),
}

impl CommitOutcome {
    fn label(&self) -> &'static str {
        match self {
            CommitOutcome::Committed(_) => "committed",
            CommitOutcome::NothingToCommit(NothingToCommit::NoTrackedFiles) => "no_tracked_files",
            CommitOutcome::NothingToCommit(NothingToCommit::Unchanged { .. }) => "unchanged",
        }
    }
}

/// Fingerprint of the working tree's tracked files, in index order
///
/// Returns `None` when nothing is tracked.
///
/// ## Errors
///
/// - `Io`: a tracked file cannot be read, or the index cannot be read
pub fn snapshot_fingerprint(repo: &Repository) -> Result<Option<Fingerprint>> {
    let tracked = repo.index().list()?;
    Ok(fingerprint::snapshot_fingerprint(repo.root(), &tracked)?)
}

/// Commit the current state of every tracked file
///
/// ## Errors
///
/// - `MissingMessage`: `message` is absent or blank
/// - `MissingIdentity`: no author configured (checked before any write)
/// - `Io`: a tracked file cannot be read or copied, or the log cannot be written
pub fn commit(
    repo: &Repository,
    identity: &dyn IdentitySource,
    message: Option<&str>,
) -> Result<CommitOutcome> {
    log_op_start!("commit");
    let start = Instant::now();

    let outcome = commit_impl(repo, identity, message).map_err(|e| {
        log_op_error!(
            "commit",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    match &outcome {
        CommitOutcome::Committed(entry) => {
            log_op_end!(
                "commit",
                duration_ms = start.elapsed().as_millis() as u64,
                outcome = outcome.label(),
                fingerprint = %entry.fingerprint,
                author = entry.author.as_str()
            );
        }
        CommitOutcome::NothingToCommit(_) => {
            log_op_end!(
                "commit",
                duration_ms = start.elapsed().as_millis() as u64,
                outcome = outcome.label()
            );
        }
    }

    Ok(outcome)
}

fn commit_impl(
    repo: &Repository,
    identity: &dyn IdentitySource,
    message: Option<&str>,
) -> Result<CommitOutcome> {
    let message = match message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(ExError::from(SvcsError::MessageMissing).with_op("commit")),
    };

    let tracked = repo.index().list()?;
    let Some(fingerprint) = fingerprint::snapshot_fingerprint(repo.root(), &tracked)? else {
        return Ok(CommitOutcome::NothingToCommit(
            NothingToCommit::NoTrackedFiles,
        ));
    };

    if repo.snapshots().exists(&fingerprint) {
        tracing::debug!(fingerprint = %fingerprint, "Snapshot exists, skipping");
        return Ok(CommitOutcome::NothingToCommit(NothingToCommit::Unchanged {
            fingerprint,
        }));
    }

    let Some(author) = identity.author()? else {
        return Err(ExError::from(SvcsError::IdentityNotConfigured).with_op("commit"));
    };

    match repo.snapshots().create(&fingerprint, repo.root(), &tracked)? {
        CreateOutcome::Created { files } => {
            tracing::debug!(fingerprint = %fingerprint, files, "Snapshot created");
        }
        CreateOutcome::AlreadyExists => {
            return Ok(CommitOutcome::NothingToCommit(NothingToCommit::Unchanged {
                fingerprint,
            }));
        }
    }

    let entry = CommitLogEntry::new(fingerprint, message, author);
    repo.log().append(&entry)?;

    Ok(CommitOutcome::Committed(entry))
}
