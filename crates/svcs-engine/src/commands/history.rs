//! Commit log listing.

use svcs_core::model::CommitLogEntry;
use svcs_core::{log_op_end, log_op_error, log_op_start};
use svcs_store::errors::Result;
use svcs_store::Repository;

/// Commit log entries, most recent first
///
/// ## Errors
///
/// - `Io` / `Corrupted`: the log cannot be read
pub fn history(repo: &Repository) -> Result<Vec<CommitLogEntry>> {
    log_op_start!("history");
    let start = std::time::Instant::now();

    let mut entries = repo.log().list().map_err(|e| {
        log_op_error!(
            "history",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;
    entries.reverse();

    log_op_end!(
        "history",
        duration_ms = start.elapsed().as_millis() as u64,
        entry_len = entries.len()
    );

    Ok(entries)
}
