//! Tracked-file index operations.

use svcs_core::errors::ExError;
use svcs_core::model::{TrackOutcome, TrackedPath};
use svcs_core::{log_op_end, log_op_error, log_op_start};
use svcs_store::errors::Result;
use svcs_store::Repository;

/// Start tracking the file at `raw_path` (relative to the working tree)
///
/// ## Errors
///
/// - `InvalidPath`: the path is absolute, escapes the tree, or names the metadata directory
/// - `FileNotFound`: no file exists at the path
/// - `Io`: the index cannot be read or appended
pub fn track(repo: &Repository, raw_path: &str) -> Result<TrackOutcome> {
    log_op_start!("track", path = raw_path);
    let start = std::time::Instant::now();

    let result = TrackedPath::parse(raw_path)
        .map_err(ExError::from)
        .and_then(|path| repo.index().track(repo.root(), &path))
        .map_err(|e| {
            log_op_error!(
                "track",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64,
                path = raw_path
            );
            e
        })?;

    log_op_end!(
        "track",
        duration_ms = start.elapsed().as_millis() as u64,
        path = %result.path(),
        already_tracked = matches!(result, TrackOutcome::AlreadyTracked(_))
    );

    Ok(result)
}

/// Tracked paths in tracking order; empty when nothing is tracked
///
/// ## Errors
///
/// - `Io` / `Corrupted`: the index cannot be read
pub fn list_tracked(repo: &Repository) -> Result<Vec<TrackedPath>> {
    log_op_start!("list_tracked");
    let start = std::time::Instant::now();

    let tracked = repo.index().list().map_err(|e| {
        log_op_error!(
            "list_tracked",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "list_tracked",
        duration_ms = start.elapsed().as_millis() as u64,
        tracked_len = tracked.len()
    );

    Ok(tracked)
}
