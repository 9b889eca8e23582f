//! Fingerprint engine.
//!
//! Provides deterministic SHA256 fingerprints for individual files and for
//! the tracked set as a whole.
//!
//! ## Algorithm
//!
//! - **File fingerprint**: SHA256 of the file bytes, hex-encoded
//! - **Snapshot fingerprint**: SHA256 of the file fingerprints' hex strings
//!   concatenated in index order, hex-encoded
//!
//! ## Determinism Guarantees
//!
//! - Same bytes in the same order → same fingerprint, across processes
//! - Different order → different fingerprint (order-sensitive)
//! - No tracked files → no fingerprint

use crate::errors::{Result, SvcsError};
use crate::model::{FileFingerprint, Fingerprint, TrackedPath};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Stream a reader into SHA256.
///
/// # Errors
///
/// Propagates any read error.
pub fn hash_reader<R: Read>(reader: &mut R) -> io::Result<FileFingerprint> {
    let mut hasher = Sha256::new();
    io::copy(reader, &mut hasher)?;
    Ok(FileFingerprint::from_digest(&hasher.finalize()))
}

/// Fingerprint the full content of the file at `path`.
///
/// # Errors
///
/// Returns `SvcsError::Io` if the file cannot be opened or read, e.g. when
/// it was removed after being tracked.
pub fn file_fingerprint(path: &Path) -> Result<FileFingerprint> {
    let mut file = File::open(path).map_err(|e| SvcsError::io(path, &e))?;
    hash_reader(&mut file).map_err(|e| SvcsError::io(path, &e))
}

/// Combine per-file fingerprints, in order, into a snapshot fingerprint.
///
/// Returns `None` for an empty slice.
pub fn combine(files: &[FileFingerprint]) -> Option<Fingerprint> {
    if files.is_empty() {
        return None;
    }

    let mut hasher = Sha256::new();
    for file in files {
        hasher.update(file.as_str().as_bytes());
    }
    Some(Fingerprint::from_digest(&hasher.finalize()))
}

/// Fingerprint the tracked set rooted at `root`, in the given order.
///
/// Returns `Ok(None)` when nothing is tracked.
///
/// # Errors
///
/// Returns `SvcsError::Io` for the first tracked file that cannot be read.
pub fn snapshot_fingerprint(root: &Path, tracked: &[TrackedPath]) -> Result<Option<Fingerprint>> {
    let files = tracked
        .iter()
        .map(|path| file_fingerprint(&path.resolve(root)))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(tracked_len = files.len(), "Computed file fingerprints");

    Ok(combine(&files))
}
