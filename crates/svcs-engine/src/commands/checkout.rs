//! Restore (checkout) of a committed snapshot.

use std::path::PathBuf;
use std::time::Instant;
use svcs_core::errors::{ExError, ExErrorKind, SvcsError};
use svcs_core::model::Fingerprint;
use svcs_core::{log_op_end, log_op_error, log_op_start};
use svcs_store::errors::Result;
use svcs_store::Repository;

/// Result of a successful checkout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutResult {
    pub fingerprint: Fingerprint,
    /// Working-tree paths overwritten or created, relative to the root
    pub restored: Vec<PathBuf>,
}

/// Copy every file of the snapshot `fingerprint` over the working tree
///
/// Overwrites unconditionally and never deletes files the snapshot does
/// not contain.
///
/// ## Errors
///
/// - `MissingFingerprint`: `fingerprint` is absent or blank
/// - `CommitNotFound`: no snapshot matches (malformed input included)
/// - `Io`: a file cannot be restored; earlier files stay restored
pub fn checkout(repo: &Repository, fingerprint: Option<&str>) -> Result<CheckoutResult> {
    log_op_start!("checkout", fingerprint = fingerprint.unwrap_or_default());
    let start = Instant::now();

    let result = checkout_impl(repo, fingerprint).map_err(|e| {
        log_op_error!(
            "checkout",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "checkout",
        duration_ms = start.elapsed().as_millis() as u64,
        fingerprint = %result.fingerprint,
        restored_len = result.restored.len()
    );

    Ok(result)
}

fn checkout_impl(repo: &Repository, raw: Option<&str>) -> Result<CheckoutResult> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ExError::from(SvcsError::FingerprintMissing).with_op("checkout")),
    };

    // Anything that is not a well-formed fingerprint cannot name a snapshot
    let fingerprint = Fingerprint::parse(raw).ok_or_else(|| {
        ExError::from(SvcsError::CommitNotFound {
            fingerprint: raw.to_string(),
        })
        .with_op("checkout")
    })?;

    let contents = repo.snapshots().resolve(&fingerprint).map_err(|e| {
        if e.kind() == ExErrorKind::CommitNotFound {
            e.with_op("checkout")
        } else {
            e
        }
    })?;

    let restored = repo.snapshots().restore(&contents, repo.root())?;

    Ok(CheckoutResult {
        fingerprint,
        restored,
    })
}
