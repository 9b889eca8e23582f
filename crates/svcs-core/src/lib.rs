//! svcs Core - domain model and deterministic fingerprinting
//!
//! This crate provides the foundational pieces of the snapshot engine:
//! - Tracked paths, fingerprints and commit log entries
//! - The fingerprint engine (per-file and combined snapshot fingerprints)
//! - The identity seam consumed by the commit path
//! - The canonical error and logging facilities
//!
//! Nothing in this crate touches the repository's durable state; that is
//! the job of `svcs-store`.

pub mod errors;
pub mod fingerprint;
pub mod identity;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, SvcsError};
pub use fingerprint::{combine, file_fingerprint, snapshot_fingerprint};
pub use identity::{IdentitySource, StaticIdentity};
pub use model::{CommitLogEntry, FileFingerprint, Fingerprint, TrackOutcome, TrackedPath};
