//! Domain model: tracked paths, fingerprints and commit log entries.

use crate::errors::{Result, SvcsError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Name of the metadata directory at the root of every working tree.
pub const METADATA_DIR: &str = "vcs";

/// Length of a hex-encoded SHA-256 digest.
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// A validated path relative to the working-tree root.
///
/// Stored with `/` separators and without `.` components, so `./a.txt`
/// and `a.txt` name the same tracked file. Absolute paths, `..` and paths
/// into the metadata directory are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackedPath(String);

impl TrackedPath {
    /// Validate and normalise a user-supplied path.
    ///
    /// # Errors
    ///
    /// Returns `SvcsError::InvalidPath` when the path is empty, absolute,
    /// climbs out of the working tree, contains a line break, or points
    /// into the metadata directory.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| SvcsError::InvalidPath {
            path: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.is_empty() {
            return Err(invalid("path is empty"));
        }
        if raw.contains('\n') || raw.contains('\r') {
            return Err(invalid("path contains a line break"));
        }

        let mut parts: Vec<&str> = Vec::new();
        for component in Path::new(raw).components() {
            match component {
                Component::Normal(part) => {
                    // raw is &str so every component is valid UTF-8
                    parts.push(part.to_str().ok_or_else(|| invalid("path is not UTF-8"))?);
                }
                Component::CurDir => {}
                Component::ParentDir => return Err(invalid("path leaves the working tree")),
                Component::RootDir | Component::Prefix(_) => {
                    return Err(invalid("path must be relative"))
                }
            }
        }

        match parts.first() {
            None => Err(invalid("path names the working tree itself")),
            Some(first) if *first == METADATA_DIR => {
                Err(invalid("path points into the metadata directory"))
            }
            Some(_) => Ok(Self(parts.join("/"))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Relative path as a `PathBuf` using the platform separator.
    pub fn to_path_buf(&self) -> PathBuf {
        self.0.split('/').collect()
    }

    /// Absolute location of this path under `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.to_path_buf())
    }
}

impl fmt::Display for TrackedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash of one file's content at a point in time. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileFingerprint(String);

impl FileFingerprint {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Combined fingerprint of the tracked set; the key of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    /// Parse a user-supplied fingerprint.
    ///
    /// Returns `None` unless the input is exactly 64 hex characters.
    /// Uppercase input is accepted and lowercased.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == FINGERPRINT_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit()) {
            Some(Self(raw.to_ascii_lowercase()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One immutable record of the commit log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitLogEntry {
    pub fingerprint: Fingerprint,
    pub message: String,
    pub author: String,
    /// Informational only; never part of the fingerprint.
    pub committed_at: DateTime<Utc>,
}

impl CommitLogEntry {
    /// Create an entry stamped with the current time.
    pub fn new(
        fingerprint: Fingerprint,
        message: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            fingerprint,
            message: message.into(),
            author: author.into(),
            committed_at: Utc::now(),
        }
    }
}

/// Result of tracking a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackOutcome {
    /// The path was appended to the index.
    Tracked(TrackedPath),
    /// The path was already in the index; nothing changed.
    AlreadyTracked(TrackedPath),
}

impl TrackOutcome {
    pub fn path(&self) -> &TrackedPath {
        match self {
            TrackOutcome::Tracked(path) | TrackOutcome::AlreadyTracked(path) => path,
        }
    }
}
