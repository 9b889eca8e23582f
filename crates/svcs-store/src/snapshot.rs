//! Content-addressable snapshot store
//!
//! One directory per fingerprint under `vcs/commits/`, holding a full copy
//! of every file tracked when the snapshot was taken. Relative directory
//! structure is preserved, so `a/x.txt` and `b/x.txt` never collide.
//!
//! ## Publication
//!
//! A snapshot is assembled in `<fingerprint>.staging` and renamed into
//! place once every file is copied, so a directory named by a bare
//! fingerprint is always complete. A failed copy leaves the staging
//! directory behind; it is not rolled back, and the next `create` for the
//! same fingerprint discards it and starts over.
//!
//! Snapshots are never modified after publication.

use crate::errors::{io_error, snapshot_missing, Result};
use std::fs;
use std::path::{Path, PathBuf};
use svcs_core::model::{Fingerprint, TrackedPath};
use walkdir::WalkDir;

const STAGING_SUFFIX: &str = ".staging";

/// Result of [`SnapshotStore::create`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new snapshot was published with this many files
    Created { files: usize },
    /// A snapshot with this fingerprint already exists; nothing was written
    AlreadyExists,
}

/// Files stored in one snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotContents {
    pub fingerprint: Fingerprint,
    pub dir: PathBuf,
    /// Paths relative to `dir`, sorted
    pub files: Vec<PathBuf>,
}

/// Filesystem-backed snapshot store
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    commits_dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(commits_dir: impl Into<PathBuf>) -> Self {
        Self {
            commits_dir: commits_dir.into(),
        }
    }

    pub fn snapshot_dir(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.commits_dir.join(fingerprint.as_str())
    }

    pub fn staging_dir(&self, fingerprint: &Fingerprint) -> PathBuf {
        self.commits_dir
            .join(format!("{}{}", fingerprint, STAGING_SUFFIX))
    }

    /// Whether a snapshot for this fingerprint has been published
    pub fn exists(&self, fingerprint: &Fingerprint) -> bool {
        self.snapshot_dir(fingerprint).is_dir()
    }

    /// Copy `files` from `root` into a new snapshot keyed by `fingerprint`
    ///
    /// Performs no writes when the snapshot already exists.
    ///
    /// # Errors
    ///
    /// Returns an IO error if any file cannot be copied or the snapshot
    /// cannot be published. No published snapshot exists afterwards.
    pub fn create(
        &self,
        fingerprint: &Fingerprint,
        root: &Path,
        files: &[TrackedPath],
    ) -> Result<CreateOutcome> {
        if self.exists(fingerprint) {
            return Ok(CreateOutcome::AlreadyExists);
        }

        let staging = self.staging_dir(fingerprint);
        if staging.exists() {
            tracing::debug!(fingerprint = %fingerprint, "Discarding stale staging directory");
            fs::remove_dir_all(&staging).map_err(|e| io_error("snapshot_create", &staging, e))?;
        }
        fs::create_dir_all(&staging).map_err(|e| io_error("snapshot_create", &staging, e))?;

        for file in files {
            copy_file(&file.resolve(root), &file.resolve(&staging), "snapshot_copy")?;
        }

        let target = self.snapshot_dir(fingerprint);
        fs::rename(&staging, &target).map_err(|e| io_error("snapshot_publish", &target, e))?;

        tracing::debug!(
            fingerprint = %fingerprint,
            files = files.len(),
            "Published snapshot"
        );
        Ok(CreateOutcome::Created { files: files.len() })
    }

    /// List the files stored under a fingerprint
    ///
    /// # Errors
    ///
    /// - `CommitNotFound`: no snapshot exists for the fingerprint
    /// - `Io`: the snapshot directory cannot be walked
    pub fn resolve(&self, fingerprint: &Fingerprint) -> Result<SnapshotContents> {
        let dir = self.snapshot_dir(fingerprint);
        if !dir.is_dir() {
            return Err(snapshot_missing(fingerprint.as_str()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&dir).min_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|e| io_error("snapshot_resolve", &dir, e.into()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&dir) {
                files.push(relative.to_path_buf());
            }
        }

        Ok(SnapshotContents {
            fingerprint: fingerprint.clone(),
            dir,
            files,
        })
    }

    /// Fingerprints of all published snapshots, sorted
    ///
    /// Staging directories and foreign entries are ignored.
    ///
    /// # Errors
    ///
    /// Returns an IO error if the commits directory cannot be read.
    pub fn list(&self) -> Result<Vec<Fingerprint>> {
        let entries = match fs::read_dir(&self.commits_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("snapshot_list", &self.commits_dir, e)),
        };

        let mut fingerprints = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error("snapshot_list", &self.commits_dir, e))?;
            if !entry.path().is_dir() {
                continue;
            }
            if let Some(fp) = entry.file_name().to_str().and_then(Fingerprint::parse) {
                fingerprints.push(fp);
            }
        }
        fingerprints.sort();
        Ok(fingerprints)
    }

    /// Copy every file of a snapshot over the working tree at `root`
    ///
    /// Existing files are overwritten unconditionally; files absent from
    /// the snapshot are left alone. Returns the restored relative paths.
    ///
    /// # Errors
    ///
    /// Returns an IO error on the first file that cannot be restored.
    /// Files restored before the failure stay restored.
    pub fn restore(&self, contents: &SnapshotContents, root: &Path) -> Result<Vec<PathBuf>> {
        for relative in &contents.files {
            copy_file(
                &contents.dir.join(relative),
                &root.join(relative),
                "snapshot_restore",
            )?;
        }
        Ok(contents.files.clone())
    }
}

fn copy_file(source: &Path, destination: &Path, operation: &str) -> Result<()> {
    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(operation, parent, e))?;
    }
    fs::copy(source, destination).map_err(|e| io_error(operation, source, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcs_core::errors::ExErrorKind;
    use tempfile::TempDir;

    fn fp(fill: char) -> Fingerprint {
        Fingerprint::parse(&fill.to_string().repeat(64)).unwrap()
    }

    fn tracked(raw: &str) -> TrackedPath {
        TrackedPath::parse(raw).unwrap()
    }

    fn setup() -> (TempDir, SnapshotStore) {
        let dir = TempDir::new().unwrap();
        let store = SnapshotStore::new(dir.path().join("vcs").join("commits"));
        (dir, store)
    }

    #[test]
    fn test_create_then_exists() {
        let (dir, store) = setup();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();

        let outcome = store.create(&fp('a'), dir.path(), &[tracked("a.txt")]).unwrap();

        assert_eq!(outcome, CreateOutcome::Created { files: 1 });
        assert!(store.exists(&fp('a')));
        assert!(!store.staging_dir(&fp('a')).exists());
        assert_eq!(
            fs::read_to_string(store.snapshot_dir(&fp('a')).join("a.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_create_existing_writes_nothing() {
        let (dir, store) = setup();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        store.create(&fp('a'), dir.path(), &[tracked("a.txt")]).unwrap();
        fs::write(dir.path().join("a.txt"), "changed").unwrap();

        let outcome = store.create(&fp('a'), dir.path(), &[tracked("a.txt")]).unwrap();

        assert_eq!(outcome, CreateOutcome::AlreadyExists);
        assert_eq!(
            fs::read_to_string(store.snapshot_dir(&fp('a')).join("a.txt")).unwrap(),
            "hello"
        );
    }

    #[test]
    fn test_same_basename_in_two_dirs_kept_apart() {
        let (dir, store) = setup();
        fs::create_dir_all(dir.path().join("left")).unwrap();
        fs::create_dir_all(dir.path().join("right")).unwrap();
        fs::write(dir.path().join("left/x.txt"), "left").unwrap();
        fs::write(dir.path().join("right/x.txt"), "right").unwrap();

        store
            .create(
                &fp('b'),
                dir.path(),
                &[tracked("left/x.txt"), tracked("right/x.txt")],
            )
            .unwrap();

        let contents = store.resolve(&fp('b')).unwrap();
        assert_eq!(
            contents.files,
            vec![
                Path::new("left").join("x.txt"),
                Path::new("right").join("x.txt")
            ]
        );
    }

    #[test]
    fn test_resolve_missing() {
        let (_dir, store) = setup();
        let err = store.resolve(&fp('c')).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::CommitNotFound);
    }

    #[test]
    fn test_failed_copy_leaves_staging_only() {
        let (dir, store) = setup();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();

        let err = store
            .create(&fp('d'), dir.path(), &[tracked("a.txt"), tracked("gone.txt")])
            .unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Io);
        assert!(!store.exists(&fp('d')));
        // Not rolled back: the partial staging directory remains
        assert!(store.staging_dir(&fp('d')).join("a.txt").exists());
        assert!(store.list().unwrap().is_empty());

        // A retry discards the stale staging directory
        fs::write(dir.path().join("gone.txt"), "back").unwrap();
        store
            .create(&fp('d'), dir.path(), &[tracked("a.txt"), tracked("gone.txt")])
            .unwrap();
        assert!(store.exists(&fp('d')));
        assert!(!store.staging_dir(&fp('d')).exists());
    }

    #[test]
    fn test_restore_overwrites_and_recreates() {
        let (dir, store) = setup();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/a.txt"), "v1").unwrap();
        store.create(&fp('e'), dir.path(), &[tracked("docs/a.txt")]).unwrap();
        fs::remove_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("extra.txt"), "untouched").unwrap();

        let contents = store.resolve(&fp('e')).unwrap();
        let restored = store.restore(&contents, dir.path()).unwrap();

        assert_eq!(restored, vec![Path::new("docs").join("a.txt")]);
        assert_eq!(fs::read_to_string(dir.path().join("docs/a.txt")).unwrap(), "v1");
        assert_eq!(fs::read_to_string(dir.path().join("extra.txt")).unwrap(), "untouched");
    }

    #[test]
    fn test_list_ignores_staging() {
        let (dir, store) = setup();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        store.create(&fp('f'), dir.path(), &[tracked("a.txt")]).unwrap();
        fs::create_dir_all(store.staging_dir(&fp('1'))).unwrap();

        assert_eq!(store.list().unwrap(), vec![fp('f')]);
    }
}
