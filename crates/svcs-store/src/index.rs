//! Tracked-file index
//!
//! A newline-delimited list of tracked paths in tracking order. The file
//! is only ever appended to; entries are never removed or reordered.

use crate::atomic::append_line;
use crate::errors::{corrupted, io_error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use svcs_core::errors::SvcsError;
use svcs_core::model::{TrackOutcome, TrackedPath};

/// Durable tracked-file index
#[derive(Debug, Clone)]
pub struct IndexFile {
    path: PathBuf,
}

impl IndexFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tracked paths in tracking order
    ///
    /// A missing index file means nothing is tracked. Repeated lines keep
    /// their first position only.
    ///
    /// # Errors
    ///
    /// - `Io`: the index exists but cannot be read
    /// - `Corrupted`: a line is not a valid tracked path
    pub fn list(&self) -> Result<Vec<TrackedPath>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("index_read", &self.path, e)),
        };

        let mut tracked: Vec<TrackedPath> = Vec::new();
        for (line_no, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let path = TrackedPath::parse(line).map_err(|e| {
                corrupted(
                    "index_read",
                    &self.path,
                    format!("line {}: {}", line_no + 1, e),
                )
            })?;
            if !tracked.contains(&path) {
                tracked.push(path);
            }
        }

        Ok(tracked)
    }

    /// Whether `path` is already tracked
    ///
    /// # Errors
    ///
    /// Same as [`IndexFile::list`].
    pub fn contains(&self, path: &TrackedPath) -> Result<bool> {
        Ok(self.list()?.contains(path))
    }

    /// Track `path` if a file exists for it under `root`
    ///
    /// Tracking an already-tracked path is a no-op.
    ///
    /// # Errors
    ///
    /// - `FileNotFound`: nothing (or a directory) exists at the path
    /// - `Io`: the working tree or the index cannot be accessed
    pub fn track(&self, root: &Path, path: &TrackedPath) -> Result<TrackOutcome> {
        let on_disk = path.resolve(root);
        match fs::metadata(&on_disk) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => {
                return Err(SvcsError::FileNotFound {
                    path: path.to_string(),
                }
                .into())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SvcsError::FileNotFound {
                    path: path.to_string(),
                }
                .into())
            }
            Err(e) => return Err(io_error("index_track", &on_disk, e)),
        }

        if self.contains(path)? {
            return Ok(TrackOutcome::AlreadyTracked(path.clone()));
        }

        self.append(path)?;
        tracing::debug!(path = %path, "Appended path to index");
        Ok(TrackOutcome::Tracked(path.clone()))
    }

    fn append(&self, path: &TrackedPath) -> Result<()> {
        append_line(&self.path, path.as_str(), "index_append")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use svcs_core::errors::ExErrorKind;
    use tempfile::TempDir;

    fn setup() -> (TempDir, IndexFile) {
        let dir = TempDir::new().unwrap();
        let index = IndexFile::new(dir.path().join("vcs").join("index.txt"));
        (dir, index)
    }

    fn tracked(raw: &str) -> TrackedPath {
        TrackedPath::parse(raw).unwrap()
    }

    #[test]
    fn test_missing_index_is_empty() {
        let (_dir, index) = setup();
        assert!(index.list().unwrap().is_empty());
    }

    #[test]
    fn test_track_appends_in_order() {
        let (dir, index) = setup();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        index.track(dir.path(), &tracked("b.txt")).unwrap();
        index.track(dir.path(), &tracked("a.txt")).unwrap();

        assert_eq!(index.list().unwrap(), vec![tracked("b.txt"), tracked("a.txt")]);
        assert_eq!(fs::read_to_string(index.path()).unwrap(), "b.txt\na.txt\n");
    }

    #[test]
    fn test_track_twice_is_noop() {
        let (dir, index) = setup();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let first = index.track(dir.path(), &tracked("a.txt")).unwrap();
        let second = index.track(dir.path(), &tracked("./a.txt")).unwrap();

        assert_eq!(first, TrackOutcome::Tracked(tracked("a.txt")));
        assert_eq!(second, TrackOutcome::AlreadyTracked(tracked("a.txt")));
        assert_eq!(index.list().unwrap().len(), 1);
    }

    #[test]
    fn test_track_missing_file() {
        let (dir, index) = setup();

        let err = index.track(dir.path(), &tracked("nope.txt")).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::FileNotFound);
        assert!(!index.path().exists());
    }

    #[test]
    fn test_track_directory_is_not_a_file() {
        let (dir, index) = setup();
        fs::create_dir(dir.path().join("docs")).unwrap();

        let err = index.track(dir.path(), &tracked("docs")).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::FileNotFound);
    }

    #[test]
    fn test_corrupted_line_reported() {
        let (_dir, index) = setup();
        fs::create_dir_all(index.path().parent().unwrap()).unwrap();
        fs::write(index.path(), "a.txt\n../escape.txt\n").unwrap();

        let err = index.list().unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Corrupted);
        assert!(err.message().contains("line 2"));
    }

    #[test]
    fn test_track_after_unterminated_last_line() {
        let (dir, index) = setup();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::create_dir_all(index.path().parent().unwrap()).unwrap();
        fs::write(index.path(), "a.txt").unwrap();

        index.track(dir.path(), &tracked("b.txt")).unwrap();

        assert_eq!(index.list().unwrap(), vec![tracked("a.txt"), tracked("b.txt")]);
        assert_eq!(fs::read_to_string(index.path()).unwrap(), "a.txt\nb.txt\n");
    }
}
