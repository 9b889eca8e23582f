//! Append-only commit log
//!
//! JSON Lines: one `CommitLogEntry` per line, in commit order. Existing
//! records are never rewritten.
//!
//! Every complete record ends in a newline. An unterminated last line that
//! does not parse is a torn append: `list` skips it and the next `append`
//! truncates it away.

use crate::atomic::append_line;
use crate::errors::{corrupted, io_error, serialization, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use svcs_core::errors::SvcsError;
use svcs_core::model::CommitLogEntry;

/// Durable commit log
#[derive(Debug, Clone)]
pub struct CommitLogFile {
    path: PathBuf,
}

impl CommitLogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record to the end of the log
    ///
    /// A torn record left by an interrupted append is discarded first.
    ///
    /// # Errors
    ///
    /// - `MissingIdentity`: the entry has a blank author
    /// - `Serialization`: the entry cannot be encoded
    /// - `Io`: the log cannot be opened or written
    pub fn append(&self, entry: &CommitLogEntry) -> Result<()> {
        if entry.author.trim().is_empty() {
            return Err(SvcsError::IdentityNotConfigured.into());
        }

        let line = serde_json::to_string(entry)
            .map_err(|e| serialization("log_append", e.to_string()))?;

        self.discard_torn_tail()?;
        append_line(&self.path, &line, "log_append")?;

        tracing::debug!(fingerprint = %entry.fingerprint, "Appended commit log entry");
        Ok(())
    }

    fn discard_torn_tail(&self) -> Result<()> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(io_error("log_append", &self.path, e)),
        };
        if content.is_empty() || content.ends_with('\n') {
            return Ok(());
        }

        let tail_start = content.rfind('\n').map_or(0, |i| i + 1);
        let tail = &content[tail_start..];
        if tail.trim().is_empty() || serde_json::from_str::<CommitLogEntry>(tail).is_ok() {
            return Ok(());
        }

        tracing::warn!(path = %self.path.display(), "Discarding torn commit log record");
        OpenOptions::new()
            .write(true)
            .open(&self.path)
            .and_then(|file| file.set_len(tail_start as u64))
            .map_err(|e| io_error("log_append", &self.path, e))
    }

    /// All records in append (chronological) order
    ///
    /// A missing log means no commits yet.
    ///
    /// # Errors
    ///
    /// - `Io`: the log exists but cannot be read
    /// - `Corrupted`: a line is not a valid record
    pub fn list(&self) -> Result<Vec<CommitLogEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("log_read", &self.path, e)),
        };

        let terminated = content.ends_with('\n');
        let lines: Vec<&str> = content.lines().collect();
        let last = lines.len().saturating_sub(1);

        let mut entries = Vec::with_capacity(lines.len());
        for (line_no, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<CommitLogEntry>(line) {
                Ok(entry) => entries.push(entry),
                Err(_) if !terminated && line_no == last => {
                    tracing::warn!(path = %self.path.display(), "Skipping torn commit log record");
                }
                Err(e) => {
                    return Err(corrupted(
                        "log_read",
                        &self.path,
                        format!("line {}: {}", line_no + 1, e),
                    ))
                }
            }
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use svcs_core::errors::ExErrorKind;
    use svcs_core::model::Fingerprint;
    use tempfile::TempDir;

    fn setup() -> (TempDir, CommitLogFile) {
        let dir = TempDir::new().unwrap();
        let log = CommitLogFile::new(dir.path().join("vcs").join("log.jsonl"));
        (dir, log)
    }

    fn entry(fill: char, message: &str) -> CommitLogEntry {
        let fp = Fingerprint::parse(&fill.to_string().repeat(64)).unwrap();
        CommitLogEntry::new(fp, message, "alice")
    }

    #[test]
    fn test_missing_log_is_empty() {
        let (_dir, log) = setup();
        assert!(log.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_preserves_order() {
        let (_dir, log) = setup();
        let first = entry('a', "first");
        let second = entry('b', "second\nwith a second line");

        log.append(&first).unwrap();
        log.append(&second).unwrap();

        assert_eq!(log.list().unwrap(), vec![first, second]);
    }

    #[test]
    fn test_append_refuses_blank_author() {
        let (_dir, log) = setup();
        let mut anonymous = entry('a', "first");
        anonymous.author = " ".to_string();

        let err = log.append(&anonymous).unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::MissingIdentity);
        assert!(!log.path().exists());
    }

    #[test]
    fn test_corrupted_record_reported() {
        let (_dir, log) = setup();
        log.append(&entry('a', "first")).unwrap();
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        file.write_all(b"not json\n").unwrap();

        let err = log.list().unwrap_err();

        assert_eq!(err.kind(), ExErrorKind::Corrupted);
        assert!(err.message().contains("line 2"));
    }

    #[test]
    fn test_torn_tail_skipped_then_discarded() {
        let (_dir, log) = setup();
        let first = entry('a', "first");
        log.append(&first).unwrap();
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        file.write_all(b"{\"fingerprint\":\"bbbb").unwrap();

        assert_eq!(log.list().unwrap(), vec![first.clone()]);

        let second = entry('c', "second");
        log.append(&second).unwrap();

        assert_eq!(log.list().unwrap(), vec![first, second]);
        let content = fs::read_to_string(log.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_unterminated_complete_record_kept() {
        let (_dir, log) = setup();
        let first = entry('a', "first");
        fs::create_dir_all(log.path().parent().unwrap()).unwrap();
        fs::write(log.path(), serde_json::to_string(&first).unwrap()).unwrap();

        let second = entry('b', "second");
        log.append(&second).unwrap();

        assert_eq!(log.list().unwrap(), vec![first, second]);
    }
}
