//! Durable write primitives
//!
//! - `atomic_write`: temp→rename, so readers never see a partial file
//! - `append_line`: one newline-terminated record per call, never merged
//!   into an unterminated last line

use crate::errors::{io_error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

fn temp_path_for(target_path: &Path) -> PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}

/// Atomically write bytes to a file
///
/// Uses temp file + rename to ensure atomic write
///
/// # Errors
///
/// Returns an IO error if the parent directory, temp file or rename fails.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("atomic_write_dir", parent, e))?;
    }

    let temp_path = temp_path_for(target_path);

    fs::write(&temp_path, content).map_err(|e| io_error("atomic_write_temp", &temp_path, e))?;

    fs::rename(&temp_path, target_path)
        .map_err(|e| io_error("atomic_write_rename", target_path, e))?;

    Ok(())
}

/// Append `line` plus a newline to a line-oriented file
///
/// If the file does not end in a newline (hand edit, interrupted append),
/// a separator is written first so the new record starts on its own line.
///
/// # Errors
///
/// Returns an IO error if the file cannot be opened, inspected or written.
pub fn append_line(target_path: &Path, line: &str, operation: &str) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(operation, parent, e))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .read(true)
        .append(true)
        .open(target_path)
        .map_err(|e| io_error(operation, target_path, e))?;

    let mut record = String::with_capacity(line.len() + 2);
    if ends_unterminated(&mut file).map_err(|e| io_error(operation, target_path, e))? {
        tracing::debug!(path = %target_path.display(), "Terminating unterminated last line");
        record.push('\n');
    }
    record.push_str(line);
    record.push('\n');

    file.write_all(record.as_bytes())
        .map_err(|e| io_error(operation, target_path, e))
}

fn ends_unterminated(file: &mut File) -> io::Result<bool> {
    if file.metadata()?.len() == 0 {
        return Ok(false);
    }
    file.seek(SeekFrom::End(-1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] != b'\n')
}
