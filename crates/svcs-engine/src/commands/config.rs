//! Username configuration.

use svcs_core::{log_op_end, log_op_error, log_op_start};
use svcs_store::errors::Result;
use svcs_store::Repository;

/// The configured username, if any
///
/// ## Errors
///
/// - `Io` / `Corrupted`: the config file cannot be read
pub fn show_author(repo: &Repository) -> Result<Option<String>> {
    log_op_start!("show_author");
    let start = std::time::Instant::now();

    let author = repo.config().username().map_err(|e| {
        log_op_error!(
            "show_author",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "show_author",
        duration_ms = start.elapsed().as_millis() as u64,
        configured = author.is_some()
    );

    Ok(author)
}

/// Store `name` as the username and return it as stored (trimmed)
///
/// ## Errors
///
/// - `InvalidInput`: the name is blank
/// - `Io` / `Corrupted`: the config file cannot be read or written
pub fn set_author(repo: &Repository, name: &str) -> Result<String> {
    log_op_start!("set_author");
    let start = std::time::Instant::now();

    let stored = repo.config().set_username(name).map_err(|e| {
        log_op_error!(
            "set_author",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "set_author",
        duration_ms = start.elapsed().as_millis() as u64,
        author = stored.as_str()
    );

    Ok(stored)
}
