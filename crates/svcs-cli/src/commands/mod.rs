//! Subcommand implementations.
//!
//! Each subcommand maps its arguments onto an `EngineCommand` and renders
//! the result. User errors become a one-line message on stdout; anything
//! else is returned to `main` and ends the process with status 1.

pub mod add;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod log;

use svcs_core::errors::{ExError, ExErrorKind};
use svcs_engine::commands::engine_command::{
    apply_engine_command, EngineCommand, EngineCommandResult,
};
use svcs_store::Repository;

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run `cmd` with the repository's configured identity.
///
/// `Ok(None)` means a user error was already reported.
pub fn run(repo: &Repository, cmd: EngineCommand) -> Result<Option<EngineCommandResult>, ExError> {
    run_for(repo, cmd, None)
}

/// Like [`run`], but user errors about a path name `raw_path` as typed
pub fn run_for(
    repo: &Repository,
    cmd: EngineCommand,
    raw_path: Option<&str>,
) -> Result<Option<EngineCommandResult>, ExError> {
    match apply_engine_command(cmd, repo, repo.config()) {
        Ok(result) => Ok(Some(result)),
        Err(e) if e.is_user_error() => {
            println!("{}", user_message(&e, raw_path));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn user_message(err: &ExError, raw_path: Option<&str>) -> String {
    match err.kind() {
        ExErrorKind::MissingMessage => "Message was not passed.".to_string(),
        ExErrorKind::MissingFingerprint => "Commit id was not passed.".to_string(),
        ExErrorKind::CommitNotFound => "Commit does not exist.".to_string(),
        ExErrorKind::MissingIdentity => "Please, tell me who you are.".to_string(),
        ExErrorKind::FileNotFound => {
            let path = raw_path.or(err.path()).unwrap_or_default();
            format!("Can't find '{}'.", path)
        }
        _ => format!("{}.", err.message()),
    }
}
