//! `svcs commit [message]`

use super::{run, CommandResult};
use clap::Args;
use svcs_engine::commands::commit::CommitOutcome;
use svcs_engine::commands::engine_command::{EngineCommand, EngineCommandResult};
use svcs_store::Repository;

#[derive(Debug, Args)]
pub struct CommitArgs {
    /// Commit message
    pub message: Option<String>,
}

pub fn execute(args: CommitArgs, repo: &Repository) -> CommandResult {
    let cmd = EngineCommand::Commit {
        message: args.message,
    };

    match run(repo, cmd)? {
        Some(EngineCommandResult::Commit(CommitOutcome::Committed(_))) => {
            println!("Changes are committed.");
        }
        Some(EngineCommandResult::Commit(CommitOutcome::NothingToCommit(_))) => {
            println!("Nothing to commit.");
        }
        _ => {}
    }
    Ok(())
}
