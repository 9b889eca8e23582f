//! `svcs add [path]`

use super::{run, run_for, CommandResult};
use clap::Args;
use svcs_core::model::TrackOutcome;
use svcs_engine::commands::engine_command::{EngineCommand, EngineCommandResult};
use svcs_store::Repository;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// File to track, relative to the working tree; omit to list tracked files
    pub path: Option<String>,
}

pub fn execute(args: AddArgs, repo: &Repository) -> CommandResult {
    let Some(raw) = args.path else {
        match run(repo, EngineCommand::ListTracked)? {
            Some(EngineCommandResult::ListTracked(paths)) if paths.is_empty() => {
                println!("Add a file to the index.");
            }
            Some(EngineCommandResult::ListTracked(paths)) => {
                println!("Tracked files:");
                for path in paths {
                    println!("{}", path);
                }
            }
            _ => {}
        }
        return Ok(());
    };

    let cmd = EngineCommand::Track { path: raw.clone() };
    if let Some(EngineCommandResult::Track(TrackOutcome::Tracked(_))) =
        run_for(repo, cmd, Some(&raw))?
    {
        println!("The file '{}' is tracked.", raw);
    }
    // Already tracked: silent
    Ok(())
}
