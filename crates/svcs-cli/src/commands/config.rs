//! `svcs config [name]`

use super::{run, CommandResult};
use clap::Args;
use svcs_engine::commands::engine_command::{EngineCommand, EngineCommandResult};
use svcs_store::Repository;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// New username; omit to show the current one
    pub name: Option<String>,
}

pub fn execute(args: ConfigArgs, repo: &Repository) -> CommandResult {
    let cmd = match args.name {
        Some(name) => EngineCommand::SetAuthor { name },
        None => EngineCommand::ShowAuthor,
    };

    match run(repo, cmd)? {
        Some(EngineCommandResult::SetAuthor(name))
        | Some(EngineCommandResult::ShowAuthor(Some(name))) => {
            println!("The username is {}.", name);
        }
        Some(EngineCommandResult::ShowAuthor(None)) => println!("Please, tell me who you are."),
        _ => {}
    }
    Ok(())
}
