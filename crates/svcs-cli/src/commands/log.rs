//! `svcs log`

use super::{run, CommandResult};
use clap::Args;
use svcs_engine::commands::engine_command::{EngineCommand, EngineCommandResult};
use svcs_store::Repository;

#[derive(Debug, Args)]
pub struct LogArgs {}

pub fn execute(_args: LogArgs, repo: &Repository) -> CommandResult {
    let Some(EngineCommandResult::Log(entries)) = run(repo, EngineCommand::Log)? else {
        return Ok(());
    };

    if entries.is_empty() {
        println!("No commits yet.");
        return Ok(());
    }

    let blocks: Vec<String> = entries
        .iter()
        .map(|entry| {
            format!(
                "commit {}\nAuthor: {}\n{}",
                entry.fingerprint, entry.author, entry.message
            )
        })
        .collect();
    println!("{}", blocks.join("\n\n"));
    Ok(())
}
