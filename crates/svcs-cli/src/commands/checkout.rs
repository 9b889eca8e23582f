//! `svcs checkout [fingerprint]`

use super::{run, CommandResult};
use clap::Args;
use svcs_engine::commands::engine_command::{EngineCommand, EngineCommandResult};
use svcs_store::Repository;

#[derive(Debug, Args)]
pub struct CheckoutArgs {
    /// Fingerprint of the commit to restore
    pub fingerprint: Option<String>,
}

pub fn execute(args: CheckoutArgs, repo: &Repository) -> CommandResult {
    let cmd = EngineCommand::Checkout {
        fingerprint: args.fingerprint,
    };

    if let Some(EngineCommandResult::Checkout(result)) = run(repo, cmd)? {
        println!("Switched to commit {}.", result.fingerprint);
    }
    Ok(())
}
