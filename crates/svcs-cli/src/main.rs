//! svcs CLI
//!
//! Command-line interface for svcs

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use svcs_core::logging_facility::{init_with_filter, Profile};
use svcs_store::Repository;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "svcs")]
#[command(about = "svcs - minimal snapshot version control", long_about = None)]
struct Cli {
    /// Working-tree root
    #[arg(long, global = true, default_value = ".")]
    repo: PathBuf,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Emit debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Get and set a username.
    Config(commands::config::ConfigArgs),
    /// Add a file to the index.
    Add(commands::add::AddArgs),
    /// Show commit logs.
    Log(commands::log::LogArgs),
    /// Save changes.
    Commit(commands::commit::CommitArgs),
    /// Restore a file.
    Checkout(commands::checkout::CheckoutArgs),
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.kind() == ErrorKind::InvalidSubcommand => {
            let name = e
                .get(ContextKind::InvalidSubcommand)
                .map(ToString::to_string)
                .unwrap_or_default();
            println!("'{}' is not a SVCS command.", name);
            return;
        }
        Err(e) => e.exit(),
    };

    // No subcommand: same as --help, but on stdout with status 0
    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
        println!();
        return;
    };

    let profile = match cli.log_format {
        LogFormat::Pretty => Profile::Development,
        LogFormat::Json => Profile::Production,
    };
    init_with_filter(profile, if cli.verbose { "svcs=debug" } else { "svcs=error" });

    if let Err(e) = run(&cli.repo, command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(root: &Path, command: Commands) -> commands::CommandResult {
    let repo = Repository::init(root)?;

    match command {
        Commands::Config(args) => commands::config::execute(args, &repo),
        Commands::Add(args) => commands::add::execute(args, &repo),
        Commands::Log(args) => commands::log::execute(args, &repo),
        Commands::Commit(args) => commands::commit::execute(args, &repo),
        Commands::Checkout(args) => commands::checkout::execute(args, &repo),
    }
}
