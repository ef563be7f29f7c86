//! Express Starter CLI
//!
//! Scaffolds Express API projects from boilerplate templates and
//! retrofits optional features into already-generated projects.

mod cli;
mod commands;
mod error;
mod interactive;
mod template;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::New {
            name,
            language,
            database,
            no_generators,
        }) => {
            let cwd = std::env::current_dir()?;
            commands::run_new_command(&cwd, name, language, database, no_generators)
        }
        Some(Commands::Add { plugins, path }) => {
            let root = match path {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            commands::run_add(&root, &plugins)
        }
        Some(Commands::List) => commands::run_list(),
        None => {
            println!("{} Express Starter CLI", "starter".green().bold());
            println!();
            println!("Run {} for available commands.", "starter --help".cyan());
            Ok(())
        }
    }
}
