//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Express Starter - scaffold Express API projects and retrofit features
#[derive(Parser, Debug)]
#[command(name = "starter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scaffold a new project from a boilerplate template
    ///
    /// Examples:
    ///   starter new                               # guided setup
    ///   starter new my-api -l typescript -d prisma
    New {
        /// Project name (prompts when omitted)
        name: Option<String>,

        /// Language variant (typescript or javascript)
        #[arg(short, long)]
        language: Option<String>,

        /// Database flavor for TypeScript templates (mongo, prisma or drizzle)
        #[arg(short, long)]
        database: Option<String>,

        /// Leave out the bundled code generators
        #[arg(long)]
        no_generators: bool,
    },

    /// Retrofit feature plugins into an existing project
    ///
    /// Applies each plugin's file actions and merges its package
    /// dependencies into package.json.
    ///
    /// Examples:
    ///   starter add redis
    ///   starter add redis cron --path ./my-api
    Add {
        /// Plugin slugs to apply (see 'starter list')
        #[arg(required = true)]
        plugins: Vec<String>,

        /// Project directory (defaults to the current directory)
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// List available feature plugins
    List,
}
