use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{
    config_init_command, config_show_command, debug_command, port_command, reports_command,
    resolve_command, run_command, sections_command,
};

#[derive(Parser, Debug)]
#[command(name = "karate-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the runnable sections of a feature file
    #[command(visible_alias = "s")]
    Sections {
        /// Path to the feature file with optional line number (e.g., users.feature:12)
        filepath: String,

        /// Print execution details as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Show the build system that owns a file or folder
    Resolve {
        /// Feature file or folder
        path: String,

        /// Print the project detail as JSON
        #[arg(short, long)]
        json: bool,
    },
    /// Run a feature file, a folder, or the scenario at a line
    #[command(visible_alias = "r")]
    Run {
        /// Path with optional line number (e.g., users.feature:12)
        filepath: String,

        /// Tag expression to filter on (e.g., @smoke)
        #[arg(short, long)]
        tags: Option<String>,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Run with a debug server port allocated
    #[command(visible_alias = "d")]
    Debug {
        /// Path with optional line number (e.g., users.feature:12)
        filepath: String,

        /// Print the command without executing it
        #[arg(short, long)]
        dry_run: bool,
    },
    /// Print a free debug server port
    Port,
    /// List report files already written under the owning project
    Reports {
        /// Feature file or folder inside the project
        path: String,

        /// Open each report with the system handler
        #[arg(short, long)]
        open: bool,
    },
    /// Inspect or create karate-runner configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show {
        /// Start the search for a config file here instead of the current directory
        path: Option<String>,
    },
    /// Write a default .karate-runner.json
    Init {
        /// Directory to write into
        #[arg(short, long)]
        cwd: Option<String>,

        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Sections { filepath, json } => sections_command(&filepath, json),
            Commands::Resolve { path, json } => resolve_command(&path, json),
            Commands::Run {
                filepath,
                tags,
                dry_run,
            } => run_command(&filepath, tags.as_deref(), dry_run),
            Commands::Debug { filepath, dry_run } => debug_command(&filepath, dry_run),
            Commands::Port => port_command(),
            Commands::Reports { path, open } => reports_command(&path, open),
            Commands::Config { action } => match action {
                ConfigAction::Show { path } => config_show_command(path.as_deref()),
                ConfigAction::Init { cwd, force } => config_init_command(cwd.as_deref(), force),
            },
        }
    }
}
