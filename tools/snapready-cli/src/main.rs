//! SnapReady CLI — Command-line interface for session replay and inspection.
//!
//! Usage:
//!   snapready simulate <PATH>    Replay a recorded session through the gate
//!   snapready summarize <PATH>   Print per-face emotion summaries
//!   snapready check              Show the effective configuration

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "snapready",
    about = "Live-camera photo readiness gate",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded session through the gating pipeline
    Simulate {
        /// Path to the session JSONL file
        path: PathBuf,

        /// Only print frames the gate accepted
        #[arg(long)]
        accepted_only: bool,
    },

    /// Print dominant-emotion summaries for a recorded session
    Summarize {
        /// Path to the session JSONL file
        path: PathBuf,
    },

    /// Show the effective configuration
    Check,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    snapready_common::logging::init_logging(&snapready_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Simulate {
            path,
            accepted_only,
        } => commands::simulate::run(path, accepted_only),
        Commands::Summarize { path } => commands::summarize::run(path),
        Commands::Check => commands::check::run(),
    }
}
