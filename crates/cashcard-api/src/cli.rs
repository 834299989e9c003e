//! CLI argument parsing.

use clap::{Parser, Subcommand};

/// Top-level CLI arguments for the Cashcard server.
#[derive(Parser, Debug)]
#[command(name = "cashcard", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "CASHCARD_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute. Defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Server commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server.
    Serve {
        /// Port to listen on, overriding the configured value.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print version information.
    Version,
}
