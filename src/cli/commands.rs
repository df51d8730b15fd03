//! CLI commands and argument parsing

use clap::{Parser, Subcommand};

/// Airbyte status tools CLI
#[derive(Parser, Debug)]
#[command(name = "airbyte-status")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List connections or check one connection's sync status
    Connections {
        /// Connection name (case-insensitive). Omit to list all connections.
        #[arg(long)]
        name: Option<String>,
    },

    /// List sources or probe one source's connectivity
    Sources {
        /// Source name (case-insensitive). Omit to list all sources.
        #[arg(long)]
        name: Option<String>,
    },

    /// Print the tool descriptors
    Tools,

    /// Start HTTP server mode
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    Pretty,
}
