//! CLI command execution

use super::commands::{Cli, Commands, OutputFormat};
use super::server;
use crate::checker::Checkers;
use crate::config::Config;
use crate::error::Result;
use crate::tools;
use serde::Serialize;

/// Executes a parsed CLI invocation
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the parsed CLI
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command.
    ///
    /// Configuration is loaded first so a missing workspace id or API key
    /// fails fast before any command does work.
    pub async fn run(&self) -> Result<()> {
        let config = Config::from_env()?;

        match &self.cli.command {
            Commands::Connections { name } => {
                let checkers = Checkers::from_config(&config)?;
                let report = checkers.connections.check(name.as_deref()).await;
                self.print(&report);
            }
            Commands::Sources { name } => {
                let checkers = Checkers::from_config(&config)?;
                let report = checkers.sources.check(name.as_deref()).await;
                self.print(&report);
            }
            Commands::Tools => {
                self.print(&tools::definitions());
            }
            Commands::Serve { port } => {
                server::serve(config, *port).await?;
            }
        }

        Ok(())
    }

    fn print<T: Serialize>(&self, value: &T) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(value).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
            }
        }
    }
}
