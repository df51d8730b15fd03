//! CLI module
//!
//! Command-line interface for the status tools.
//!
//! # Commands
//!
//! - `connections` - List connections or check one by name
//! - `sources` - List sources or probe one by name
//! - `tools` - Print the tool descriptors
//! - `serve` - Start HTTP server mode

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::serve;
