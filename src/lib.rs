//! # Airbyte Status Tools
//!
//! Airbyte connection and source status checks exposed as callable tools
//! for an agent/automation host.
//!
//! Two operations, both stateless request/response translators over the
//! Airbyte REST API:
//!
//! - `check_airbyte_connection` - list connections in a workspace or check
//!   one connection's sync status and selected streams
//! - `check_airbyte_source` - list sources or probe one source's live
//!   connectivity
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use airbyte_status::checker::Checkers;
//! use airbyte_status::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> airbyte_status::Result<()> {
//!     let config = Config::from_env()?;
//!     let checkers = Checkers::from_config(&config)?;
//!
//!     // Always returns a well-formed envelope, never a fault
//!     let report = checkers.connections.check(Some("orders-sync")).await;
//!     println!("{}", serde_json::to_string_pretty(&report).unwrap());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                  Tool surface (tools)                 │
//! │  definitions() → descriptors   dispatch() → envelope  │
//! └───────────────────────────┬───────────────────────────┘
//! ┌───────────────────────────┴───────────────────────────┐
//! │                  Checkers (checker)                   │
//! │  list → resolve by name → detail/probe → envelope     │
//! └──────┬──────────────────┬─────────────────────┬───────┘
//! ┌──────┴──────┐    ┌──────┴──────┐       ┌──────┴──────┐
//! │  api        │    │  http       │       │  auth       │
//! │  endpoints  │    │  JSON client│       │  credential │
//! │  + models   │    │  + bearer   │       │  + refresh  │
//! └─────────────┘    └─────────────┘       └─────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Runtime configuration (environment-sourced)
pub mod config;

/// Credentials and token refresh
pub mod auth;

/// JSON HTTP client
pub mod http;

/// Airbyte API models and endpoint calls
pub mod api;

/// Connection and source status checkers
pub mod checker;

/// Agent-facing tool descriptors and dispatch
pub mod tools;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Config;
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
