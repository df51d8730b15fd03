//! Error types for the Airbyte status tools
//!
//! This module defines the error hierarchy for the entire crate.
//! All fallible internal APIs return `Result<T, Error>` where Error is
//! defined here. User-facing text is formatted only at the tool boundary;
//! everything below it keeps the structured kind.

use thiserror::Error;

/// The main error type for the crate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required environment variable: {var}")]
    MissingEnv { var: String },

    // ============================================================================
    // Authentication Errors
    // ============================================================================
    #[error("Token refresh failed: {message}")]
    TokenRefresh { message: String },

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Response Errors
    // ============================================================================
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Resolution Errors
    // ============================================================================
    #[error("{kind} '{name}' not found")]
    NotFound { kind: ResourceKind, name: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Kind of remote resource a lookup can miss
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Connection,
    Source,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Connection => write!(f, "Connection"),
            ResourceKind::Source => write!(f, "Source"),
        }
    }
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing environment variable error
    pub fn missing_env(var: impl Into<String>) -> Self {
        Self::MissingEnv { var: var.into() }
    }

    /// Create a token refresh error
    pub fn token_refresh(message: impl Into<String>) -> Self {
        Self::TokenRefresh {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not-found error for a named resource
    pub fn not_found(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    /// True when the error is a resolution miss rather than a fault
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// Result type alias for the crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_env("AIRBYTE_API_KEY");
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: AIRBYTE_API_KEY"
        );

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");

        let err = Error::token_refresh("bad grant");
        assert_eq!(err.to_string(), "Token refresh failed: bad grant");
    }

    #[test]
    fn test_not_found_display_keeps_queried_name() {
        let err = Error::not_found(ResourceKind::Connection, "orders-sync");
        assert_eq!(err.to_string(), "Connection 'orders-sync' not found");

        let err = Error::not_found(ResourceKind::Source, "Stripe Prod");
        assert_eq!(err.to_string(), "Source 'Stripe Prod' not found");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found(ResourceKind::Source, "x").is_not_found());
        assert!(!Error::config("x").is_not_found());
        assert!(!Error::http_status(500, "").is_not_found());
    }
}
