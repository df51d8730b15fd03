//! Result envelopes returned by the checkers
//!
//! Every tool call yields a JSON-serializable mapping with at least `status`
//! and `message`. Collection fields (`connections`, `sources`, `streams`)
//! are always present, even when empty.

use crate::api::{Connection, Source, SourceCheck};
use crate::error::Error;
use serde::Serialize;
use serde_json::Value;

/// One connection row in a listing envelope
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionSummary {
    pub name: String,
    pub id: String,
    /// "🟢 Active" or "🔴 Inactive"
    pub status: String,
}

impl From<&Connection> for ConnectionSummary {
    fn from(conn: &Connection) -> Self {
        let status = if conn.is_active() {
            "🟢 Active"
        } else {
            "🔴 Inactive"
        };
        Self {
            name: conn.name.clone(),
            id: conn.connection_id.clone(),
            status: status.to_string(),
        }
    }
}

/// Envelope returned by the connection checker
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ConnectionReport {
    /// All connections in the workspace, listing order preserved
    Listing {
        status: String,
        message: String,
        connections: Vec<ConnectionSummary>,
    },
    /// Status of one resolved connection
    Detail {
        /// Raw remote status, passed through
        status: String,
        message: String,
        connection_name: String,
        connection_id: String,
        /// Selected stream names, catalog order
        streams: Vec<String>,
        /// Raw detail payload from the remote
        details: Value,
    },
    /// Contained failure
    Error { status: String, message: String },
}

impl ConnectionReport {
    /// Build the listing envelope
    pub fn listing(connections: &[Connection]) -> Self {
        Self::Listing {
            status: "success".to_string(),
            message: "📋 Here's a list of all connections".to_string(),
            connections: connections.iter().map(ConnectionSummary::from).collect(),
        }
    }

    /// Build the single-connection envelope
    pub fn detail(conn: &Connection, query: &str, streams: Vec<String>, details: Value) -> Self {
        let message = if conn.is_active() {
            format!("✅ Connection '{query}' is active")
        } else {
            format!("❌ Connection '{query}' is inactive")
        };

        Self::Detail {
            status: conn.status.clone(),
            message,
            connection_name: query.to_string(),
            connection_id: conn.connection_id.clone(),
            streams,
            details,
        }
    }

    /// Convert any error into a well-formed error envelope
    pub fn from_error(err: &Error) -> Self {
        Self::Error {
            status: "error".to_string(),
            message: error_message(err),
        }
    }

    /// The envelope's `status` field
    pub fn status(&self) -> &str {
        match self {
            Self::Listing { status, .. } | Self::Detail { status, .. } | Self::Error { status, .. } => {
                status
            }
        }
    }

    /// The envelope's `message` field
    pub fn message(&self) -> &str {
        match self {
            Self::Listing { message, .. }
            | Self::Detail { message, .. }
            | Self::Error { message, .. } => message,
        }
    }
}

/// One source row in a listing envelope
#[derive(Debug, Clone, Serialize)]
pub struct SourceSummary {
    pub name: String,
    pub id: String,
    pub source_type: String,
}

impl From<&Source> for SourceSummary {
    fn from(source: &Source) -> Self {
        Self {
            name: source.name.clone(),
            id: source.source_id.clone(),
            source_type: source.source_type.clone(),
        }
    }
}

/// Envelope returned by the source checker
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SourceReport {
    /// All sources in the workspace, listing order preserved
    Listing {
        status: String,
        message: String,
        sources: Vec<SourceSummary>,
    },
    /// Connectivity probe result for one resolved source
    Detail {
        /// Raw remote job status, passed through
        status: String,
        message: String,
        source_name: String,
        source_id: String,
        source_type: String,
        /// Raw `jobInfo` payload from the remote
        job_info: Value,
    },
    /// Contained failure
    Error { status: String, message: String },
}

impl SourceReport {
    /// Build the listing envelope
    pub fn listing(sources: &[Source]) -> Self {
        Self::Listing {
            status: "success".to_string(),
            message: "📋 Here's a list of all sources".to_string(),
            sources: sources.iter().map(SourceSummary::from).collect(),
        }
    }

    /// Build the single-source envelope from a probe result
    pub fn detail(source: &Source, query: &str, check: SourceCheck) -> Self {
        let message = if check.succeeded() {
            format!("✅ Connection to source '{query}' is healthy")
        } else {
            let mut msg = format!("❌ Connection to source '{query}' failed");
            if let Some(reason) = &check.failure_reason {
                msg.push_str(": ");
                msg.push_str(reason);
            }
            msg
        };

        Self::Detail {
            status: check.status,
            message,
            source_name: query.to_string(),
            source_id: source.source_id.clone(),
            source_type: source.source_type.clone(),
            job_info: check.job_info,
        }
    }

    /// Convert any error into a well-formed error envelope
    pub fn from_error(err: &Error) -> Self {
        Self::Error {
            status: "error".to_string(),
            message: error_message(err),
        }
    }

    /// The envelope's `status` field
    pub fn status(&self) -> &str {
        match self {
            Self::Listing { status, .. } | Self::Detail { status, .. } | Self::Error { status, .. } => {
                status
            }
        }
    }

    /// The envelope's `message` field
    pub fn message(&self) -> &str {
        match self {
            Self::Listing { message, .. }
            | Self::Detail { message, .. }
            | Self::Error { message, .. } => message,
        }
    }
}

/// Boundary formatting: resolution misses keep their own phrasing, every
/// other failure collapses to a generic description.
fn error_message(err: &Error) -> String {
    if err.is_not_found() {
        format!("❌ {err}")
    } else {
        format!("❌ Error: {err}")
    }
}
