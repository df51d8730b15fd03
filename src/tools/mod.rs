//! Agent-facing tool surface
//!
//! Tool descriptors and a transport-agnostic dispatcher. How the tools are
//! served (HTTP, stdio, anything else) is the caller's concern; this module
//! only knows names, input schemas, and how to route a call to a checker.

use crate::checker::Checkers;
use serde_json::{json, Value};

/// Tool name: connection status check / listing
pub const CHECK_CONNECTION_TOOL: &str = "check_airbyte_connection";

/// Tool name: source connectivity check / listing
pub const CHECK_SOURCE_TOOL: &str = "check_airbyte_source";

/// Tool descriptors with MCP-style JSON input schemas
pub fn definitions() -> Value {
    json!({
        "tools": [
            {
                "name": CHECK_CONNECTION_TOOL,
                "title": "Check Airbyte Connection",
                "description": "Check the status of an Airbyte connection or list all connections.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "connection_name": {
                            "type": "string",
                            "description": "Name of the connection to check. If not provided, lists all connections."
                        }
                    }
                }
            },
            {
                "name": CHECK_SOURCE_TOOL,
                "title": "Check Airbyte Source",
                "description": "Check the status of an Airbyte source or list all sources.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "source_name": {
                            "type": "string",
                            "description": "Name of the source to check. If not provided, lists all sources."
                        }
                    }
                }
            }
        ]
    })
}

/// Route a tool call to the matching checker.
///
/// Always returns a well-formed envelope; an unknown tool name yields an
/// error envelope rather than a fault.
pub async fn dispatch(name: &str, args: &Value, checkers: &Checkers) -> Value {
    match name {
        CHECK_CONNECTION_TOOL => {
            let connection_name = string_arg(args, "connection_name");
            let report = checkers.connections.check(connection_name.as_deref()).await;
            to_envelope(&report)
        }
        CHECK_SOURCE_TOOL => {
            let source_name = string_arg(args, "source_name");
            let report = checkers.sources.check(source_name.as_deref()).await;
            to_envelope(&report)
        }
        other => json!({
            "status": "error",
            "message": format!("❌ Unknown tool '{other}'")
        }),
    }
}

/// Read an optional string argument, treating empty strings as absent
fn string_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Serialize a report; the report types only contain serializable fields,
/// so a failure here would be a bug in this crate.
fn to_envelope<T: serde::Serialize>(report: &T) -> Value {
    serde_json::to_value(report).unwrap_or_else(|e| {
        json!({
            "status": "error",
            "message": format!("❌ Error: failed to serialize result: {e}")
        })
    })
}

#[cfg(test)]
mod tests;
