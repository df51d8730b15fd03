//! Airbyte API response models
//!
//! Fields the remote may omit carry `#[serde(default)]` so a sparse payload
//! deserializes instead of failing the whole call.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Listing response wrapper: `{"data": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    /// Listed items, in remote listing order
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// A connection (source→destination sync pipeline)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    #[serde(default)]
    pub connection_id: String,
    #[serde(default)]
    pub name: String,
    /// Free-text status; "active" is compared case-insensitively
    #[serde(default)]
    pub status: String,
}

impl Connection {
    /// Whether the remote considers this connection active
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// A source (data extractor)
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub source_type: String,
}

// ============================================================================
// Sync catalog (connection detail payload)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
struct SyncCatalog {
    #[serde(default)]
    streams: Vec<CatalogStream>,
}

#[derive(Debug, Default, Deserialize)]
struct CatalogStream {
    #[serde(default)]
    stream: StreamDescriptor,
    #[serde(default)]
    config: StreamConfig,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDescriptor {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Default, Deserialize)]
struct StreamConfig {
    #[serde(default)]
    selected: bool,
}

/// Extract the selected stream names from a raw connection detail payload.
///
/// Catalog order is preserved. A missing or malformed catalog yields an
/// empty list rather than an error, matching the remote's loose schema.
pub fn selected_streams(detail: &Value) -> Vec<String> {
    let catalog: SyncCatalog = detail
        .get("syncCatalog")
        .cloned()
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default();

    catalog
        .streams
        .into_iter()
        .filter(|s| s.config.selected)
        .map(|s| s.stream.name)
        .collect()
}

// ============================================================================
// Source connectivity probe
// ============================================================================

/// Typed view over a raw `check_connection_to_source` response
#[derive(Debug, Clone)]
pub struct SourceCheck {
    /// Remote job status; "succeeded" means healthy
    pub status: String,
    /// Raw `jobInfo` payload, passed through in the envelope
    pub job_info: Value,
    /// Failure reason reported by the remote job, if any
    pub failure_reason: Option<String>,
}

impl SourceCheck {
    /// Read the probe fields out of the raw response
    pub fn from_value(value: &Value) -> Self {
        let status = value
            .get("status")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let job_info = value
            .get("jobInfo")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        let failure_reason = job_info
            .get("failureReason")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            status,
            job_info,
            failure_reason,
        }
    }

    /// Whether the probe reported a healthy source
    pub fn succeeded(&self) -> bool {
        self.status == "succeeded"
    }
}
