//! Endpoint calls against the Airbyte API

use super::types::{Connection, ListResponse, Source};
use crate::auth::Credential;
use crate::error::Result;
use crate::http::ApiClient;
use serde_json::{json, Value};

/// The Airbyte API scoped to one workspace
#[derive(Debug)]
pub struct AirbyteApi {
    client: ApiClient,
    workspace_id: String,
}

impl AirbyteApi {
    /// Create an API handle over an HTTP client and workspace
    pub fn new(client: ApiClient, workspace_id: impl Into<String>) -> Self {
        Self {
            client,
            workspace_id: workspace_id.into(),
        }
    }

    /// The underlying HTTP client
    pub fn http(&self) -> &ApiClient {
        &self.client
    }

    /// The workspace scoping all listing calls
    pub fn workspace_id(&self) -> &str {
        &self.workspace_id
    }

    /// List all connections in the workspace, in listing order
    pub async fn list_connections(&self, credential: &Credential) -> Result<Vec<Connection>> {
        let response: ListResponse<Connection> = self
            .client
            .get_json(
                "/connections",
                &[("workspaceIds", self.workspace_id.as_str())],
                credential,
            )
            .await?;
        Ok(response.data)
    }

    /// Fetch the raw detail payload for one connection
    pub async fn get_connection(
        &self,
        connection_id: &str,
        credential: &Credential,
    ) -> Result<Value> {
        self.client
            .post_json(
                "/connections/get",
                json!({ "connectionId": connection_id }),
                credential,
            )
            .await
    }

    /// List all sources in the workspace, in listing order
    pub async fn list_sources(&self, credential: &Credential) -> Result<Vec<Source>> {
        let response: ListResponse<Source> = self
            .client
            .get_json(
                "/sources",
                &[("workspaceIds", self.workspace_id.as_str())],
                credential,
            )
            .await?;
        Ok(response.data)
    }

    /// Run the connectivity probe against one source, returning the raw job result
    pub async fn check_source(&self, source_id: &str, credential: &Credential) -> Result<Value> {
        self.client
            .post_json(
                "/sources/check_connection_to_source",
                json!({ "sourceId": source_id }),
                credential,
            )
            .await
    }
}
