//! Connection status checker

use super::reports::ConnectionReport;
use super::resolve::resolve_by_name;
use crate::api::{selected_streams, AirbyteApi};
use crate::auth::{Credential, TokenRefresher};
use crate::error::{Error, ResourceKind, Result};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Checks sync status of connections in the workspace
///
/// When a refresher is configured, every check attempts one token refresh
/// first. A successful refresh replaces the held credential; a failed one is
/// logged and the previous credential is reused.
pub struct ConnectionChecker {
    api: Arc<AirbyteApi>,
    credential: RwLock<Credential>,
    refresher: Option<TokenRefresher>,
}

impl ConnectionChecker {
    /// Create a checker over an API handle
    pub fn new(
        api: Arc<AirbyteApi>,
        credential: Credential,
        refresher: Option<TokenRefresher>,
    ) -> Self {
        Self {
            api,
            credential: RwLock::new(credential),
            refresher,
        }
    }

    /// Check one connection by name, or list all connections when `name` is
    /// absent. Never fails; any error becomes an error envelope.
    pub async fn check(&self, name: Option<&str>) -> ConnectionReport {
        match self.run(name).await {
            Ok(report) => report,
            Err(err) => {
                if err.is_not_found() {
                    debug!("Connection lookup missed: {err}");
                } else {
                    warn!("Connection check failed: {err}");
                }
                ConnectionReport::from_error(&err)
            }
        }
    }

    /// The fallible pipeline, structured errors preserved for callers that
    /// want to distinguish kinds.
    pub async fn run(&self, name: Option<&str>) -> Result<ConnectionReport> {
        let credential = self.current_credential().await;
        let connections = self.api.list_connections(&credential).await?;

        let Some(query) = name else {
            return Ok(ConnectionReport::listing(&connections));
        };

        let connection = resolve_by_name(&connections, query)
            .ok_or_else(|| Error::not_found(ResourceKind::Connection, query))?;

        let details = self
            .api
            .get_connection(&connection.connection_id, &credential)
            .await?;
        let streams = selected_streams(&details);

        Ok(ConnectionReport::detail(connection, query, streams, details))
    }

    /// Refresh the credential if configured, falling back to the held one.
    ///
    /// Refresh is attempted on every call, not only near expiry; the remote
    /// gives no expiry signal to key off.
    async fn current_credential(&self) -> Credential {
        if let Some(refresher) = &self.refresher {
            match refresher.refresh().await {
                Ok(fresh) => {
                    let mut held = self.credential.write().await;
                    *held = fresh.clone();
                    return fresh;
                }
                Err(err) => {
                    warn!("Token refresh failed, continuing with existing token: {err}");
                }
            }
        }

        self.credential.read().await.clone()
    }
}
