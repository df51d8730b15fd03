//! Source connectivity checker

use super::reports::SourceReport;
use super::resolve::resolve_by_name;
use crate::api::{AirbyteApi, SourceCheck};
use crate::auth::Credential;
use crate::error::{Error, ResourceKind, Result};
use std::sync::Arc;
use tracing::{debug, warn};

/// Probes live connectivity of sources in the workspace
///
/// No token refresh here; the source checker always uses the credential it
/// was constructed with.
pub struct SourceChecker {
    api: Arc<AirbyteApi>,
    credential: Credential,
}

impl SourceChecker {
    /// Create a checker over an API handle
    pub fn new(api: Arc<AirbyteApi>, credential: Credential) -> Self {
        Self { api, credential }
    }

    /// Check one source by name, or list all sources when `name` is absent.
    /// Never fails; any error becomes an error envelope.
    pub async fn check(&self, name: Option<&str>) -> SourceReport {
        match self.run(name).await {
            Ok(report) => report,
            Err(err) => {
                if err.is_not_found() {
                    debug!("Source lookup missed: {err}");
                } else {
                    warn!("Source check failed: {err}");
                }
                SourceReport::from_error(&err)
            }
        }
    }

    /// The fallible pipeline with structured errors preserved
    pub async fn run(&self, name: Option<&str>) -> Result<SourceReport> {
        let sources = self.api.list_sources(&self.credential).await?;

        let Some(query) = name else {
            return Ok(SourceReport::listing(&sources));
        };

        let source = resolve_by_name(&sources, query)
            .ok_or_else(|| Error::not_found(ResourceKind::Source, query))?;

        let raw = self
            .api
            .check_source(&source.source_id, &self.credential)
            .await?;
        let check = SourceCheck::from_value(&raw);

        Ok(SourceReport::detail(source, query, check))
    }
}
