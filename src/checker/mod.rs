//! Status checkers
//!
//! Both checkers follow the same pipeline: list the workspace, resolve a
//! name case-insensitively (first match in listing order wins), run one
//! follow-up call, and reshape the response into a result envelope. Every
//! failure inside a check is converted to an error envelope at the public
//! boundary; nothing escapes as a fault.

mod connection;
mod reports;
mod resolve;
mod source;

pub use connection::ConnectionChecker;
pub use reports::{ConnectionReport, ConnectionSummary, SourceReport, SourceSummary};
pub use resolve::{resolve_by_name, Named};
pub use source::SourceChecker;

use crate::api::AirbyteApi;
use crate::auth::{Credential, TokenRefresher};
use crate::config::Config;
use crate::error::Result;
use crate::http::{ApiClient, ApiClientConfig};
use std::sync::Arc;

/// Both checkers, wired from one config
pub struct Checkers {
    pub connections: ConnectionChecker,
    pub sources: SourceChecker,
}

impl Checkers {
    /// Build the API handle and both checkers from runtime config
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = ApiClient::new(ApiClientConfig::new(&config.api_url))?;
        let refresher = TokenRefresher::from_config(config, client.inner().clone());
        let api = Arc::new(AirbyteApi::new(client, &config.workspace_id));
        let credential = Credential::new(&config.api_key);

        Ok(Self {
            connections: ConnectionChecker::new(Arc::clone(&api), credential.clone(), refresher),
            sources: SourceChecker::new(api, credential),
        })
    }
}
