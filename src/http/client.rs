//! JSON HTTP client with bearer authentication

use crate::auth::Credential;
use crate::error::{Error, Result};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base URL for all requests (no trailing slash expected)
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl ApiClientConfig {
    /// Create a config for the given base URL with defaults
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            user_agent: format!("airbyte-status/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// JSON HTTP client scoped to one API base URL
pub struct ApiClient {
    client: Client,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new client from config
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, config })
    }

    /// The underlying reqwest client (shared with the token refresher)
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// The configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Make a GET request with query pairs and parse the JSON response
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        credential: &Credential,
    ) -> Result<T> {
        let url = self.build_url(path);
        let mut req = self.client.get(&url);
        if !query.is_empty() {
            req = req.query(query);
        }
        self.send_json(Method::GET, &url, req, credential).await
    }

    /// Make a POST request with a JSON body and parse the JSON response
    pub async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        credential: &Credential,
    ) -> Result<T> {
        let url = self.build_url(path);
        let req = self.client.post(&url).json(&body);
        self.send_json(Method::POST, &url, req, credential).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        req: RequestBuilder,
        credential: &Credential,
    ) -> Result<T> {
        let response = req
            .header("Content-Type", "application/json")
            .bearer_auth(credential.token())
            .send()
            .await
            .map_err(Error::Http)?;

        let response = check_status(response).await?;
        debug!("Request succeeded: {} {}", method, url);

        response.json().await.map_err(Error::Http)
    }

    /// Build full URL from path
    fn build_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Map non-2xx responses to `Error::HttpStatus`, capturing the body
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(Error::HttpStatus {
        status: status.as_u16(),
        body,
    })
}
