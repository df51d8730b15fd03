//! Credential value and OAuth2 refresh-token flow

use crate::config::{Config, OauthCredentials};
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

/// An immutable bearer token value
///
/// Airbyte's cloud API issues opaque access tokens with no expiry signal in
/// the token itself, so no expiry is tracked here.
#[derive(Debug, Clone)]
pub struct Credential {
    token: String,
    fetched_at: DateTime<Utc>,
}

impl Credential {
    /// Wrap a token obtained now
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            fetched_at: Utc::now(),
        }
    }

    /// The bearer token value
    pub fn token(&self) -> &str {
        &self.token
    }

    /// When this credential was obtained
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// OAuth2 refresh-token flow against the Airbyte token endpoint
///
/// Holds everything the grant needs; `refresh` produces a new `Credential`
/// and leaves all shared state alone.
#[derive(Debug, Clone)]
pub struct TokenRefresher {
    token_url: String,
    client_id: String,
    client_secret: String,
    refresh_token: String,
    http_client: Client,
}

impl TokenRefresher {
    /// Build a refresher from config, if the OAuth pair is configured.
    ///
    /// The API key doubles as the refresh token, matching how Airbyte cloud
    /// application credentials work.
    pub fn from_config(config: &Config, http_client: Client) -> Option<Self> {
        let OauthCredentials {
            client_id,
            client_secret,
        } = config.oauth.clone()?;

        Some(Self {
            token_url: format!("{}/applications/token", config.api_url),
            client_id,
            client_secret,
            refresh_token: config.api_key.clone(),
            http_client,
        })
    }

    /// Perform one refresh-token grant and return the new credential
    pub async fn refresh(&self) -> Result<Credential> {
        let form = [
            ("grant_type", "refresh_token"),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&form)
            .send()
            .await
            .map_err(Error::Http)?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::token_refresh(format!(
                "token request failed with status {status}: {body}"
            )));
        }

        let token_response: TokenResponse = response.json().await.map_err(Error::Http)?;
        match token_response.access_token {
            Some(token) if !token.is_empty() => Ok(Credential::new(token)),
            _ => Err(Error::token_refresh("no access token in response")),
        }
    }
}

/// OAuth2 token response
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}
