//! Runtime configuration
//!
//! All configuration is environment-sourced. The workspace id and API key
//! are mandatory; startup fails fast when either is absent, before any tool
//! is served. The OAuth client id/secret pair is optional and gates whether
//! token refresh is attempted on connection checks.

use crate::error::{Error, Result};

/// Default Airbyte API base URL
pub const DEFAULT_API_URL: &str = "https://api.airbyte.com/v1";

/// Runtime configuration for the Airbyte API client
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for all API requests (no trailing slash)
    pub api_url: String,
    /// Workspace scoping every listing call
    pub workspace_id: String,
    /// Bearer token; also used as the OAuth2 refresh token
    pub api_key: String,
    /// OAuth client credentials, present only when refresh is configured
    pub oauth: Option<OauthCredentials>,
}

/// OAuth client id/secret pair for the refresh-token grant
#[derive(Debug, Clone)]
pub struct OauthCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first (best effort,
    /// missing file is fine).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// Split out from `from_env` so validation is testable without touching
    /// process-wide environment state.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String> {
            match lookup(var) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(Error::missing_env(var)),
            }
        };

        let workspace_id = required("AIRBYTE_WORKSPACE_ID")?;
        let api_key = required("AIRBYTE_API_KEY")?;

        let api_url = lookup("AIRBYTE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // Refresh is only attempted when both halves of the pair are set
        let oauth = match (lookup("AIRBYTE_CLIENT_ID"), lookup("AIRBYTE_CLIENT_SECRET")) {
            (Some(client_id), Some(client_secret))
                if !client_id.is_empty() && !client_secret.is_empty() =>
            {
                Some(OauthCredentials {
                    client_id,
                    client_secret,
                })
            }
            _ => None,
        };

        Ok(Self {
            api_url,
            workspace_id,
            api_key,
            oauth,
        })
    }

    /// True when token refresh should be attempted before connection checks
    pub fn refresh_enabled(&self) -> bool {
        self.oauth.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from<'a>(map: &'a HashMap<&'a str, &'a str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |var| map.get(var).map(|v| (*v).to_string())
    }

    #[test]
    fn test_config_requires_workspace_and_key() {
        let vars = HashMap::new();
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingEnv { ref var } if var == "AIRBYTE_WORKSPACE_ID"
        ));

        let mut vars = HashMap::new();
        vars.insert("AIRBYTE_WORKSPACE_ID", "ws-1");
        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(
            err,
            Error::MissingEnv { ref var } if var == "AIRBYTE_API_KEY"
        ));
    }

    #[test]
    fn test_config_defaults() {
        let mut vars = HashMap::new();
        vars.insert("AIRBYTE_WORKSPACE_ID", "ws-1");
        vars.insert("AIRBYTE_API_KEY", "secret");

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.workspace_id, "ws-1");
        assert_eq!(config.api_key, "secret");
        assert!(!config.refresh_enabled());
    }

    #[test]
    fn test_config_url_override_trims_trailing_slash() {
        let mut vars = HashMap::new();
        vars.insert("AIRBYTE_WORKSPACE_ID", "ws-1");
        vars.insert("AIRBYTE_API_KEY", "secret");
        vars.insert("AIRBYTE_API_URL", "http://localhost:8001/api/v1/");

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.api_url, "http://localhost:8001/api/v1");
    }

    #[test]
    fn test_config_oauth_requires_both_halves() {
        let mut vars = HashMap::new();
        vars.insert("AIRBYTE_WORKSPACE_ID", "ws-1");
        vars.insert("AIRBYTE_API_KEY", "secret");
        vars.insert("AIRBYTE_CLIENT_ID", "client");

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert!(!config.refresh_enabled());

        vars.insert("AIRBYTE_CLIENT_SECRET", "shh");
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert!(config.refresh_enabled());
        let oauth = config.oauth.unwrap();
        assert_eq!(oauth.client_id, "client");
        assert_eq!(oauth.client_secret, "shh");
    }

    #[test]
    fn test_config_blank_values_treated_as_missing() {
        let mut vars = HashMap::new();
        vars.insert("AIRBYTE_WORKSPACE_ID", "  ");
        vars.insert("AIRBYTE_API_KEY", "secret");

        let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, Error::MissingEnv { .. }));
    }
}
