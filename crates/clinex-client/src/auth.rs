//! OAuth client-credentials token provider
//!
//! Implements the token acquisition flow against the vendor's auth
//! endpoint: POST the credential pair with the fixed audience, cache the
//! returned token and refresh it 60 seconds before expiry.

use crate::config::ClientConfig;
use crate::error::ClientError;
use clinex_domain::TokenProvider;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Tokens are refreshed this long before their reported expiry.
const REFRESH_SKEW: Duration = Duration::from_secs(60);

/// Expiry assumed when the auth response omits `expires_in`.
const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// Token provider backed by the vendor's OAuth endpoint.
pub struct OauthTokenProvider {
    client: reqwest::Client,
    auth_url: String,
    audience: String,
    client_id: String,
    client_secret: String,
    cached: Mutex<Option<CachedToken>>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    expires_at: Instant,
}

/// Request body for the token endpoint.
#[derive(Serialize)]
struct TokenRequest<'a> {
    grant_type: &'a str,
    client_id: &'a str,
    client_secret: &'a str,
    audience: &'a str,
}

/// Response from the token endpoint.
#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    DEFAULT_EXPIRES_IN_SECS
}

impl OauthTokenProvider {
    /// Create a provider from config.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredentials`] when the config has no
    /// complete credential pair.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        let (Some(client_id), Some(client_secret)) = (&config.client_id, &config.client_secret)
        else {
            return Err(ClientError::MissingCredentials);
        };

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            auth_url: config.auth_url.clone(),
            audience: config.audience.clone(),
            client_id: client_id.clone(),
            client_secret: client_secret.clone(),
            cached: Mutex::new(None),
        })
    }

    fn cached_token(&self) -> Option<String> {
        let cached = self.cached.lock().ok()?;
        cached
            .as_ref()
            .filter(|c| Instant::now() < c.expires_at)
            .map(|c| c.token.clone())
    }

    fn store_token(&self, token: String, expires_in: u64) {
        let expires_at = Instant::now() + Duration::from_secs(expires_in).saturating_sub(REFRESH_SKEW);
        if let Ok(mut cached) = self.cached.lock() {
            *cached = Some(CachedToken { token, expires_at });
        }
    }

    async fn fetch_token(&self) -> Result<TokenResponse, ClientError> {
        info!("Requesting access token from auth endpoint");

        let body = TokenRequest {
            grant_type: "client_credentials",
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            audience: &self.audience,
        };

        let response = self.client.post(&self.auth_url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Auth(format!("HTTP {}: {}", status, error_text)));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| ClientError::Auth(format!("Failed to parse token response: {}", e)))
    }
}

impl TokenProvider for OauthTokenProvider {
    type Error = ClientError;

    async fn access_token(&self) -> Result<String, Self::Error> {
        if let Some(token) = self.cached_token() {
            debug!("Using cached access token");
            return Ok(token);
        }

        let response = self.fetch_token().await?;
        info!("Access token obtained (expires in {}s)", response.expires_in);
        self.store_token(response.access_token.clone(), response.expires_in);

        Ok(response.access_token)
    }
}
