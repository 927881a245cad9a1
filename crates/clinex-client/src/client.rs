//! Vendor API client with fallback routing

use crate::auth::OauthTokenProvider;
use crate::config::ClientConfig;
use crate::error::ClientError;
use clinex_domain::{CategorizedEntities, TokenProvider};
use clinex_extractor::{classify_response, fallback_classify};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Request body for the extraction endpoint.
#[derive(Serialize)]
struct ExtractionRequest<'a> {
    text: &'a str,
}

/// Client for the vendor's entity-extraction API.
///
/// Wraps the HTTP call and the classification core behind one entry point
/// that never fails: when the vendor is unreachable, returns an error, or
/// no credentials are configured, the call degrades to the local fallback
/// matcher and still returns the full categorized shape.
pub struct NlpClient<P = OauthTokenProvider>
where
    P: TokenProvider,
{
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Option<P>,
}

impl NlpClient<OauthTokenProvider> {
    /// Create a client from config.
    ///
    /// When the config carries no complete credential pair the client runs
    /// permanently in demo mode; a config that cannot produce an HTTP
    /// client also degrades to demo mode rather than failing construction.
    pub fn new(config: ClientConfig) -> Self {
        let tokens = match OauthTokenProvider::from_config(&config) {
            Ok(provider) => Some(provider),
            Err(ClientError::MissingCredentials) => {
                warn!("No API credentials found, running in demo mode");
                None
            }
            Err(e) => {
                warn!("Token provider unavailable ({}), running in demo mode", e);
                None
            }
        };

        Self::with_token_provider(config, tokens)
    }
}

impl<P> NlpClient<P>
where
    P: TokenProvider,
    P::Error: std::fmt::Display,
{
    /// Create a client with an injected token provider (or none, forcing
    /// demo mode).
    pub fn with_token_provider(config: ClientConfig, tokens: Option<P>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self {
            http,
            config,
            tokens,
        }
    }

    /// True when the client has a token provider to call the vendor with.
    pub fn is_live(&self) -> bool {
        self.tokens.is_some()
    }

    /// Extract categorized entities from clinical text.
    ///
    /// Empty input short-circuits to the empty result. Transport, auth and
    /// response failures are logged and routed to the fallback matcher;
    /// the caller always receives all four categories.
    pub async fn extract_entities(&self, text: &str) -> CategorizedEntities {
        if text.is_empty() {
            return CategorizedEntities::new();
        }

        info!("Extracting entities from text: {} characters", text.chars().count());

        let Some(tokens) = &self.tokens else {
            info!("No API credentials, using fallback matching");
            return fallback_classify(text);
        };

        match self.try_extract(tokens, text).await {
            Ok(entities) => entities,
            Err(e) => {
                warn!("Entity extraction failed ({}), using fallback matching", e);
                fallback_classify(text)
            }
        }
    }

    /// Call the vendor and classify its response.
    async fn try_extract(&self, tokens: &P, text: &str) -> Result<CategorizedEntities, ClientError> {
        let token = tokens
            .access_token()
            .await
            .map_err(|e| ClientError::Auth(e.to_string()))?;

        let response = self.call_with_retries(&token, text).await?;

        debug!("Classifying vendor response");
        classify_response(&response, text)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }

    /// POST the extraction request, retrying with exponential backoff.
    async fn call_with_retries(&self, token: &str, text: &str) -> Result<Value, ClientError> {
        let body = ExtractionRequest { text };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.config.max_retries {
            match self
                .http
                .post(&self.config.extraction_url)
                .bearer_auth(token)
                .json(&body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        return response.json::<Value>().await.map_err(|e| {
                            ClientError::InvalidResponse(format!("Failed to parse response: {}", e))
                        });
                    }

                    let status = response.status();
                    let error_text = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    last_error = Some(ClientError::Communication(format!(
                        "HTTP {}: {}",
                        status, error_text
                    )));
                }
                Err(e) => {
                    last_error = Some(ClientError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.config.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| ClientError::Communication("Max retries exceeded".to_string())))
    }
}
