//! Clinex Client Layer
//!
//! Transport and auth collaborator for the extraction core: OAuth
//! client-credentials token acquisition and the vendor entity-extraction
//! HTTP call.
//!
//! # Architecture
//!
//! This crate implements the `TokenProvider` trait from `clinex-domain`
//! and wraps the vendor API behind [`NlpClient`]. Transport and auth
//! failures never propagate out of [`NlpClient::extract_entities`]: per
//! the core contract they are routed to the local fallback matcher, so
//! callers always receive the same categorized output shape.
//!
//! # Examples
//!
//! ```
//! use clinex_client::{ClientConfig, NlpClient};
//!
//! # async fn example() {
//! // No credentials configured: every call runs in demo mode.
//! let client = NlpClient::new(ClientConfig::default());
//! let entities = client.extract_entities("Patient has hypertension.").await;
//! assert_eq!(entities.problems[0].text, "Hypertension");
//! # }
//! ```

#![warn(missing_docs)]

mod auth;
mod client;
mod config;
mod error;

pub use auth::OauthTokenProvider;
pub use client::NlpClient;
pub use config::ClientConfig;
pub use error::ClientError;

// Re-export for callers that force demo mode without building a client.
pub use clinex_extractor::fallback_classify;

use clinex_domain::TokenProvider;

/// Deterministic token provider for testing.
///
/// Returns a pre-configured token without any network calls, or a fixed
/// error when constructed via [`StaticTokenProvider::failing`].
///
/// # Examples
///
/// ```
/// use clinex_client::StaticTokenProvider;
/// use clinex_domain::TokenProvider;
///
/// # tokio_test::block_on(async {
/// let provider = StaticTokenProvider::new("test-token");
/// assert_eq!(provider.access_token().await.unwrap(), "test-token");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Create a provider that always returns the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Create a provider that always fails.
    pub fn failing() -> Self {
        Self { token: None }
    }
}

impl TokenProvider for StaticTokenProvider {
    type Error = ClientError;

    async fn access_token(&self) -> Result<String, Self::Error> {
        self.token
            .clone()
            .ok_or_else(|| ClientError::Auth("static provider configured to fail".to_string()))
    }
}
