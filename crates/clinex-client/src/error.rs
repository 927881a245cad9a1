//! Error types for the client layer

use thiserror::Error;

/// Errors that can occur during transport or auth operations.
///
/// These never escape [`crate::NlpClient::extract_entities`]; they are
/// logged and routed to the fallback matcher.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Token acquisition failed
    #[error("Auth error: {0}")]
    Auth(String),

    /// The vendor returned a response the core could not accept
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// No usable credentials are configured
    #[error("No API credentials configured")]
    MissingCredentials,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Communication(e.to_string())
    }
}
