//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during classification.
///
/// Data-quality issues (missing fields, wrong value types) never surface
/// here; they are recovered via defaults. Only caller contract violations
/// are errors.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// The caller passed a value that violates the input contract, e.g. an
    /// `entities` field that is not an array
    #[error("Precondition violated: {0}")]
    Precondition(String),
}
