//! Clinex Extractor
//!
//! Turns a vendor entity-extraction response into categorized clinical
//! entity records, and approximates the same output locally when the
//! vendor is unavailable.
//!
//! # Overview
//!
//! Three components, all pure and synchronous:
//!
//! - **Response Classifier**: filters vendor spans (assertion state, noise
//!   denylist), extracts codes, attaches a context window and buckets each
//!   accepted span into one of four categories
//! - **Context Windower**: bounded, clamped substring extraction around a
//!   span offset
//! - **Fallback Matcher**: keyword scan over a fixed clinical vocabulary,
//!   emitting synthetic records in the same output shape
//!
//! # Architecture
//!
//! ```text
//! vendor response → classify_response → CategorizedEntities
//! source text     → fallback_classify → CategorizedEntities
//! ```
//!
//! Both paths terminate in the same [`CategorizedEntities`] shape, so
//! downstream consumers never see which one ran.
//!
//! # Example Usage
//!
//! ```
//! use clinex_extractor::{classify_response, fallback_classify};
//!
//! let text = "Patient has hypertension and takes aspirin daily.";
//!
//! // Degraded mode: local keyword matching
//! let entities = fallback_classify(text);
//! assert_eq!(entities.problems[0].text, "Hypertension");
//!
//! // Live mode: classify a decoded vendor response
//! let response = serde_json::json!({ "entities": [] });
//! let entities = classify_response(&response, text)?;
//! assert!(entities.is_empty());
//! # Ok::<(), clinex_extractor::ExtractorError>(())
//! ```

#![warn(missing_docs)]

mod classifier;
mod context;
mod error;
mod fallback;
mod types;
mod vocabulary;


pub use classifier::{classify, classify_response, VENDOR_CODEMAP_KEY, VENDOR_CODE_SYSTEM};
pub use context::extract_context;
pub use error::ExtractorError;
pub use fallback::fallback_classify;
pub use types::{CodeMapping, TaggedSpan};

pub use clinex_domain::{CategorizedEntities, Category, EntityRecord};
