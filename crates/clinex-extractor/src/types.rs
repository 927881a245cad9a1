//! Vendor span types and tolerant decoding

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tagged region of text returned by the vendor's extraction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    /// Literal substring matched by the vendor
    #[serde(default)]
    pub text: String,

    /// Character offset where the span begins
    #[serde(default, rename = "begin")]
    pub begin_offset: i64,

    /// Character offset where the span ends (exclusive)
    #[serde(default, rename = "end")]
    pub end_offset: i64,

    /// Vendor category hint, e.g. "problem" or "procedure"
    #[serde(default, rename = "semantic")]
    pub semantic_label: String,

    /// Vendor polarity/certainty hint, e.g. "present" or "absent"
    #[serde(default, rename = "assertion")]
    pub assertion_state: String,

    /// Vendor-assigned span identifier
    #[serde(default, rename = "id")]
    pub identifier: String,

    /// Code mappings keyed by coding-system name, passed through as-is
    #[serde(default, rename = "codemaps")]
    pub code_mappings: serde_json::Map<String, Value>,
}

/// One code-mapping entry extracted from a span.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CodeMapping {
    /// Code within the coding system
    pub code: String,

    /// Human-readable title for the code
    pub title: String,

    /// Confidence score, coerced to a finite value in [0.0, 1.0]
    pub confidence: f64,
}

impl TaggedSpan {
    /// Decode a span from a loose JSON value, defaulting anything missing
    /// or wrongly typed.
    ///
    /// A non-object value decodes to a fully-defaulted span, which the
    /// classifier then drops at the assertion filter. Decoding itself never
    /// fails.
    pub fn from_value(value: &Value) -> TaggedSpan {
        let Some(obj) = value.as_object() else {
            return TaggedSpan::default();
        };

        TaggedSpan {
            text: str_field(obj, "text"),
            begin_offset: int_field(obj, "begin"),
            end_offset: int_field(obj, "end"),
            semantic_label: str_field(obj, "semantic"),
            assertion_state: str_field(obj, "assertion"),
            identifier: str_field(obj, "id"),
            code_mappings: obj
                .get("codemaps")
                .and_then(Value::as_object)
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Character length of the span; negative vendor offsets clamp to zero.
    pub fn length(&self) -> usize {
        (self.end_offset - self.begin_offset).max(0) as usize
    }

    /// Character offset of the span start, clamped to zero.
    pub fn offset(&self) -> usize {
        self.begin_offset.max(0) as usize
    }

    /// Look up a code mapping by coding-system key.
    ///
    /// Missing fields default to empty strings; the confidence is coerced
    /// from a number or numeric string, defaulting to 0.0.
    pub fn code_mapping(&self, system: &str) -> Option<CodeMapping> {
        let entry = self.code_mappings.get(system)?.as_object()?;
        Some(CodeMapping {
            code: str_field(entry, "lexical_code"),
            title: str_field(entry, "lexical_title"),
            confidence: entry.get("confidence").map(coerce_confidence).unwrap_or(0.0),
        })
    }
}

fn str_field(obj: &serde_json::Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn int_field(obj: &serde_json::Map<String, Value>, key: &str) -> i64 {
    obj.get(key).and_then(Value::as_i64).unwrap_or(0)
}

/// Coerce a JSON value to a confidence score.
///
/// Accepts numbers and numeric strings; anything else, and anything
/// non-finite or out of range, collapses into [0.0, 1.0].
fn coerce_confidence(value: &Value) -> f64 {
    let raw = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if raw.is_finite() {
        raw.clamp(0.0, 1.0)
    } else {
        0.0
    }
}
