//! Response classifier: vendor spans to categorized entity records

use crate::context::extract_context;
use crate::error::ExtractorError;
use crate::types::TaggedSpan;
use clinex_domain::{CategorizedEntities, Category, EntityRecord};
use serde_json::Value;
use tracing::debug;

/// Coding-system label stamped on every classifier-produced record,
/// regardless of which mapping key supplied the code.
pub const VENDOR_CODE_SYSTEM: &str = "IMO";

/// Key under `codemaps` that codes are read from.
pub const VENDOR_CODEMAP_KEY: &str = "imo";

/// Context window radius for classifier-produced records, in characters.
const CONTEXT_RADIUS: usize = 200;

/// Generic/administrative phrases that disqualify a span. Matched as
/// case-insensitive substrings of the span text, not whole tokens.
const IGNORED_TERMS: [&str; 15] = [
    "review test results",
    "patient education",
    "lifestyle",
    "education",
    "review",
    "follow-up",
    "follow up",
    "appointment",
    "monitoring",
    "discussion",
    "counseling",
    "instructions",
    "recommendations",
    "assessment",
    "plan",
];

/// Classify a decoded vendor response against the source text.
///
/// A response without an `entities` key yields the empty result with all
/// four categories present. Individual entities are decoded tolerantly:
/// missing or wrongly-typed fields default and can only cause the span to
/// be filtered, never an error.
///
/// # Errors
///
/// Returns [`ExtractorError::Precondition`] if `entities` is present but
/// not an array; that is a caller contract violation, not a data-quality
/// issue.
pub fn classify_response(
    response: &Value,
    source_text: &str,
) -> Result<CategorizedEntities, ExtractorError> {
    let Some(entities) = response.get("entities") else {
        return Ok(CategorizedEntities::new());
    };

    let raw_spans = entities.as_array().ok_or_else(|| {
        ExtractorError::Precondition(format!(
            "`entities` must be an array of spans, got {}",
            type_name(entities)
        ))
    })?;

    debug!("Classifying {} spans from response", raw_spans.len());

    let spans: Vec<TaggedSpan> = raw_spans.iter().map(TaggedSpan::from_value).collect();
    Ok(classify(&spans, source_text))
}

/// Classify vendor spans against the source text.
///
/// Spans are processed in input order; each accepted span lands in exactly
/// one category, so within a category the output order matches the input
/// order. Pure and stateless: identical input yields identical output.
pub fn classify(spans: &[TaggedSpan], source_text: &str) -> CategorizedEntities {
    let mut entities = CategorizedEntities::new();

    for span in spans {
        // Negated, possible and historical findings are not active entities.
        if !span.assertion_state.eq_ignore_ascii_case("present") {
            debug!(
                "Skipping span '{}' with assertion '{}'",
                span.text, span.assertion_state
            );
            continue;
        }

        let span_text = span.text.to_lowercase();
        let span_text = span_text.trim();
        if IGNORED_TERMS.iter().any(|term| span_text.contains(term)) {
            debug!("Ignoring generic span: '{}'", span.text);
            continue;
        }

        let Some(category) = Category::from_semantic_label(&span.semantic_label) else {
            debug!(
                "Dropping span '{}' with unmapped label '{}'",
                span.text, span.semantic_label
            );
            continue;
        };

        entities.push(category, build_record(span, source_text));
    }

    entities
}

/// Build the output record for an accepted span.
fn build_record(span: &TaggedSpan, source_text: &str) -> EntityRecord {
    let mapping = span.code_mapping(VENDOR_CODEMAP_KEY).unwrap_or_default();
    let offset = span.offset();
    let length = span.length();

    EntityRecord {
        text: span.text.clone(),
        code: mapping.code,
        code_system: VENDOR_CODE_SYSTEM.to_string(),
        description: mapping.title,
        offset,
        length,
        confidence: mapping.confidence,
        context: extract_context(source_text, offset, length, CONTEXT_RADIUS),
        entity_id: span.identifier.clone(),
        semantic_label: span.semantic_label.clone(),
        assertion_state: span.assertion_state.clone(),
        raw_code_mappings: span.code_mappings.clone(),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn present_span(text: &str, semantic: &str) -> TaggedSpan {
        TaggedSpan {
            text: text.to_string(),
            semantic_label: semantic.to_string(),
            assertion_state: "present".to_string(),
            ..TaggedSpan::default()
        }
    }

    #[test]
    fn test_assertion_filter_drops_non_present() {
        let mut absent = present_span("pneumonia", "problem");
        absent.assertion_state = "absent".to_string();
        let mut possible = present_span("stroke", "problem");
        possible.assertion_state = "possible".to_string();

        let entities = classify(&[absent, possible], "");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_assertion_filter_is_case_insensitive() {
        let mut span = present_span("pneumonia", "problem");
        span.assertion_state = "Present".to_string();

        let entities = classify(&[span], "");
        assert_eq!(entities.problems.len(), 1);
    }

    #[test]
    fn test_noise_filter_drops_denylisted_substrings() {
        let spans = [
            present_span("Review test results", "procedure"),
            present_span("diabetes education session", "problem"),
            present_span("schedule follow-up in clinic", "procedure"),
        ];

        let entities = classify(&spans, "");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_noise_filter_ignores_case_and_padding() {
        let span = present_span("  PATIENT EDUCATION  ", "procedure");
        let entities = classify(&[span], "");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_each_accepted_span_lands_in_one_category() {
        let spans = [
            present_span("hypertension", "problem"),
            present_span("cardiac catheterization", "procedure"),
            present_span("aspirin", "medication"),
            present_span("troponin", "lab"),
        ];

        let entities = classify(&spans, "");
        assert_eq!(entities.problems.len(), 1);
        assert_eq!(entities.procedures.len(), 1);
        assert_eq!(entities.medications.len(), 1);
        assert_eq!(entities.labs.len(), 1);
    }

    #[test]
    fn test_unmapped_label_is_dropped() {
        let span = present_span("left arm", "anatomy");
        let entities = classify(&[span], "");
        assert!(entities.is_empty());
    }

    #[test]
    fn test_output_preserves_input_order() {
        let spans = [
            present_span("hypertension", "problem"),
            present_span("diabetes", "problem"),
            present_span("asthma", "problem"),
        ];

        let entities = classify(&spans, "");
        let texts: Vec<_> = entities.problems.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["hypertension", "diabetes", "asthma"]);
    }

    #[test]
    fn test_code_extraction_from_vendor_mapping() {
        let mut span = present_span("hypertension", "problem");
        span.code_mappings = json!({
            "imo": { "lexical_code": "73430", "lexical_title": "Essential hypertension", "confidence": "0.92" },
            "icd10cm": { "lexical_code": "I10" }
        })
        .as_object()
        .unwrap()
        .clone();

        let entities = classify(&[span], "");
        let record = &entities.problems[0];
        assert_eq!(record.code, "73430");
        assert_eq!(record.description, "Essential hypertension");
        assert_eq!(record.confidence, 0.92);
        // Output system is the fixed vendor constant, not the mapping key.
        assert_eq!(record.code_system, VENDOR_CODE_SYSTEM);
        // The full mapping payload is passed through untouched.
        assert!(record.raw_code_mappings.contains_key("icd10cm"));
    }

    #[test]
    fn test_missing_mapping_defaults() {
        let span = present_span("hypertension", "problem");
        let entities = classify(&[span], "");
        let record = &entities.problems[0];
        assert_eq!(record.code, "");
        assert_eq!(record.description, "");
        assert_eq!(record.confidence, 0.0);
        assert_eq!(record.code_system, VENDOR_CODE_SYSTEM);
    }

    #[test]
    fn test_context_attached_from_source_text() {
        let text = "Patient presents with hypertension today.";
        let mut span = present_span("hypertension", "problem");
        span.begin_offset = 22;
        span.end_offset = 34;

        let entities = classify(&[span], text);
        assert_eq!(entities.problems[0].context, text);
        assert_eq!(entities.problems[0].offset, 22);
        assert_eq!(entities.problems[0].length, 12);
    }

    #[test]
    fn test_classify_response_without_entities_key() {
        let entities = classify_response(&json!({}), "text").unwrap();
        assert!(entities.is_empty());
        // All four buckets are present even when empty.
        let value = serde_json::to_value(&entities).unwrap();
        for key in ["problems", "procedures", "medications", "labs"] {
            assert!(value[key].is_array());
        }
    }

    #[test]
    fn test_classify_response_rejects_non_array_entities() {
        let result = classify_response(&json!({ "entities": "lots" }), "text");
        assert!(matches!(result, Err(ExtractorError::Precondition(_))));
    }

    #[test]
    fn test_classify_response_tolerates_junk_entries() {
        let response = json!({
            "entities": [
                null,
                "not an object",
                { "text": "hypertension", "semantic": "problem", "assertion": "present" }
            ]
        });

        let entities = classify_response(&response, "").unwrap();
        assert_eq!(entities.total(), 1);
        assert_eq!(entities.problems[0].text, "hypertension");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let spans = [
            present_span("hypertension", "problem"),
            present_span("aspirin", "medication"),
        ];
        let first = classify(&spans, "some text");
        let second = classify(&spans, "some text");
        assert_eq!(first, second);
    }
}
