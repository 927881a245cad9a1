//! Fallback matcher: local keyword scan when the vendor is unavailable

use crate::context::extract_context;
use crate::vocabulary::{FallbackVocabulary, VOCABULARIES};
use clinex_domain::{CategorizedEntities, EntityRecord};
use tracing::debug;

/// Prefix for synthetic codes on fallback-produced records.
const DEMO_CODE_PREFIX: &str = "DEMO-";

/// Context window radius for fallback-produced records, in characters.
const CONTEXT_RADIUS: usize = 50;

/// Scan the source text for known clinical terms and synthesize entity
/// records in the same shape the classifier produces.
///
/// Each vocabulary is scanned independently in declaration order; a term
/// contributes at most one record, anchored at its first occurrence.
/// Matching is plain case-insensitive substring search, so a term may
/// match inside a larger word. Output order within a category follows
/// vocabulary order, not text position.
pub fn fallback_classify(source_text: &str) -> CategorizedEntities {
    let text_lower = source_text.to_lowercase();
    let mut entities = CategorizedEntities::new();

    for vocabulary in VOCABULARIES {
        for &term in vocabulary.terms {
            let Some(byte_offset) = text_lower.find(term) else {
                continue;
            };
            // Byte offset in the lowered text, converted to a character
            // offset so the window is cut from the original-cased text.
            let offset = text_lower[..byte_offset].chars().count();
            entities.push(
                vocabulary.category,
                synthesize_record(&vocabulary, term, source_text, offset),
            );
        }
    }

    debug!("Fallback matching produced {} entities", entities.total());

    entities
}

/// Build the synthetic record for one matched term.
fn synthesize_record(
    vocabulary: &FallbackVocabulary,
    term: &str,
    source_text: &str,
    offset: usize,
) -> EntityRecord {
    let length = term.chars().count();
    EntityRecord {
        text: title_case(term),
        code: synthetic_code(term),
        code_system: vocabulary.code_system.to_string(),
        description: title_case(term),
        offset,
        length,
        confidence: vocabulary.confidence,
        context: extract_context(source_text, offset, length, CONTEXT_RADIUS),
        entity_id: String::new(),
        semantic_label: String::new(),
        assertion_state: String::new(),
        raw_code_mappings: serde_json::Map::new(),
    }
}

/// Synthetic code for a vocabulary term: fixed prefix, upper-cased, spaces
/// replaced with hyphens.
fn synthetic_code(term: &str) -> String {
    format!("{}{}", DEMO_CODE_PREFIX, term.replace(' ', "-").to_uppercase())
}

/// Capitalize the first letter of each whitespace-separated word.
fn title_case(term: &str) -> String {
    term.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
