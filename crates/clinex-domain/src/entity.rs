//! Entity record - the unit of extraction output

use serde::{Deserialize, Serialize};

/// A single clinical entity accepted by the classifier or synthesized by
/// the fallback matcher.
///
/// Records are created once per accepted span and never mutated afterward.
/// Fields the producing path has no source for (e.g. vendor identifiers on
/// the fallback path) default to empty rather than being optional, so both
/// paths serialize to the same shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    /// Literal text of the entity as it appears in the source
    pub text: String,

    /// Code assigned by the vendor (or synthetic code on the fallback path)
    pub code: String,

    /// Coding system the code belongs to
    pub code_system: String,

    /// Human-readable title for the code
    pub description: String,

    /// Character offset of the entity in the source text
    pub offset: usize,

    /// Character length of the entity
    pub length: usize,

    /// Confidence score, always finite and in [0.0, 1.0]
    pub confidence: f64,

    /// Bounded text window around the entity, for human review
    pub context: String,

    /// Vendor-assigned span identifier (empty on the fallback path)
    pub entity_id: String,

    /// Vendor semantic label that drove categorization
    #[serde(rename = "semantic")]
    pub semantic_label: String,

    /// Vendor assertion state ("present" for every accepted span)
    #[serde(rename = "assertion")]
    pub assertion_state: String,

    /// Vendor code-mapping payload, passed through verbatim
    #[serde(rename = "codemaps")]
    pub raw_code_mappings: serde_json::Map<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EntityRecord {
        EntityRecord {
            text: "hypertension".to_string(),
            code: "12345".to_string(),
            code_system: "IMO".to_string(),
            description: "Essential hypertension".to_string(),
            offset: 12,
            length: 12,
            confidence: 0.97,
            context: "Patient has hypertension".to_string(),
            entity_id: "ent-1".to_string(),
            semantic_label: "problem".to_string(),
            assertion_state: "present".to_string(),
            raw_code_mappings: serde_json::Map::new(),
        }
    }

    #[test]
    fn test_serializes_with_vendor_field_names() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["semantic"], "problem");
        assert_eq!(json["assertion"], "present");
        assert!(json["codemaps"].is_object());
        assert_eq!(json["code_system"], "IMO");
    }

    #[test]
    fn test_json_round_trip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: EntityRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }
}
