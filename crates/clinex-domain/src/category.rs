//! Entity categories and the categorized result shape

use crate::entity::EntityRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four fixed entity categories.
///
/// Declaration order is the priority order for categorization: a semantic
/// label matching more than one keyword group is assigned to the first
/// matching category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Problems, conditions and diagnoses
    Problems,
    /// Procedures and operations
    Procedures,
    /// Medications and drugs
    Medications,
    /// Labs, observations and tests
    Labs,
}

/// Keyword groups tested against the lower-cased vendor semantic label,
/// in priority order.
const CATEGORY_KEYWORDS: [(Category, &[&str]); 4] = [
    (Category::Problems, &["problem", "condition", "diagnosis"]),
    (Category::Procedures, &["procedure"]),
    (Category::Medications, &["medication", "drug"]),
    (Category::Labs, &["lab", "observation", "test"]),
];

impl Category {
    /// All categories in priority order.
    pub const ALL: [Category; 4] = [
        Category::Problems,
        Category::Procedures,
        Category::Medications,
        Category::Labs,
    ];

    /// Output key for this category.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Problems => "problems",
            Category::Procedures => "procedures",
            Category::Medications => "medications",
            Category::Labs => "labs",
        }
    }

    /// Resolve a vendor semantic label to a category.
    ///
    /// Matching is case-insensitive substring containment against the
    /// keyword groups, first match wins. Labels matching no group resolve
    /// to `None` and the span is dropped by the classifier.
    ///
    /// # Examples
    ///
    /// ```
    /// use clinex_domain::Category;
    ///
    /// assert_eq!(Category::from_semantic_label("Problem"), Some(Category::Problems));
    /// assert_eq!(Category::from_semantic_label("drug_ingredient"), Some(Category::Medications));
    /// assert_eq!(Category::from_semantic_label("anatomy"), None);
    /// ```
    pub fn from_semantic_label(label: &str) -> Option<Category> {
        let label = label.to_lowercase();
        for (category, keywords) in CATEGORY_KEYWORDS {
            if keywords.iter().any(|k| label.contains(k)) {
                return Some(category);
            }
        }
        None
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Entities from one extraction call, bucketed by category.
///
/// All four buckets are always present; within a bucket, records keep the
/// order they were produced in (input span order on the classifier path,
/// vocabulary order on the fallback path). Assembled fresh on every call
/// and owned solely by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorizedEntities {
    /// Problems, conditions and diagnoses
    #[serde(default)]
    pub problems: Vec<EntityRecord>,

    /// Procedures and operations
    #[serde(default)]
    pub procedures: Vec<EntityRecord>,

    /// Medications and drugs
    #[serde(default)]
    pub medications: Vec<EntityRecord>,

    /// Labs, observations and tests
    #[serde(default)]
    pub labs: Vec<EntityRecord>,
}

impl CategorizedEntities {
    /// Create an empty result with all four buckets present.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the given category, preserving insertion order.
    pub fn push(&mut self, category: Category, record: EntityRecord) {
        self.bucket_mut(category).push(record);
    }

    /// Records in the given category.
    pub fn get(&self, category: Category) -> &[EntityRecord] {
        match category {
            Category::Problems => &self.problems,
            Category::Procedures => &self.procedures,
            Category::Medications => &self.medications,
            Category::Labs => &self.labs,
        }
    }

    fn bucket_mut(&mut self, category: Category) -> &mut Vec<EntityRecord> {
        match category {
            Category::Problems => &mut self.problems,
            Category::Procedures => &mut self.procedures,
            Category::Medications => &mut self.medications,
            Category::Labs => &mut self.labs,
        }
    }

    /// Total number of records across all categories.
    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    /// True if every category is empty.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_matching_priority_order() {
        // "lab test for condition" contains keywords from two groups;
        // problems wins because it is first in priority order.
        assert_eq!(
            Category::from_semantic_label("lab test for condition"),
            Some(Category::Problems)
        );
    }

    #[test]
    fn test_label_matching_is_substring_based() {
        assert_eq!(
            Category::from_semantic_label("laboratory_result"),
            Some(Category::Labs)
        );
        assert_eq!(
            Category::from_semantic_label("DIAGNOSIS_CODE"),
            Some(Category::Problems)
        );
    }

    #[test]
    fn test_unknown_label_resolves_to_none() {
        assert_eq!(Category::from_semantic_label(""), None);
        assert_eq!(Category::from_semantic_label("anatomy"), None);
    }

    #[test]
    fn test_empty_result_has_all_buckets() {
        let entities = CategorizedEntities::new();
        assert!(entities.is_empty());
        let json = serde_json::to_value(&entities).unwrap();
        for category in Category::ALL {
            assert!(json[category.key()].is_array());
        }
    }

    #[test]
    fn test_category_keys() {
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["problems", "procedures", "medications", "labs"]);
    }
}
