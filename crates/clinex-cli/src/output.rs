//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use clinex_domain::{CategorizedEntities, Category};

/// Output formatter.
pub struct Formatter {
    format: CliFormat,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: CliFormat) -> Self {
        Self { format }
    }

    /// Format an extraction result.
    pub fn format_entities(&self, entities: &CategorizedEntities) -> Result<String> {
        match self.format {
            CliFormat::Json => Ok(serde_json::to_string_pretty(entities)?),
            CliFormat::Summary => Ok(self.format_summary(entities)),
        }
    }

    /// Per-category human-readable summary.
    fn format_summary(&self, entities: &CategorizedEntities) -> String {
        if entities.is_empty() {
            return "No entities found.".to_string();
        }

        let mut out = String::new();
        for category in Category::ALL {
            let records = entities.get(category);
            if records.is_empty() {
                continue;
            }

            out.push_str(&format!("{} ({})\n", category.key(), records.len()));
            for record in records {
                if record.code.is_empty() {
                    out.push_str(&format!(
                        "  - {} (confidence {:.2})\n",
                        record.text, record.confidence
                    ));
                } else {
                    out.push_str(&format!(
                        "  - {} [{} {}] (confidence {:.2})\n",
                        record.text, record.code_system, record.code, record.confidence
                    ));
                }
            }
        }

        out
    }
}
