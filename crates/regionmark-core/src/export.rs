//! Rendered annotation output
//!
//! One `[start, end, "label"]` triple per line, ordered by start, wrapped in
//! brackets:
//!
//! ```text
//! [
//!   [2, 6.5, "cough"]
//! ]
//! ```
//!
//! Labels are JSON string literals so quotes and newlines survive; regions
//! without a label render as `""`.

use std::fmt;

use serde::Serialize;

use crate::label_store::LabelStore;
use crate::types::{Region, RegionId, Time};

/// One exported annotation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationEntry {
    pub id: RegionId,
    pub start: Time,
    pub end: Time,
    pub label: String,
}

impl fmt::Display for AnnotationEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = serde_json::Value::String(self.label.clone());
        write!(f, "[{}, {}, {}]", self.start, self.end, label)
    }
}

/// Pair each region with its label, keeping the given order
pub fn annotation_entries(regions: &[Region], labels: &LabelStore) -> Vec<AnnotationEntry> {
    regions
        .iter()
        .map(|r| AnnotationEntry {
            id: r.id.clone(),
            start: r.start,
            end: r.end,
            label: labels.get(&r.id).to_string(),
        })
        .collect()
}

/// Render the bracketed list for display
///
/// `regions` should already be in start order (as returned by
/// `RegionStore::list`).
pub fn format_regions(regions: &[Region], labels: &LabelStore) -> String {
    let lines: Vec<String> = annotation_entries(regions, labels)
        .iter()
        .map(|entry| format!("  {}", entry))
        .collect();
    format!("[\n{}\n]", lines.join("\n"))
}
