//! Task record for a single unchecked checklist item

use serde::{Deserialize, Serialize};

use super::labels::determine_labels;
use super::tracker::HeadingContext;

/// An unchecked item from a todo.md file
///
/// Field order is the key order of the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Item text with the `- [ ]` marker stripped
    pub text: String,
    /// Nearest level-2 heading above the item
    pub category: Option<String>,
    /// Nearest level-3 heading since the last level-2 heading
    pub subcategory: Option<String>,
    /// Labels derived from category and subcategory (never empty)
    pub labels: Vec<String>,
    /// 1-based line of the item in the source document
    pub line_number: usize,
}

impl Task {
    /// Build a task from item text and the heading context it appears under
    pub fn new(text: impl Into<String>, context: &HeadingContext, line_number: usize) -> Self {
        let category = context.category().map(str::to_string);
        let subcategory = context.subcategory().map(str::to_string);
        let labels = determine_labels(category.as_deref(), subcategory.as_deref());

        Self {
            text: text.into(),
            category,
            subcategory,
            labels,
            line_number,
        }
    }

    /// Category if present and non-empty
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Subcategory if present and non-empty
    pub fn subcategory_name(&self) -> Option<&str> {
        self.subcategory.as_deref().filter(|s| !s.is_empty())
    }

    /// Check whether the task carries the given label
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }
}
