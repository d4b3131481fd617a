//! Issue title/body rendering from tasks

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::task::Task;

/// Maximum title length in characters, ellipsis included
pub const MAX_TITLE_LENGTH: usize = 80;

/// Source file name cited in issue bodies by default
pub const DEFAULT_SOURCE_NAME: &str = "todo.md";

const ELLIPSIS: &str = "...";

/// `**text**`
static BOLD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());

/// `` `text` ``
static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Everything an issue tracker needs to open an issue for a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueDraft {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

impl IssueDraft {
    /// Render the draft for a task read from `source_name`
    pub fn from_task(task: &Task, source_name: &str) -> Self {
        Self {
            title: generate_title(task),
            body: generate_body_for_source(task, source_name),
            labels: task.labels.clone(),
        }
    }
}

/// Generate a concise issue title from task text
///
/// Bold and inline-code markers are removed. Titles longer than
/// [`MAX_TITLE_LENGTH`] characters are cut and end with `...`.
pub fn generate_title(task: &Task) -> String {
    let title = BOLD_PATTERN.replace_all(&task.text, "$1");
    let title = CODE_PATTERN.replace_all(&title, "$1");

    if title.chars().count() > MAX_TITLE_LENGTH {
        let keep = MAX_TITLE_LENGTH - ELLIPSIS.len();
        let mut truncated: String = title.chars().take(keep).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        title.into_owned()
    }
}

/// Generate an issue body citing [`DEFAULT_SOURCE_NAME`]
pub fn generate_body(task: &Task) -> String {
    generate_body_for_source(task, DEFAULT_SOURCE_NAME)
}

/// Generate an issue body with the task's origin and heading context
pub fn generate_body_for_source(task: &Task, source_name: &str) -> String {
    let mut body = String::new();

    body.push_str(&format!(
        "**Task from {} (line {})**\n\n",
        source_name, task.line_number
    ));
    body.push_str(&task.text);
    body.push_str("\n\n");

    if let Some(category) = task.category_name() {
        body.push_str(&format!("**Category:** {}\n", category));
    }
    if let Some(subcategory) = task.subcategory_name() {
        body.push_str(&format!("**Subcategory:** {}\n", subcategory));
    }

    body.push_str("\n---\n");
    body.push_str(&format!(
        "This issue was automatically created from the {} file.\n",
        source_name
    ));

    body
}
