//! todo.md parser

use tracing::debug;

use super::task::Task;
use super::tracker::HeadingContext;

/// Marker of an unchecked checklist item
pub const UNCHECKED_MARKER: &str = "- [ ]";

/// Text of an unchecked item, or `None` if the line is not one
///
/// Leading indentation is allowed, so nested items are extracted too.
pub fn unchecked_item_text(line: &str) -> Option<&str> {
    line.trim().strip_prefix(UNCHECKED_MARKER).map(str::trim)
}

/// Parse a todo.md document into its unchecked tasks
///
/// Single pass over the lines: headings update the context, unchecked
/// items become tasks tagged with a snapshot of it. Document order is
/// preserved. Parsing never fails; a document without unchecked items
/// yields an empty list.
pub fn parse_todo(content: &str) -> Vec<Task> {
    let mut context = HeadingContext::default();
    let mut tasks = Vec::new();

    for (index, line) in content.lines().enumerate() {
        if context.observe(line) {
            continue;
        }

        if let Some(text) = unchecked_item_text(line) {
            tasks.push(Task::new(text, &context, index + 1));
        }
    }

    debug!(tasks = tasks.len(), "Parsed todo checklist");
    tasks
}
