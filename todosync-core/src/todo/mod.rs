//! Todo checklist parsing and issue rendering
//!
//! This module handles parsing of todo.md files: headings give each
//! unchecked item its category/subcategory context, which drives the
//! labels and issue text generated for it.

mod issue;
mod labels;
mod parser;
mod summary;
mod task;
mod tracker;

pub use issue::{
    generate_body, generate_body_for_source, generate_title, IssueDraft, DEFAULT_SOURCE_NAME,
    MAX_TITLE_LENGTH,
};
pub use labels::{determine_labels, FALLBACK_LABEL};
pub use parser::{parse_todo, unchecked_item_text, UNCHECKED_MARKER};
pub use summary::{preview, CategoryGroup, Summary, UNCATEGORIZED};
pub use task::Task;
pub use tracker::HeadingContext;
