//! Todosync Core - turn a todo.md checklist into issue drafts
//!
//! This crate scans a markdown checklist, keeps track of the section and
//! subsection headings above each unchecked item, classifies items with
//! labels and renders title/body text for an issue tracker.

pub mod config;
pub mod error;
pub mod export;
pub mod todo;

pub use config::{Config, InputConfig, OutputConfig, SummaryConfig};
pub use error::{Error, Result};
pub use export::{export_json, load_tasks, read_todo_file, tasks_to_json};
pub use todo::{
    determine_labels, generate_body, generate_body_for_source, generate_title, parse_todo,
    preview, CategoryGroup, HeadingContext, IssueDraft, Summary, Task, DEFAULT_SOURCE_NAME,
    UNCATEGORIZED,
};
