//! Loading todo files and exporting tasks as JSON

use std::path::Path;

use tracing::{debug, info};

use crate::todo::{parse_todo, Task};
use crate::{Error, Result};

/// Read a todo file as UTF-8 text
///
/// A missing file is reported as [`Error::NotFound`] and undecodable
/// content as [`Error::Decode`].
pub fn read_todo_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io(e),
    })?;

    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a todo file
pub fn load_tasks(path: &Path) -> Result<Vec<Task>> {
    let content = read_todo_file(path)?;
    let tasks = parse_todo(&content);

    info!(path = %path.display(), tasks = tasks.len(), "Loaded todo file");
    Ok(tasks)
}

/// Serialize tasks as a pretty-printed JSON array
pub fn tasks_to_json(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string_pretty(tasks)?)
}

/// Write tasks to `path` as a JSON array
pub fn export_json(tasks: &[Task], path: &Path) -> Result<()> {
    let json = tasks_to_json(tasks)?;
    std::fs::write(path, json)?;

    debug!(path = %path.display(), tasks = tasks.len(), "Exported tasks");
    Ok(())
}
