//! Export command - write unchecked tasks as a JSON array

use std::path::PathBuf;

use clap::Args;
use todosync_core::{export_json, load_tasks, tasks_to_json, Config};

/// Export unchecked tasks as JSON
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Path of the JSON export (overrides config and TODOSYNC_EXPORT_FILE)
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the JSON to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let tasks = load_tasks(&config.input.todo_file)?;

        if self.stdout {
            println!("{}", tasks_to_json(&tasks)?);
            return Ok(());
        }

        let output = self.output.as_ref().unwrap_or(&config.output.export_file);
        export_json(&tasks, output)?;
        println!("Exported {} task(s) to {}", tasks.len(), output.display());

        Ok(())
    }
}
