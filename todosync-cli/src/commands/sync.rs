//! Sync command - the full parse, summarize, export and preview run

use std::path::{Path, PathBuf};

use clap::Args;
use todosync_core::{export_json, load_tasks, Config, Summary, Task};

use super::render::{build_drafts, print_issue_drafts, print_summary, source_name};

/// Parse the todo file, export it and list the issues to create
#[derive(Args, Debug)]
pub struct SyncArgs {
    /// Path of the JSON export (overrides config and TODOSYNC_EXPORT_FILE)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Skip writing the JSON export
    #[arg(long)]
    no_export: bool,
}

impl SyncArgs {
    /// Execute the sync command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let todo_file = &config.input.todo_file;
        let (tasks, exported) = self.load_and_export(config)?;

        println!("🔍 Parsed {}", todo_file.display());
        println!();
        print_summary(&Summary::from_tasks(&tasks), &config.summary);

        if let Some(output) = exported {
            println!();
            println!("✅ Exported tasks to {}", output.display());
        }

        println!();
        println!("📝 GitHub Issues to create:");
        let drafts = build_drafts(&tasks, source_name(todo_file));
        print_issue_drafts(&drafts, &config.summary, verbose);

        println!();
        println!();
        println!("🎯 Total issues to create: {}", drafts.len());
        println!();
        println!("ℹ️  To create these issues in GitHub, use the GitHub CLI or API");
        if let Some(output) = exported {
            println!("    Task data exported to: {}", output.display());
        }

        Ok(())
    }

    /// Load tasks and write the export, before anything is printed
    ///
    /// Returns the export path unless `--no-export` was given.
    fn load_and_export<'a>(
        &'a self,
        config: &'a Config,
    ) -> anyhow::Result<(Vec<Task>, Option<&'a Path>)> {
        let tasks = load_tasks(&config.input.todo_file)?;

        if self.no_export {
            return Ok((tasks, None));
        }

        let output = self
            .output
            .as_deref()
            .unwrap_or(config.output.export_file.as_path());
        export_json(&tasks, output)?;
        Ok((tasks, Some(output)))
    }
}
