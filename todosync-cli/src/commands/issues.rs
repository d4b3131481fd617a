//! Issues command - show the issue drafts that would be created

use clap::Args;
use todosync_core::{load_tasks, Config};

use super::render::{build_drafts, print_issue_drafts, source_name};

/// Show issue drafts for every unchecked task
#[derive(Args, Debug)]
pub struct IssuesArgs {
    /// Print drafts as a JSON array of {title, body, labels}
    #[arg(long)]
    json: bool,
}

impl IssuesArgs {
    /// Execute the issues command
    pub fn execute(&self, verbose: bool, config: &Config) -> anyhow::Result<()> {
        let todo_file = &config.input.todo_file;
        let tasks = load_tasks(todo_file)?;
        let drafts = build_drafts(&tasks, source_name(todo_file));

        if self.json {
            println!("{}", serde_json::to_string_pretty(&drafts)?);
            return Ok(());
        }

        if drafts.is_empty() {
            println!("No unchecked tasks in {}.", todo_file.display());
            return Ok(());
        }

        println!("Would create {} issue(s):", drafts.len());
        print_issue_drafts(&drafts, &config.summary, verbose);

        Ok(())
    }
}
