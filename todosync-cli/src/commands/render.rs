//! Console rendering shared by commands

use std::path::Path;

use todosync_core::{preview, IssueDraft, Summary, SummaryConfig, Task, DEFAULT_SOURCE_NAME};

/// File name cited in issue bodies for tasks read from `path`
pub fn source_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_SOURCE_NAME)
}

/// Issue drafts for all tasks, in document order
pub fn build_drafts(tasks: &[Task], source: &str) -> Vec<IssueDraft> {
    tasks
        .iter()
        .map(|task| IssueDraft::from_task(task, source))
        .collect()
}

/// Print tasks grouped by category with a short preview of each group
pub fn print_summary(summary: &Summary<'_>, settings: &SummaryConfig) {
    println!("📋 Found {} unchecked tasks", summary.total());

    for group in summary.groups() {
        println!();
        println!("{}: {} tasks", group.name, group.tasks.len());

        for task in group.tasks.iter().take(settings.preview_tasks) {
            println!("  - {}", preview(&task.text, settings.preview_width));
        }

        let remaining = group.remaining(settings.preview_tasks);
        if remaining > 0 {
            println!("  ... and {} more", remaining);
        }
    }
}

/// Print drafts with title and labels
///
/// Bodies are previewed for the first few drafts only, or printed in full
/// for every draft when `verbose` is set.
pub fn print_issue_drafts(drafts: &[IssueDraft], settings: &SummaryConfig, verbose: bool) {
    for (i, draft) in drafts.iter().enumerate() {
        let number = i + 1;

        println!();
        println!("Issue {}:", number);
        println!("  Title: {}", draft.title);
        println!("  Labels: {}", draft.labels.join(", "));

        if verbose {
            println!("  Body:");
            for line in draft.body.lines() {
                println!("    {}", line);
            }
        } else if number <= settings.body_preview_issues {
            println!(
                "  Body (preview): {}",
                preview(&draft.body, settings.body_preview_width)
            );
        }
    }
}
