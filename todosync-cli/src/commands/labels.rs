//! Labels command - label inventory and per-category counts

use clap::Args;
use todosync_core::{load_tasks, Config, Summary};

/// Show labels in use and tasks per category
#[derive(Args, Debug)]
pub struct LabelsArgs {
    /// Expected task count for a category, as CATEGORY=COUNT (repeatable)
    #[arg(short, long, value_parser = parse_expectation)]
    expect: Vec<(String, usize)>,
}

impl LabelsArgs {
    /// Execute the labels command
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let tasks = load_tasks(&config.input.todo_file)?;
        let summary = Summary::from_tasks(&tasks);

        let labels = summary.label_inventory();
        println!(
            "Found {} unique labels: {}",
            labels.len(),
            labels.into_iter().collect::<Vec<_>>().join(", ")
        );

        println!();
        println!("Category distribution:");
        let mut counts = summary.category_counts();
        counts.sort();
        for (category, count) in counts {
            println!("  {}: {} tasks", category, count);
        }

        if self.expect.is_empty() {
            return Ok(());
        }

        println!();
        let mismatches = check_expectations(&summary, &self.expect);
        if mismatches.is_empty() {
            println!("✓ All category counts match expected values");
            return Ok(());
        }

        for (category, expected, actual) in &mismatches {
            println!("⚠️  {}: expected {}, got {}", category, expected, actual);
        }
        anyhow::bail!("{} category count(s) differ from expected", mismatches.len())
    }
}

/// Parse `CATEGORY=COUNT`; the category itself may contain `=`
fn parse_expectation(s: &str) -> Result<(String, usize), String> {
    let (category, count) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("expected CATEGORY=COUNT, got '{}'", s))?;

    let count = count
        .trim()
        .parse()
        .map_err(|e| format!("invalid count '{}': {}", count, e))?;

    Ok((category.trim().to_string(), count))
}

/// `(category, expected, actual)` for every expectation that does not hold
fn check_expectations<'a>(
    summary: &Summary<'_>,
    expected: &'a [(String, usize)],
) -> Vec<(&'a str, usize, usize)> {
    expected
        .iter()
        .filter_map(|(category, count)| {
            let actual = summary.count_for(category);
            (actual != *count).then_some((category.as_str(), *count, actual))
        })
        .collect()
}
