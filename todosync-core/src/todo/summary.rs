//! Category summary of parsed tasks

use std::collections::BTreeSet;

use super::task::Task;

/// Group name for tasks without a category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Tasks sharing a category, in document order
#[derive(Debug, Clone)]
pub struct CategoryGroup<'a> {
    pub name: &'a str,
    pub tasks: Vec<&'a Task>,
}

impl CategoryGroup<'_> {
    /// Number of tasks left out when showing the first `shown`
    pub fn remaining(&self, shown: usize) -> usize {
        self.tasks.len().saturating_sub(shown)
    }
}

/// Overview of a parsed checklist
#[derive(Debug, Clone)]
pub struct Summary<'a> {
    tasks: &'a [Task],
    groups: Vec<CategoryGroup<'a>>,
}

impl<'a> Summary<'a> {
    /// Group tasks by category, groups in first-seen order
    pub fn from_tasks(tasks: &'a [Task]) -> Self {
        let mut groups: Vec<CategoryGroup<'a>> = Vec::new();

        for task in tasks {
            let name = task.category_name().unwrap_or(UNCATEGORIZED);
            match groups.iter_mut().find(|g| g.name == name) {
                Some(group) => group.tasks.push(task),
                None => groups.push(CategoryGroup {
                    name,
                    tasks: vec![task],
                }),
            }
        }

        Self { tasks, groups }
    }

    /// Total number of tasks
    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    pub fn groups(&self) -> &[CategoryGroup<'a>] {
        &self.groups
    }

    /// `(category, count)` pairs in first-seen order
    pub fn category_counts(&self) -> Vec<(&'a str, usize)> {
        self.groups.iter().map(|g| (g.name, g.tasks.len())).collect()
    }

    /// Task count for one category (0 if absent)
    pub fn count_for(&self, category: &str) -> usize {
        self.groups
            .iter()
            .find(|g| g.name == category)
            .map_or(0, |g| g.tasks.len())
    }

    /// Every label in use, sorted and de-duplicated
    pub fn label_inventory(&self) -> BTreeSet<&'a str> {
        self.tasks
            .iter()
            .flat_map(|t| t.labels.iter().map(String::as_str))
            .collect()
    }
}

/// Cut `text` to `width` characters, marking the cut with `...`
pub fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }

    let mut cut: String = text.chars().take(width).collect();
    cut.push_str("...");
    cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::parse_todo;

    const FIXTURE: &str = include_str!("../../fixtures/todo.md");

    #[test]
    fn test_groups_in_first_seen_order() {
        let tasks = parse_todo("- [ ] a\n## Backend\n- [ ] b\n## Shared Types\n- [ ] c\n## Backend\n- [ ] d");
        let summary = Summary::from_tasks(&tasks);

        assert_eq!(summary.total(), 4);
        assert_eq!(
            summary.category_counts(),
            vec![(UNCATEGORIZED, 1), ("Backend", 2), ("Shared Types", 1)]
        );

        let backend = &summary.groups()[1];
        assert_eq!(backend.tasks[0].text, "b");
        assert_eq!(backend.tasks[1].text, "d");
    }

    #[test]
    fn test_remaining() {
        let tasks = parse_todo("## Backend\n- [ ] a\n- [ ] b\n- [ ] c\n- [ ] d\n- [ ] e");
        let summary = Summary::from_tasks(&tasks);
        assert_eq!(summary.groups()[0].remaining(3), 2);
        assert_eq!(summary.groups()[0].remaining(10), 0);
    }

    #[test]
    fn test_label_inventory() {
        let tasks = parse_todo("## Backend\n### API\n- [ ] a\n## Shared Types\n- [ ] b\n- [ ] c");
        let labels: Vec<_> = Summary::from_tasks(&tasks).label_inventory().into_iter().collect();
        assert_eq!(labels, vec!["api", "backend", "shared", "types"]);
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_tasks(&[]);
        assert_eq!(summary.total(), 0);
        assert!(summary.groups().is_empty());
        assert!(summary.label_inventory().is_empty());
    }

    #[test]
    fn test_fixture_category_counts() {
        let tasks = parse_todo(FIXTURE);
        let summary = Summary::from_tasks(&tasks);

        assert_eq!(summary.count_for("Backend .NET 9"), 4);
        assert_eq!(summary.count_for("Frontend Driver (PWA)"), 4);
        assert_eq!(summary.count_for("Frontend Tracking"), 8);
        assert_eq!(summary.count_for("Shared Types"), 4);
        assert_eq!(
            summary.count_for("Instructions manuelles importantes (à développer prochainement)"),
            11
        );
        assert_eq!(summary.count_for("Nonexistent"), 0);
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 60), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
        assert_eq!(preview("ééééé", 2), "éé...");
    }
}
