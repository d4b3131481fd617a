//! Heading context tracking

/// Category/subcategory context while scanning a checklist top to bottom
///
/// Only `## ` and `### ` headings change the context. Any other line that
/// starts with `#` is still consumed as a heading but leaves it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadingContext {
    category: Option<String>,
    subcategory: Option<String>,
}

impl HeadingContext {
    /// Current level-2 heading
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// Current level-3 heading
    pub fn subcategory(&self) -> Option<&str> {
        self.subcategory.as_deref()
    }

    /// Feed one raw line to the tracker
    ///
    /// Returns `true` if the line is a heading. Heading lines never produce
    /// a task, whatever their level.
    pub fn observe(&mut self, line: &str) -> bool {
        if !line.starts_with('#') {
            return false;
        }

        if let Some(rest) = line.strip_prefix("## ") {
            self.category = Some(rest.trim().to_string());
            self.subcategory = None;
        } else if let Some(rest) = line.strip_prefix("### ") {
            // A subcategory only exists under a category
            if self.category.is_some() {
                self.subcategory = Some(rest.trim().to_string());
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_resets_subcategory() {
        let mut context = HeadingContext::default();
        assert!(context.observe("## Backend"));
        assert!(context.observe("### API"));
        assert_eq!(context.subcategory(), Some("API"));

        assert!(context.observe("## Frontend Driver (PWA)"));
        assert_eq!(context.category(), Some("Frontend Driver (PWA)"));
        assert!(context.subcategory().is_none());
    }

    #[test]
    fn test_subcategory_keeps_category() {
        let mut context = HeadingContext::default();
        context.observe("## Shared Types");
        context.observe("### Infrastructure");
        context.observe("### UI  ");

        assert_eq!(context.category(), Some("Shared Types"));
        assert_eq!(context.subcategory(), Some("UI"));
    }

    #[test]
    fn test_other_heading_levels_ignored() {
        let mut context = HeadingContext::default();
        context.observe("## Backend");
        context.observe("### API");

        assert!(context.observe("# Project TODO"));
        assert!(context.observe("#### Details"));
        assert!(context.observe("##NoSpace"));

        assert_eq!(context.category(), Some("Backend"));
        assert_eq!(context.subcategory(), Some("API"));
    }

    #[test]
    fn test_subcategory_requires_category() {
        let mut context = HeadingContext::default();
        assert!(context.observe("### Orphan"));
        assert!(context.subcategory().is_none());
    }

    #[test]
    fn test_non_heading_lines() {
        let mut context = HeadingContext::default();
        assert!(!context.observe("- [ ] Task"));
        assert!(!context.observe("  ## Indented heading"));
        assert!(!context.observe(""));
        assert_eq!(context, HeadingContext::default());
    }
}
