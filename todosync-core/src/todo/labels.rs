//! Label classification from heading text
//!
//! Labels come from two fixed decision lists, one for the category and one
//! for the subcategory. Each list is checked top to bottom against the
//! lower-cased heading and only the first matching rule fires.

/// Label used when no rule matches
pub const FALLBACK_LABEL: &str = "todo";

/// One entry of a decision list
struct Rule {
    /// Any of these substrings selects the rule
    patterns: &'static [&'static str],
    /// Labels appended when the rule fires
    labels: &'static [&'static str],
}

const CATEGORY_RULES: &[Rule] = &[
    Rule {
        patterns: &["backend"],
        labels: &["backend"],
    },
    Rule {
        patterns: &["frontend business"],
        labels: &["frontend", "business"],
    },
    Rule {
        patterns: &["frontend driver"],
        labels: &["frontend", "driver"],
    },
    Rule {
        patterns: &["frontend tracking"],
        labels: &["frontend", "tracking"],
    },
    Rule {
        patterns: &["shared types"],
        labels: &["shared", "types"],
    },
    Rule {
        patterns: &["instructions manuelles"],
        labels: &["manual", "priority"],
    },
];

const SUBCATEGORY_RULES: &[Rule] = &[
    Rule {
        patterns: &["signalr"],
        labels: &["signalr"],
    },
    Rule {
        patterns: &["intégrations", "integrations"],
        labels: &["integrations"],
    },
    Rule {
        patterns: &["infrastructure"],
        labels: &["infrastructure"],
    },
    Rule {
        patterns: &["api"],
        labels: &["api"],
    },
    Rule {
        patterns: &["géolocalisation", "geolocation"],
        labels: &["geolocation"],
    },
    Rule {
        patterns: &["ui"],
        labels: &["ui"],
    },
    Rule {
        patterns: &["bug"],
        labels: &["bug"],
    },
];

/// Labels of the first rule matching `heading`, case-insensitively
fn first_match(rules: &[Rule], heading: &str) -> &'static [&'static str] {
    let heading = heading.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| heading.contains(p)))
        .map(|rule| rule.labels)
        .unwrap_or(&[])
}

/// Determine issue labels from a task's heading context
///
/// Without a category the result is always `["todo"]`, even if a
/// subcategory is given. Otherwise at most one category rule and one
/// subcategory rule contribute, in that order, and `["todo"]` is the
/// fallback when neither matched.
pub fn determine_labels(category: Option<&str>, subcategory: Option<&str>) -> Vec<String> {
    let Some(category) = category.filter(|c| !c.is_empty()) else {
        return vec![FALLBACK_LABEL.to_string()];
    };

    let mut labels: Vec<String> = first_match(CATEGORY_RULES, category)
        .iter()
        .map(|l| l.to_string())
        .collect();

    if let Some(subcategory) = subcategory.filter(|s| !s.is_empty()) {
        labels.extend(
            first_match(SUBCATEGORY_RULES, subcategory)
                .iter()
                .map(|l| l.to_string()),
        );
    }

    if labels.is_empty() {
        labels.push(FALLBACK_LABEL.to_string());
    }

    labels
}
