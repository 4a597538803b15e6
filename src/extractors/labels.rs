// src/extractors/labels.rs
use serde::{Deserialize, Serialize};

/// Maps any of a set of substrings to a single label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelRule {
    pub patterns: Vec<String>,
    pub label: String,
}

impl LabelRule {
    pub fn new(patterns: &[&str], label: &str) -> Self {
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            label: label.to_string(),
        }
    }

    fn matches(&self, haystack: &str) -> bool {
        self.patterns.iter().any(|p| haystack.contains(p.as_str()))
    }
}

/// Ordered rules, evaluated first-match-wins. Matching is plain substring
/// search, case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    rules: Vec<LabelRule>,
}

impl LabelTable {
    pub fn new(rules: Vec<LabelRule>) -> Self {
        Self { rules }
    }

    pub fn infer(&self, haystack: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| rule.matches(haystack))
            .map(|rule| rule.label.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regions() -> LabelTable {
        LabelTable::new(vec![
            LabelRule::new(&["US", "American"], "US"),
            LabelRule::new(&["UK", "British"], "UK"),
            LabelRule::new(&["Australia"], "Australia"),
        ])
    }

    #[test]
    fn test_first_rule_wins() {
        let table = regions();
        assert_eq!(table.infer("(British, US) audio"), Some("US"));
        assert_eq!(table.infer("General Australian"), Some("Australia"));
        assert_eq!(table.infer("Received Pronunciation (UK)"), Some("UK"));
    }

    #[test]
    fn test_no_match_and_case_sensitivity() {
        let table = regions();
        assert_eq!(table.infer("Audio"), None);
        assert_eq!(table.infer("american"), None);
        assert_eq!(LabelTable::default().infer("US"), None);
    }
}
