//! Core data model types for flashword.
//!
//! `WordEntry` is static catalog data; `UserRecord` is the per-user state
//! that the session store persists.

use serde::{Deserialize, Serialize};

/// A single translation pair in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The word shown to the learner.
    pub source: String,
    /// The expected translation.
    pub target: String,
    /// Grouping label (e.g. "Animals").
    #[serde(default)]
    pub category: String,
}

impl WordEntry {
    pub fn new(source: &str, target: &str, category: &str) -> Self {
        Self {
            source: source.to_string(),
            target: target.to_string(),
            category: category.to_string(),
        }
    }

    /// Whether `answer` matches the target after trimming and lower-casing both.
    pub fn accepts(&self, answer: &str) -> bool {
        normalize(answer) == normalize(&self.target)
    }
}

/// Persisted state for one user.
///
/// Field names on the wire are kept stable; records written before points
/// existed load with `points = 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Name as first typed, original casing preserved.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Catalog position the user will see next.
    #[serde(rename = "currentWordIndex", default)]
    pub progress_index: usize,
    /// Point total; never negative.
    #[serde(default)]
    pub points: u32,
}

impl UserRecord {
    /// A fresh record at the start of the catalog with no points.
    pub fn new(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            progress_index: 0,
            points: 0,
        }
    }
}

/// Trim and lower-case, the comparison form for usernames and answers.
pub fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ignores_case_and_surrounding_whitespace() {
        let word = WordEntry::new("כלב", "Dog", "Animals");
        assert!(word.accepts("  Dog "));
        assert!(word.accepts("DOG"));
        assert!(!word.accepts("dogs"));
        assert!(!word.accepts("d og"));
    }

    #[test]
    fn blank_answer_never_matches() {
        let word = WordEntry::new("תודה", "Thank you", "Greetings");
        assert!(!word.accepts(""));
        assert!(!word.accepts("   "));
        assert!(word.accepts("thank you"));
    }

    #[test]
    fn legacy_record_without_points_defaults_to_zero() {
        let json = r#"{"name":"Noa","currentWordIndex":3}"#;
        let record: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name, "Noa");
        assert_eq!(record.progress_index, 3);
        assert_eq!(record.points, 0);
    }

    #[test]
    fn record_uses_stable_field_names() {
        let record = UserRecord {
            display_name: "Maya".into(),
            progress_index: 1,
            points: 10,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["name"], "Maya");
        assert_eq!(value["currentWordIndex"], 1);
        assert_eq!(value["points"], 10);
    }
}
