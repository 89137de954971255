//! Word catalog: the fixed, ordered list of translation pairs.
//!
//! Catalogs are loaded once at startup, either the built-in Hebrew/English
//! list or a TOML file, and never mutated afterwards. Order is significant:
//! a user's saved progress is a position in it, so nothing here shuffles.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::{normalize, WordEntry};

/// An ordered, non-empty word list plus the languages it maps between.
#[derive(Debug, Clone)]
pub struct Catalog {
    name: String,
    source_language: String,
    target_language: String,
    words: Vec<WordEntry>,
}

/// Intermediate TOML structure for catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    catalog: TomlCatalogHeader,
    #[serde(default)]
    words: Vec<WordEntry>,
}

#[derive(Debug, Deserialize)]
struct TomlCatalogHeader {
    name: String,
    #[serde(default = "default_source_language")]
    source_language: String,
    #[serde(default = "default_target_language")]
    target_language: String,
}

fn default_source_language() -> String {
    "he".to_string()
}

fn default_target_language() -> String {
    "en-US".to_string()
}

const BUILTIN_WORDS: &[(&str, &str, &str)] = &[
    ("כלב", "Dog", "Animals"),
    ("חתול", "Cat", "Animals"),
    ("בית", "House", "General"),
    ("תפוח", "Apple", "Food"),
    ("שלום", "Hello", "Greetings"),
    ("תודה", "Thank you", "Greetings"),
    ("אבא", "Dad", "Family"),
    ("אמא", "Mom", "Family"),
    ("שמש", "Sun", "Nature"),
    ("מכונית", "Car", "Vehicles"),
    ("ספר", "Book", "School"),
    ("מים", "Water", "Food"),
];

/// A validation warning for a catalog.
#[derive(Debug, Clone)]
pub struct CatalogWarning {
    /// Position of the offending word, if the warning is about one.
    pub index: Option<usize>,
    pub message: String,
}

impl Catalog {
    /// Build a catalog from an explicit word list.
    pub fn new(
        name: &str,
        source_language: &str,
        target_language: &str,
        words: Vec<WordEntry>,
    ) -> Result<Self, CatalogError> {
        if words.is_empty() {
            return Err(CatalogError::Empty(name.to_string()));
        }
        Ok(Self {
            name: name.to_string(),
            source_language: source_language.to_string(),
            target_language: target_language.to_string(),
            words,
        })
    }

    /// The built-in Hebrew → English starter catalog.
    pub fn builtin() -> Self {
        Self {
            name: "Hebrew Basics".to_string(),
            source_language: default_source_language(),
            target_language: default_target_language(),
            words: BUILTIN_WORDS
                .iter()
                .map(|(source, target, category)| WordEntry::new(source, target, category))
                .collect(),
        }
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Parse a catalog from a TOML string (useful for testing).
    pub fn from_toml_str(content: &str, source_path: &Path) -> Result<Self, CatalogError> {
        let parsed: TomlCatalogFile =
            toml::from_str(content).map_err(|source| CatalogError::Parse {
                path: source_path.to_path_buf(),
                source,
            })?;

        Self::new(
            &parsed.catalog.name,
            &parsed.catalog.source_language,
            &parsed.catalog.target_language,
            parsed.words,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_language(&self) -> &str {
        &self.source_language
    }

    /// BCP-47 tag handed to the pronunciation service.
    pub fn target_language(&self) -> &str {
        &self.target_language
    }

    pub fn at(&self, index: usize) -> Option<&WordEntry> {
        self.words.get(index)
    }

    /// Number of words; always at least one.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WordEntry> {
        self.words.iter()
    }

    /// Distinct categories in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.words
            .iter()
            .map(|w| w.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// The position after `index`, wrapping to the start.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.words.len()
    }

    /// Check a catalog for common issues.
    pub fn validate(&self) -> Vec<CatalogWarning> {
        let mut warnings = Vec::new();
        let mut targets = HashSet::new();

        for (i, word) in self.words.iter().enumerate() {
            if word.source.trim().is_empty() {
                warnings.push(CatalogWarning {
                    index: Some(i),
                    message: "source term is blank".into(),
                });
            }
            if word.target.trim().is_empty() {
                warnings.push(CatalogWarning {
                    index: Some(i),
                    message: "target term is blank, no answer can match it".into(),
                });
            } else if !targets.insert(normalize(&word.target)) {
                warnings.push(CatalogWarning {
                    index: Some(i),
                    message: format!("duplicate target term: {}", word.target),
                });
            }
            if word.category.trim().is_empty() {
                warnings.push(CatalogWarning {
                    index: Some(i),
                    message: "no category".into(),
                });
            }
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_ordered() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.at(0).unwrap().target, "Dog");
        assert_eq!(catalog.at(11).unwrap().target, "Water");
        assert!(catalog.at(12).is_none());
        assert_eq!(catalog.target_language(), "en-US");
        assert!(catalog.validate().is_empty());
    }

    #[test]
    fn next_index_wraps() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.next_index(0), 1);
        assert_eq!(catalog.next_index(11), 0);
    }

    #[test]
    fn categories_are_distinct_in_order() {
        let catalog = Catalog::builtin();
        let categories = catalog.categories();
        assert_eq!(&categories[..3], &["Animals", "General", "Food"]);
        assert_eq!(categories.len(), 8);
    }

    #[test]
    fn parse_toml_catalog() {
        let toml_str = r#"
[catalog]
name = "Colors"
source_language = "es"
target_language = "en-GB"

[[words]]
source = "rojo"
target = "Red"
category = "Colors"

[[words]]
source = "azul"
target = "Blue"
"#;
        let catalog = Catalog::from_toml_str(toml_str, Path::new("colors.toml")).unwrap();
        assert_eq!(catalog.name(), "Colors");
        assert_eq!(catalog.source_language(), "es");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.at(1).unwrap().category, "");

        let warnings = catalog.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].index, Some(1));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        let toml_str = "[catalog]\nname = \"Nothing\"\n";
        let err = Catalog::from_toml_str(toml_str, Path::new("empty.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Empty(ref name) if name == "Nothing"));
    }

    #[test]
    fn malformed_toml_reports_path() {
        let err = Catalog::from_toml_str("not [valid", Path::new("bad.toml")).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }

    #[test]
    fn duplicate_targets_warn() {
        let catalog = Catalog::new(
            "Dupes",
            "he",
            "en-US",
            vec![
                WordEntry::new("אמא", "Mom", "Family"),
                WordEntry::new("אמא", " mom ", "Family"),
            ],
        )
        .unwrap();
        let warnings = catalog.validate();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].message.contains("duplicate"));
    }

    #[test]
    fn load_missing_file_fails() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
    }
}
