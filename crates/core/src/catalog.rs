//! Learning Catalog
//!
//! This module holds the static reference data of the advisor: every subject,
//! its topics, and the ordered list of key concepts for each topic. A catalog
//! is loaded once at startup and is read-only afterwards; there is no API for
//! mutating it.

use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::error::{CatalogError, LookupError};

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.json");

/// A single topic and its ordered key concepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    name: String,
    concepts: Vec<String>,
}

impl Topic {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn concepts(&self) -> &[String] {
        &self.concepts
    }
}

/// A subject area, e.g. "Mathematics", with its topics in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    name: String,
    #[serde(default)]
    icon: String,
    topics: Vec<Topic>,
}

impl Subject {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    /// The selector label shown to users, e.g. "📐 Mathematics".
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    /// Looks up a topic by its exact name.
    pub fn topic(&self, name: &str) -> Result<&Topic, LookupError> {
        self.topics
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| LookupError::UnknownTopic {
                subject: self.name.clone(),
                topic: name.to_string(),
            })
    }

    /// Looks up a topic ignoring ASCII case, as typed on a command line.
    pub fn topic_ignore_case(&self, name: &str) -> Result<&Topic, LookupError> {
        let name = name.trim();
        self.topics
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| LookupError::UnknownTopic {
                subject: self.name.clone(),
                topic: name.to_string(),
            })
    }
}

/// The immutable Subject → Topic → Concepts mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    subjects: Vec<Subject>,
}

impl Catalog {
    /// Loads the catalog that ships with the crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parses and validates a catalog from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        debug!(subjects = catalog.subjects.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Reads a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.subjects.is_empty() {
            return Err(CatalogError::Empty);
        }
        let mut seen_subjects = HashSet::new();
        for subject in &self.subjects {
            if !seen_subjects.insert(subject.name.as_str()) {
                return Err(CatalogError::DuplicateSubject(subject.name.clone()));
            }
            if subject.topics.is_empty() {
                return Err(CatalogError::NoTopics(subject.name.clone()));
            }
            let mut seen_topics = HashSet::new();
            for topic in &subject.topics {
                if !seen_topics.insert(topic.name.as_str()) {
                    return Err(CatalogError::DuplicateTopic {
                        subject: subject.name.clone(),
                        topic: topic.name.clone(),
                    });
                }
                if topic.concepts.is_empty() {
                    return Err(CatalogError::NoConcepts {
                        subject: subject.name.clone(),
                        topic: topic.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    /// Looks up a subject by its exact name.
    pub fn subject(&self, name: &str) -> Result<&Subject, LookupError> {
        self.subjects
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| LookupError::UnknownSubject(name.to_string()))
    }

    /// Returns the ordered concepts for a topic under a subject.
    pub fn concepts(&self, subject: &str, topic: &str) -> Result<&[String], LookupError> {
        Ok(self.subject(subject)?.topic(topic)?.concepts())
    }

    /// Resolves loosely typed input such as "maths" or "computer" to a subject.
    ///
    /// An exact case-insensitive match always wins; otherwise the best fuzzy
    /// match is chosen.
    pub fn resolve_subject(&self, query: &str) -> Result<&Subject, LookupError> {
        let query = query.trim();
        if let Some(subject) = self
            .subjects
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(query))
        {
            return Ok(subject);
        }

        // Fuzzy matches must start at the first letter of the name, so an
        // unrelated word that merely shares scattered letters is rejected.
        let matcher = SkimMatcherV2::default().ignore_case();
        self.subjects
            .iter()
            .filter_map(|s| {
                matcher
                    .fuzzy_indices(&s.name, query)
                    .filter(|(_, indices)| indices.first() == Some(&0))
                    .map(|(score, _)| (score, s))
            })
            .max_by_key(|(score, _)| *score)
            .map(|(score, subject)| {
                debug!(query, subject = %subject.name, score, "Resolved subject by fuzzy match");
                subject
            })
            .ok_or_else(|| LookupError::UnknownSubject(query.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_four_subjects() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<&str> = catalog.subjects().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["Mathematics", "Science", "English", "Computer Science"]
        );
        for subject in catalog.subjects() {
            assert_eq!(subject.topics().len(), 3);
            for topic in subject.topics() {
                assert_eq!(topic.concepts().len(), 3);
            }
        }
    }

    #[test]
    fn test_concept_order_is_preserved() {
        let catalog = Catalog::builtin().unwrap();
        let concepts = catalog.concepts("Mathematics", "Trigonometry").unwrap();
        assert_eq!(concepts, ["Angles", "Identities", "Heights & Distances"]);
    }

    #[test]
    fn test_subject_label_includes_icon() {
        let catalog = Catalog::builtin().unwrap();
        let science = catalog.subject("Science").unwrap();
        assert_eq!(science.label(), "🔬 Science");
    }

    #[test]
    fn test_lookup_misses() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.subject("History").unwrap_err(),
            LookupError::UnknownSubject("History".to_string())
        );
        assert_eq!(
            catalog.concepts("English", "Poetry").unwrap_err(),
            LookupError::UnknownTopic {
                subject: "English".to_string(),
                topic: "Poetry".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_subject_exact_and_fuzzy() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.resolve_subject("english").unwrap().name(), "English");
        assert_eq!(
            catalog.resolve_subject("compsci").unwrap().name(),
            "Computer Science"
        );
        assert_eq!(catalog.resolve_subject("maths").unwrap().name(), "Mathematics");
        assert!(catalog.resolve_subject("zzzz").is_err());
    }

    #[test]
    fn test_resolve_subject_rejects_scattered_matches() {
        let catalog = Catalog::builtin().unwrap();
        // Every letter of "Music" appears in order inside "Computer Science".
        for query in ["Music", "History", "Art", "Chemistry", "ience"] {
            assert!(
                matches!(
                    catalog.resolve_subject(query),
                    Err(LookupError::UnknownSubject(q)) if q == query
                ),
                "{} should not resolve",
                query
            );
        }
        assert_eq!(catalog.resolve_subject("sci").unwrap().name(), "Science");
    }

    #[test]
    fn test_topic_ignore_case() {
        let catalog = Catalog::builtin().unwrap();
        let cs = catalog.subject("Computer Science").unwrap();
        assert_eq!(
            cs.topic_ignore_case("data structures").unwrap().name(),
            "Data Structures"
        );
    }

    #[test]
    fn test_rejects_invalid_catalogs() {
        assert!(matches!(
            Catalog::from_json(r#"{"subjects": []}"#),
            Err(CatalogError::Empty)
        ));
        assert!(matches!(
            Catalog::from_json(r#"{"subjects": [{"name": "Art", "topics": []}]}"#),
            Err(CatalogError::NoTopics(_))
        ));
        let duplicate = r#"{"subjects": [
            {"name": "Art", "topics": [{"name": "Color", "concepts": ["Hue"]}]},
            {"name": "Art", "topics": [{"name": "Form", "concepts": ["Line"]}]}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(duplicate),
            Err(CatalogError::DuplicateSubject(name)) if name == "Art"
        ));
        let no_concepts = r#"{"subjects": [
            {"name": "Art", "topics": [{"name": "Color", "concepts": []}]}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(no_concepts),
            Err(CatalogError::NoConcepts { .. })
        ));
        assert!(matches!(
            Catalog::from_json("not json"),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_custom_catalog_without_icon() {
        let json = r#"{"subjects": [
            {"name": "Art", "topics": [{"name": "Color", "concepts": ["Hue", "Value"]}]}
        ]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let art = catalog.subject("Art").unwrap();
        assert_eq!(art.label(), "Art");
        assert_eq!(art.topic_names().collect::<Vec<_>>(), vec!["Color"]);
    }
}
