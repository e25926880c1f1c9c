//! Error types shared across the advisor pipeline.

use std::path::PathBuf;

/// A subject or topic could not be found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Unknown subject: '{0}'")]
    UnknownSubject(String),
    #[error("Unknown topic '{topic}' for subject '{subject}'")]
    UnknownTopic { subject: String, topic: String },
}

/// A confidence score fell outside the rating scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Confidence score {0} is out of range (expected 1..=5)")]
pub struct ScoreError(pub i64);

/// Failures while loading or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Catalog contains no subjects")]
    Empty,
    #[error("Duplicate subject in catalog: '{0}'")]
    DuplicateSubject(String),
    #[error("Subject '{0}' has no topics")]
    NoTopics(String),
    #[error("Duplicate topic '{topic}' in subject '{subject}'")]
    DuplicateTopic { subject: String, topic: String },
    #[error("Topic '{topic}' in subject '{subject}' has no concepts")]
    NoConcepts { subject: String, topic: String },
}

/// The PDF backend failed to produce a document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("PDF backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_display() {
        let subject = LookupError::UnknownSubject("Art".to_string());
        assert_eq!(subject.to_string(), "Unknown subject: 'Art'");

        let topic = LookupError::UnknownTopic {
            subject: "Mathematics".to_string(),
            topic: "Calculus".to_string(),
        };
        assert_eq!(
            topic.to_string(),
            "Unknown topic 'Calculus' for subject 'Mathematics'"
        );
    }

    #[test]
    fn test_score_error_display() {
        assert_eq!(
            ScoreError(7).to_string(),
            "Confidence score 7 is out of range (expected 1..=5)"
        );
    }
}
