//! Learning Plan Builder
//!
//! Joins a learner's ratings with the catalog to produce the study plan: every
//! topic rated High or Moderate priority, with its key concepts and practice
//! prompts. Low-priority topics are left out entirely.

use serde::Serialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::error::LookupError;
use crate::priority::{Priority, Ratings};
use crate::questions::{QUESTIONS_PER_TOPIC, practice_questions};

/// One topic that needs study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub topic: String,
    /// Always `High` or `Moderate`.
    pub priority: Priority,
    pub concepts: Vec<String>,
    pub practice_questions: [String; QUESTIONS_PER_TOPIC],
}

impl PlanEntry {
    /// Section heading, e.g. "Algebra (High Priority)".
    pub fn heading(&self) -> String {
        format!("{} ({})", self.topic, self.priority.label())
    }
}

/// The ordered study plan for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPlan {
    pub subject: String,
    pub entries: Vec<PlanEntry>,
}

impl LearningPlan {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entry(&self, topic: &str) -> Option<&PlanEntry> {
        self.entries.iter().find(|e| e.topic == topic)
    }

    /// Download name of the rendered document, e.g. "Mathematics_LearningPlan.pdf".
    pub fn file_name(&self) -> String {
        format!("{}_LearningPlan.pdf", self.subject)
    }
}

/// Builds the learning plan for `subject` from the learner's ratings.
///
/// Entries follow the order of `ratings`. Every rated topic must exist under
/// the subject in the catalog, otherwise the whole plan is rejected rather
/// than returned incomplete.
pub fn build_plan(
    catalog: &Catalog,
    subject: &str,
    ratings: &Ratings,
) -> Result<LearningPlan, LookupError> {
    let catalog_subject = catalog.subject(subject).inspect_err(|e| {
        warn!(error = %e, "Plan requested for a subject missing from the catalog");
    })?;

    let mut entries = Vec::new();
    for rating in ratings.iter() {
        let topic = catalog_subject.topic(&rating.topic).inspect_err(|e| {
            warn!(error = %e, "Rated topic missing from the catalog");
        })?;

        let priority = rating.score.priority();
        if !priority.needs_attention() {
            debug!(topic = %rating.topic, "Topic skipped: low priority");
            continue;
        }

        entries.push(PlanEntry {
            topic: topic.name().to_string(),
            priority,
            concepts: topic.concepts().to_vec(),
            practice_questions: practice_questions(topic.name()),
        });
    }

    debug!(subject, entries = entries.len(), "Learning plan built");
    Ok(LearningPlan {
        subject: catalog_subject.name().to_string(),
        entries,
    })
}
