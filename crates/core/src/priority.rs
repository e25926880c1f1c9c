//! Confidence Ratings and Priority Classification
//!
//! A learner rates each topic on a 1–5 confidence scale. The classifier turns
//! every score into a study priority using fixed thresholds.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::ScoreError;

/// Study urgency derived from a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Moderate,
    Low,
}

impl Priority {
    /// Maps a confidence score to a priority: 1–2 High, 3 Moderate, 4+ Low.
    ///
    /// Total over all integers; out-of-range scores fall into the nearest band.
    pub fn classify(score: u8) -> Self {
        match score {
            0..=2 => Priority::High,
            3 => Priority::Moderate,
            _ => Priority::Low,
        }
    }

    /// Human readable label, e.g. "High Priority".
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High Priority",
            Priority::Moderate => "Moderate Priority",
            Priority::Low => "Low Priority",
        }
    }

    /// Whether a topic with this priority belongs in the learning plan.
    pub fn needs_attention(&self) -> bool {
        !matches!(self, Priority::Low)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated self-assessment score in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ConfidenceScore(u8);

impl ConfidenceScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    /// Starting position of a rating slider.
    pub const DEFAULT: ConfidenceScore = ConfidenceScore(3);
    pub const HINT: &'static str = "1 = Very Weak, 5 = Very Strong";

    pub fn new(score: i64) -> Result<Self, ScoreError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&score) {
            Ok(Self(score as u8))
        } else {
            Err(ScoreError(score))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Fraction of the full scale, used for progress indicators.
    pub fn fraction(&self) -> f32 {
        f32::from(self.0) / f32::from(Self::MAX)
    }

    pub fn priority(&self) -> Priority {
        Priority::classify(self.0)
    }
}

impl<'de> Deserialize<'de> for ConfidenceScore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        ConfidenceScore::new(raw).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ConfidenceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One topic's confidence rating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub topic: String,
    pub score: ConfidenceScore,
}

/// Topic → score mapping that remembers the order topics were first rated in.
///
/// Rating a topic again replaces its score without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ratings {
    entries: Vec<Rating>,
}

impl Ratings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, topic: impl Into<String>, score: ConfidenceScore) {
        let topic = topic.into();
        match self.entries.iter_mut().find(|r| r.topic == topic) {
            Some(existing) => existing.score = score,
            None => self.entries.push(Rating { topic, score }),
        }
    }

    pub fn get(&self, topic: &str) -> Option<ConfidenceScore> {
        self.entries
            .iter()
            .find(|r| r.topic == topic)
            .map(|r| r.score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rating> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ConfidenceScore)> for Ratings {
    fn from_iter<I: IntoIterator<Item = (S, ConfidenceScore)>>(iter: I) -> Self {
        let mut ratings = Ratings::new();
        for (topic, score) in iter {
            ratings.insert(topic, score);
        }
        ratings
    }
}

/// A topic together with its derived priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicPriority {
    pub topic: String,
    pub priority: Priority,
}

/// Classifies every rated topic, keeping the rating order.
pub fn evaluate(ratings: &Ratings) -> Vec<TopicPriority> {
    ratings
        .iter()
        .map(|rating| {
            let priority = rating.score.priority();
            debug!(topic = %rating.topic, score = rating.score.get(), %priority, "Classified topic");
            TopicPriority {
                topic: rating.topic.clone(),
                priority,
            }
        })
        .collect()
}
