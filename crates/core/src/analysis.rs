//! Analysis Requests
//!
//! A learner's subject choice and ratings travel through the pipeline as an
//! explicit request value instead of ambient session state, and come back as
//! a single `Analysis` holding everything the renderers need.

use serde::Serialize;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::LookupError;
use crate::plan::{LearningPlan, build_plan};
use crate::priority::{Ratings, TopicPriority, evaluate};

/// Input of one "analyze learning gaps" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub subject: String,
    pub ratings: Ratings,
}

impl AnalysisRequest {
    pub fn new(subject: impl Into<String>, ratings: Ratings) -> Self {
        Self {
            subject: subject.into(),
            ratings,
        }
    }
}

/// Result of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub subject: String,
    pub ratings: Ratings,
    pub priorities: Vec<TopicPriority>,
    pub plan: LearningPlan,
}

/// Runs the full classify-then-plan pipeline for one request.
pub fn analyze(catalog: &Catalog, request: &AnalysisRequest) -> Result<Analysis, LookupError> {
    let priorities = evaluate(&request.ratings);
    let plan = build_plan(catalog, &request.subject, &request.ratings)?;
    info!(
        subject = %plan.subject,
        rated = request.ratings.len(),
        planned = plan.len(),
        "Analysis complete"
    );
    Ok(Analysis {
        subject: plan.subject.clone(),
        ratings: request.ratings.clone(),
        priorities,
        plan,
    })
}
