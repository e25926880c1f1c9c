//! Smart Learning Advisor core.
//!
//! Pure, synchronous building blocks shared by the HTTP service and the CLI:
//! the static catalog, confidence classification, plan building, the
//! document renderer, and the summary views.

pub mod analysis;
pub mod catalog;
pub mod document;
pub mod error;
pub mod plan;
pub mod priority;
pub mod questions;
pub mod summary;

pub use analysis::{Analysis, AnalysisRequest, analyze};
pub use catalog::{Catalog, Subject, Topic};
pub use error::{CatalogError, DocumentError, LookupError, ScoreError};
pub use plan::{LearningPlan, PlanEntry, build_plan};
pub use priority::{ConfidenceScore, Priority, Rating, Ratings, TopicPriority, evaluate};
pub use questions::practice_questions;
pub use summary::{AnalysisSummary, summarize};
