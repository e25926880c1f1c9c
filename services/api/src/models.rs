//! API Models
//!
//! Request and response bodies of the HTTP API. These mirror the core types
//! and carry the `utoipa` schema information used for the OpenAPI document.

use advisor_core::{
    ConfidenceScore, Priority, Subject, Topic,
    summary::{AnalysisSummary, ChartBar, GapRow, PlanPanel},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriorityLevel {
    High,
    Moderate,
    Low,
}

impl From<Priority> for PriorityLevel {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::High => PriorityLevel::High,
            Priority::Moderate => PriorityLevel::Moderate,
            Priority::Low => PriorityLevel::Low,
        }
    }
}

/// Bounds and starting value of the confidence sliders.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct RatingScale {
    #[schema(example = 1)]
    pub min: u8,
    #[schema(example = 5)]
    pub max: u8,
    #[schema(example = 3)]
    pub default: u8,
    #[schema(example = "1 = Very Weak, 5 = Very Strong")]
    pub hint: String,
}

impl Default for RatingScale {
    fn default() -> Self {
        Self {
            min: ConfidenceScore::MIN,
            max: ConfidenceScore::MAX,
            default: ConfidenceScore::DEFAULT.get(),
            hint: ConfidenceScore::HINT.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SubjectSummary {
    #[schema(example = "Mathematics")]
    pub name: String,
    #[schema(example = "📐")]
    pub icon: String,
    #[schema(example = "📐 Mathematics")]
    pub label: String,
    pub topics: Vec<String>,
}

impl From<&Subject> for SubjectSummary {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name().to_string(),
            icon: subject.icon().to_string(),
            label: subject.label(),
            topics: subject.topic_names().map(str::to_string).collect(),
        }
    }
}

/// The subject selector: every subject plus the rating scale.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SubjectList {
    #[schema(example = "Smart Learning Advisor")]
    pub title: String,
    pub subjects: Vec<SubjectSummary>,
    pub scale: RatingScale,
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct TopicDetail {
    #[schema(example = "Algebra")]
    pub name: String,
    pub concepts: Vec<String>,
}

impl From<&Topic> for TopicDetail {
    fn from(topic: &Topic) -> Self {
        Self {
            name: topic.name().to_string(),
            concepts: topic.concepts().to_vec(),
        }
    }
}

#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SubjectDetail {
    #[schema(example = "Mathematics")]
    pub name: String,
    pub icon: String,
    pub label: String,
    pub topics: Vec<TopicDetail>,
}

impl From<&Subject> for SubjectDetail {
    fn from(subject: &Subject) -> Self {
        Self {
            name: subject.name().to_string(),
            icon: subject.icon().to_string(),
            label: subject.label(),
            topics: subject.topics().iter().map(TopicDetail::from).collect(),
        }
    }
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct RatingInput {
    #[schema(example = "Algebra")]
    pub topic: String,
    /// Confidence from 1 (very weak) to 5 (very strong).
    #[schema(example = 2)]
    pub score: i64,
}

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone)]
pub struct AnalysisPayload {
    #[schema(example = "Mathematics")]
    pub subject: String,
    pub ratings: Vec<RatingInput>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct GapView {
    pub topic: String,
    pub priority: PriorityLevel,
    #[schema(example = "High Priority")]
    pub label: String,
    pub score: u8,
    #[schema(example = 0.4)]
    pub progress: f32,
}

impl From<&GapRow> for GapView {
    fn from(row: &GapRow) -> Self {
        Self {
            topic: row.topic.clone(),
            priority: row.priority.into(),
            label: row.label.to_string(),
            score: row.score,
            progress: row.progress,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PanelView {
    #[schema(example = "Algebra (High Priority)")]
    pub title: String,
    pub topic: String,
    pub priority: PriorityLevel,
    pub concepts: Vec<String>,
    pub practice_questions: Vec<String>,
}

impl From<&PlanPanel> for PanelView {
    fn from(panel: &PlanPanel) -> Self {
        Self {
            title: panel.title.clone(),
            topic: panel.topic.clone(),
            priority: panel.priority.into(),
            concepts: panel.concepts.clone(),
            practice_questions: panel.practice_questions.clone(),
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct BarView {
    pub topic: String,
    pub confidence: u8,
    #[schema(example = "#6baed6")]
    pub color: String,
}

impl From<&ChartBar> for BarView {
    fn from(bar: &ChartBar) -> Self {
        Self {
            topic: bar.topic.clone(),
            confidence: bar.confidence,
            color: bar.color.to_string(),
        }
    }
}

/// The three result views of one analysis.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct AnalysisResponse {
    #[schema(example = "Mathematics")]
    pub subject: String,
    pub gaps: Vec<GapView>,
    pub plan: Vec<PanelView>,
    /// Present when no topic needs study.
    pub message: Option<String>,
    pub chart: Vec<BarView>,
    #[schema(example = "Mathematics_LearningPlan.pdf")]
    pub document_name: String,
}

impl AnalysisResponse {
    pub fn new(summary: &AnalysisSummary, document_name: String) -> Self {
        Self {
            subject: summary.subject.clone(),
            gaps: summary.gaps.iter().map(GapView::from).collect(),
            plan: summary.panels.iter().map(PanelView::from).collect(),
            message: summary.message.map(str::to_string),
            chart: summary.chart.iter().map(BarView::from).collect(),
            document_name,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug)]
pub struct ErrorResponse {
    pub message: String,
}
