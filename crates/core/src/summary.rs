//! Analysis Summary Views
//!
//! Projects an [`Analysis`] into the three views shown after a run: the gap
//! analysis list, the per-topic plan panels, and the confidence bar chart.
//! Nothing new is derived here; the views only reshape existing data.

use serde::Serialize;
use std::fmt;

use crate::analysis::Analysis;
use crate::priority::{ConfidenceScore, Priority};

/// Message shown in place of the plan panels when nothing needs study.
pub const NO_GAPS_MESSAGE: &str = "Excellent! No major learning gaps detected.";

/// Sequential blue scale, lightest for the lowest score.
const BLUES: [&str; 5] = ["#c6dbef", "#9ecae1", "#6baed6", "#3182bd", "#08519c"];

/// Chart color for a confidence score.
pub fn score_color(score: ConfidenceScore) -> &'static str {
    let index = usize::from(score.get() - ConfidenceScore::MIN);
    BLUES[index.min(BLUES.len() - 1)]
}

/// One row of the gap analysis list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapRow {
    pub topic: String,
    pub priority: Priority,
    pub label: &'static str,
    pub score: u8,
    /// Score as a fraction of the scale, for a progress indicator.
    pub progress: f32,
}

/// One collapsible panel of the learning plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanPanel {
    pub title: String,
    pub topic: String,
    pub priority: Priority,
    pub concepts: Vec<String>,
    pub practice_questions: Vec<String>,
}

/// One bar of the confidence chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub topic: String,
    pub confidence: u8,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    pub subject: String,
    pub gaps: Vec<GapRow>,
    pub panels: Vec<PlanPanel>,
    /// Set only when `panels` is empty.
    pub message: Option<&'static str>,
    pub chart: Vec<ChartBar>,
}

/// Builds the display views for an analysis.
pub fn summarize(analysis: &Analysis) -> AnalysisSummary {
    let gaps = analysis
        .priorities
        .iter()
        .filter_map(|tp| {
            let score = analysis.ratings.get(&tp.topic)?;
            Some(GapRow {
                topic: tp.topic.clone(),
                priority: tp.priority,
                label: tp.priority.label(),
                score: score.get(),
                progress: score.fraction(),
            })
        })
        .collect();

    let panels: Vec<PlanPanel> = analysis
        .plan
        .entries
        .iter()
        .map(|entry| PlanPanel {
            title: entry.heading(),
            topic: entry.topic.clone(),
            priority: entry.priority,
            concepts: entry.concepts.clone(),
            practice_questions: entry.practice_questions.to_vec(),
        })
        .collect();

    let message = panels.is_empty().then_some(NO_GAPS_MESSAGE);

    let chart = analysis
        .ratings
        .iter()
        .map(|rating| ChartBar {
            topic: rating.topic.clone(),
            confidence: rating.score.get(),
            color: score_color(rating.score),
        })
        .collect();

    AnalysisSummary {
        subject: analysis.subject.clone(),
        gaps,
        panels,
        message,
        chart,
    }
}

const BAR_WIDTH: usize = 20;

/// Plain-text rendering for terminals.
impl fmt::Display for AnalysisSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Learning Gap Analysis - {}", self.subject)?;
        let width = self.gaps.iter().map(|g| g.topic.chars().count()).max().unwrap_or(0);
        for gap in &self.gaps {
            let filled = (gap.progress * BAR_WIDTH as f32).round() as usize;
            writeln!(
                f,
                "  {:<width$}  [{}{}] {}/{}  {}",
                gap.topic,
                "#".repeat(filled),
                "-".repeat(BAR_WIDTH.saturating_sub(filled)),
                gap.score,
                ConfidenceScore::MAX,
                gap.label,
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Learning Plan")?;
        if let Some(message) = self.message {
            writeln!(f, "  {}", message)?;
        }
        for panel in &self.panels {
            writeln!(f, "  {}", panel.title)?;
            writeln!(f, "    Key Concepts:")?;
            for concept in &panel.concepts {
                writeln!(f, "      • {}", concept)?;
            }
            writeln!(f, "    Practice Questions:")?;
            for question in &panel.practice_questions {
                writeln!(f, "      • {}", question)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{AnalysisRequest, analyze};
    use crate::catalog::Catalog;
    use crate::priority::Ratings;

    fn run(subject: &str, pairs: &[(&str, i64)]) -> AnalysisSummary {
        let catalog = Catalog::builtin().unwrap();
        let ratings: Ratings = pairs
            .iter()
            .map(|(t, n)| (*t, ConfidenceScore::new(*n).unwrap()))
            .collect();
        summarize(&analyze(&catalog, &AnalysisRequest::new(subject, ratings)).unwrap())
    }

    #[test]
    fn test_views_for_mixed_ratings() {
        let summary = run(
            "Mathematics",
            &[("Algebra", 1), ("Trigonometry", 3), ("Geometry", 5)],
        );

        let labels: Vec<(&str, &str)> = summary
            .gaps
            .iter()
            .map(|g| (g.topic.as_str(), g.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("Algebra", "High Priority"),
                ("Trigonometry", "Moderate Priority"),
                ("Geometry", "Low Priority"),
            ]
        );
        assert!((summary.gaps[2].progress - 1.0).abs() < f32::EPSILON);

        assert_eq!(summary.panels.len(), 2);
        assert_eq!(summary.panels[0].title, "Algebra (High Priority)");
        assert_eq!(summary.panels[1].practice_questions.len(), 3);
        assert_eq!(summary.message, None);

        assert_eq!(summary.chart.len(), 3);
        assert_eq!(summary.chart[0].confidence, 1);
        assert_eq!(summary.chart[0].color, "#c6dbef");
        assert_eq!(summary.chart[2].color, "#08519c");
    }

    #[test]
    fn test_empty_plan_shows_message() {
        let summary = run("English", &[("Grammar", 4), ("Vocabulary", 5), ("Writing", 5)]);
        assert!(summary.panels.is_empty());
        assert_eq!(summary.message, Some(NO_GAPS_MESSAGE));
        assert_eq!(summary.gaps.len(), 3);
    }

    #[test]
    fn test_score_colors_darken_with_confidence() {
        let colors: Vec<&str> = (1..=5)
            .map(|n| score_color(ConfidenceScore::new(n).unwrap()))
            .collect();
        assert_eq!(colors, BLUES.to_vec());
    }

    #[test]
    fn test_text_rendering() {
        let text = run("Science", &[("Physics", 2), ("Chemistry", 5)]).to_string();
        assert!(text.starts_with("Learning Gap Analysis - Science"));
        assert!(text.contains("Physics"));
        assert!(text.contains("[########------------] 2/5  High Priority"));
        assert!(text.contains("Physics (High Priority)"));
        assert!(text.contains("Explain the basic idea of Physics."));
        assert!(!text.contains("Chemistry (Low Priority)"));
    }
}
