//! Subcommand implementations. Each returns the text to print so it can be
//! tested without capturing stdout.

use advisor_core::{
    AnalysisRequest, Catalog, ConfidenceScore, Ratings, analyze,
    document::{render_document, render_outline},
    summarize,
};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

/// Loads the catalog from `path`, or the built-in one.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::builtin().context("Failed to load built-in catalog"),
    }
}

pub fn subjects(catalog: &Catalog) -> String {
    let mut out = String::new();
    for subject in catalog.subjects() {
        out.push_str(&format!("{}\n", subject.label()));
        for topic in subject.topics() {
            out.push_str(&format!(
                "  - {} ({})\n",
                topic.name(),
                topic.concepts().join(", ")
            ));
        }
    }
    out.push_str(&format!("\nRate each topic {}.\n", ConfidenceScore::HINT));
    out
}

pub struct AnalyzeOptions<'a> {
    pub subject: &'a str,
    pub ratings: &'a [(String, i64)],
    pub default_score: i64,
    pub pdf: Option<&'a Path>,
    pub outline: bool,
}

/// Rates every topic of the subject, runs the analysis and renders it.
///
/// Topics without an explicit rating get `default_score`, the same starting
/// point a rating slider has.
pub fn analyze_subject(catalog: &Catalog, options: &AnalyzeOptions<'_>) -> Result<String> {
    let subject = catalog.resolve_subject(options.subject)?;
    let default_score = ConfidenceScore::new(options.default_score)
        .context("Invalid --default-score")?;

    let mut explicit = Ratings::new();
    for (topic, score) in options.ratings {
        let topic = subject.topic_ignore_case(topic)?;
        let score = ConfidenceScore::new(*score)
            .with_context(|| format!("Invalid rating for '{}'", topic.name()))?;
        explicit.insert(topic.name(), score);
    }

    let ratings: Ratings = subject
        .topic_names()
        .map(|name| (name, explicit.get(name).unwrap_or(default_score)))
        .collect();

    let analysis = analyze(catalog, &AnalysisRequest::new(subject.name(), ratings))?;
    let mut out = String::new();
    if !subject.name().eq_ignore_ascii_case(options.subject.trim()) {
        out.push_str(&format!(
            "Using subject '{}' for '{}'\n\n",
            subject.name(),
            options.subject.trim()
        ));
    }
    out.push_str(&summarize(&analysis).to_string());

    if options.outline {
        out.push_str("\nDocument\n");
        for line in render_outline(&analysis.plan) {
            out.push_str(&format!("  {}\n", line));
        }
    }

    if let Some(target) = options.pdf {
        let path = pdf_path(target, &analysis.plan.file_name());
        let bytes = render_document(&analysis.plan)?;
        std::fs::write(&path, &bytes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = bytes.len(), "Wrote learning plan");
        out.push_str(&format!("\nSaved learning plan to {}\n", path.display()));
    }

    Ok(out)
}

/// A directory target receives the default file name.
fn pdf_path(target: &Path, file_name: &str) -> PathBuf {
    if target.is_dir() {
        target.join(file_name)
    } else {
        target.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_core::LookupError;

    fn options<'a>(subject: &'a str, ratings: &'a [(String, i64)]) -> AnalyzeOptions<'a> {
        AnalyzeOptions {
            subject,
            ratings,
            default_score: 3,
            pdf: None,
            outline: false,
        }
    }

    fn rated(pairs: &[(&str, i64)]) -> Vec<(String, i64)> {
        pairs.iter().map(|(t, s)| (t.to_string(), *s)).collect()
    }

    #[test]
    fn test_subjects_lists_catalog() {
        let out = subjects(&Catalog::builtin().unwrap());
        assert!(out.contains("📐 Mathematics"));
        assert!(out.contains("  - Chemistry (Atoms, Reactions, Acids & Bases)"));
        assert!(out.contains("1 = Very Weak, 5 = Very Strong"));
    }

    #[test]
    fn test_analyze_fills_unrated_topics_with_default() {
        let catalog = Catalog::builtin().unwrap();
        let ratings = rated(&[("algebra", 1), ("Geometry", 5)]);
        let out = analyze_subject(&catalog, &options("mathematics", &ratings)).unwrap();

        assert!(out.contains("Algebra (High Priority)"));
        // Trigonometry was not rated and defaults to 3.
        assert!(out.contains("Trigonometry (Moderate Priority)"));
        assert!(!out.contains("Geometry (Low Priority)"));
    }

    #[test]
    fn test_analyze_reports_fuzzy_subject_choice() {
        let catalog = Catalog::builtin().unwrap();
        let out = analyze_subject(&catalog, &options("compsci", &[])).unwrap();
        assert!(out.starts_with("Using subject 'Computer Science' for 'compsci'\n"));

        let out = analyze_subject(&catalog, &options("english", &[])).unwrap();
        assert!(!out.contains("Using subject"));

        let err = analyze_subject(&catalog, &options("Music", &[])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LookupError>(),
            Some(LookupError::UnknownSubject(_))
        ));
    }

    #[test]
    fn test_analyze_all_strong_reports_no_gaps() {
        let catalog = Catalog::builtin().unwrap();
        let mut opts = options("Science", &[]);
        opts.default_score = 5;
        opts.outline = true;
        let out = analyze_subject(&catalog, &opts).unwrap();
        assert!(out.contains("Excellent! No major learning gaps detected."));
        assert!(out.contains("Document\n  Smart Learning Advisor - Science\n"));
        assert!(!out.contains("Key Concepts:"));
    }

    #[test]
    fn test_analyze_rejects_unknown_topic_and_bad_scores() {
        let catalog = Catalog::builtin().unwrap();
        let unknown = rated(&[("Poetry", 2)]);
        let err = analyze_subject(&catalog, &options("English", &unknown)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LookupError>(),
            Some(LookupError::UnknownTopic { .. })
        ));

        let bad = rated(&[("Grammar", 0)]);
        assert!(analyze_subject(&catalog, &options("English", &bad)).is_err());

        let mut opts = options("English", &[]);
        opts.default_score = 6;
        assert!(analyze_subject(&catalog, &opts).is_err());
    }

    #[test]
    fn test_analyze_writes_pdf_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = Catalog::builtin().unwrap();
        let ratings = rated(&[("Loops", 1)]);
        let mut opts = options("Computer Science", &ratings);
        // "Loops" is a concept, not a topic.
        assert!(analyze_subject(&catalog, &opts).is_err());

        let ratings = rated(&[("Algorithms", 1)]);
        opts.ratings = &ratings;
        opts.pdf = Some(dir.path());
        let out = analyze_subject(&catalog, &opts).unwrap();

        let expected = dir.path().join("Computer Science_LearningPlan.pdf");
        assert!(out.contains("Saved learning plan to"));
        let bytes = std::fs::read(&expected).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_analyze_writes_pdf_to_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("plan.pdf");
        let catalog = Catalog::builtin().unwrap();
        let mut opts = options("English", &[]);
        opts.pdf = Some(&target);
        analyze_subject(&catalog, &opts).unwrap();
        assert!(target.exists());
    }
}
