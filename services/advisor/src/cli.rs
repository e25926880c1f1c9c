//! CLI argument parsing for the advisor

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "advisor")]
#[command(author, version, about = "Confidence-based study plans", long_about = None)]
pub struct Cli {
    /// JSON catalog to use instead of the built-in one
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List subjects and their topics
    Subjects,

    /// Rate topics and build a learning plan
    Analyze {
        /// Subject to analyze (case-insensitive, fuzzy matched)
        #[arg(short, long)]
        subject: String,

        /// Topic rating as TOPIC=SCORE, repeatable
        #[arg(short, long = "rate", value_parser = parse_rating)]
        ratings: Vec<(String, i64)>,

        /// Score for topics not rated explicitly
        #[arg(short, long, default_value = "3")]
        default_score: i64,

        /// Write the PDF plan to this file or directory
        #[arg(long)]
        pdf: Option<PathBuf>,

        /// Print the document lines after the summary
        #[arg(long)]
        outline: bool,
    },
}

/// Parses `TOPIC=SCORE`.
pub fn parse_rating(raw: &str) -> Result<(String, i64), String> {
    let (topic, score) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected TOPIC=SCORE, got '{}'", raw))?;
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(format!("missing topic in '{}'", raw));
    }
    let score = score
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("score in '{}' is not a number", raw))?;
    Ok((topic.to_string(), score))
}
