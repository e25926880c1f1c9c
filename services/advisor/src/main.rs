use advisor_cli::cli::{Cli, Command};
use advisor_cli::commands::{self, AnalyzeOptions};
use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let catalog = commands::load_catalog(cli.catalog.as_deref())?;
    debug!(subjects = catalog.subjects().len(), "Catalog loaded");

    let output = match &cli.command {
        Command::Subjects => commands::subjects(&catalog),
        Command::Analyze {
            subject,
            ratings,
            default_score,
            pdf,
            outline,
        } => commands::analyze_subject(
            &catalog,
            &AnalyzeOptions {
                subject,
                ratings,
                default_score: *default_score,
                pdf: pdf.as_deref(),
                outline: *outline,
            },
        )?,
    };
    print!("{}", output);

    Ok(())
}
