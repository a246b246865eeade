//! Coverage binary - reports translation completeness and validates every table
//!
//! Usage:
//!   cargo run --bin coverage               # JSON report on stdout
//!   cargo run --bin coverage -- --strict   # Also fail on validation warnings
//!
//! Exits with an error when any table has validation errors.

use anyhow::{bail, Context, Result};
use doc_translator::i18n::{CoverageReport, TranslationValidator};
use tracing::{info, warn};

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("doc_translator=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let strict = std::env::args().any(|a| a == "--strict");

    let report = CoverageReport::build().context("Failed to build coverage report")?;
    println!(
        "{}",
        serde_json::to_string_pretty(&report).context("Failed to serialize coverage report")?
    );

    let validation = TranslationValidator::validate_all().context("Failed to validate tables")?;

    let mut failed = Vec::new();
    for (language, result) in &validation {
        for error in &result.errors {
            warn!("{}: {}", language, error);
        }
        if strict {
            for warning in &result.warnings {
                warn!("{}: {}", language, warning);
            }
        }

        if result.has_errors() || (strict && result.has_warnings()) {
            failed.push(*language);
        }
    }

    for coverage in &report.languages {
        info!(
            "{}: {}/{} ({:.1}%)",
            coverage.language, coverage.translated, coverage.total, coverage.coverage_percent
        );
    }

    if !failed.is_empty() {
        bail!("Validation failed for: {}", failed.join(", "));
    }

    info!("All {} tables passed validation", validation.len());
    Ok(())
}
