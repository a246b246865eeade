//! Prints localized messages for the configured output language.
//!
//! Usage:
//!   cargo run -- ClassHierarchy InheritsList   # Selected keys
//!   cargo run -- --all --count 5               # Every key, lists with 5 entries
//!   OUTPUT_LANGUAGE=german cargo run -- --all  # Another language
//!
//! Optional environment variables:
//! - OUTPUT_LANGUAGE (defaults to english)
//! - OPTIMIZE_OUTPUT_FOR_C, EXTRACT_ALL (YES/NO, default NO)
//! - DOT_IMAGE_FORMAT (defaults to png)
//! - TRANSLATIONS_DIR (override tables named <language>.json)

use anyhow::{bail, Context, Result};
use doc_translator::config::Config;
use doc_translator::i18n::{self, MessageKey, TranslationMetrics};
use tracing::{info, warn};

/// Stand-in values for the arguments a message may take.
const SAMPLE_ARGS: &[(&str, &str)] = &[
    ("name", "<name>"),
    ("date", "<date>"),
    ("members", "<members>"),
    ("what", "<what>"),
    ("number", "<number>"),
];

fn main() -> Result<()> {
    // Load .env file (ignored when not present)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("doc_translator=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let all = args.iter().any(|a| a == "--all");

    let count_at = args.iter().position(|a| a == "--count");
    let count: usize = match count_at {
        Some(index) => args
            .get(index + 1)
            .context("--count needs a value")?
            .parse()
            .context("--count must be a non-negative number")?,
        None => 3,
    };

    let keys: Vec<MessageKey> = if all {
        MessageKey::ALL.to_vec()
    } else {
        args.iter()
            .enumerate()
            .filter(|(index, arg)| !arg.starts_with("--") && count_at.map_or(true, |c| c + 1 != *index))
            .map(|(_, arg)| arg.parse())
            .collect::<Result<_, _>>()?
    };

    if keys.is_empty() {
        bail!("Usage: doc-translator [--all] [--count N] [KEY ...]");
    }

    // Load configuration from environment
    let config = Config::from_env()?;
    let translator = i18n::install(config.translator()?);
    if let Some(message) = translator.update_needed_message() {
        warn!("{}", message.trim_end());
    }

    let mut base = config.format_params();
    for (name, value) in SAMPLE_ARGS {
        base = base.arg(*name, *value);
    }

    for key in keys {
        let text = if key == MessageKey::DateTime {
            translator.date_time(chrono::Local::now().naive_local(), true)?
        } else {
            let params = if key.is_list() {
                base.clone().count(count)
            } else if key.is_word() {
                base.clone().first_capital(true)
            } else {
                base.clone()
            };
            translator.localize(key, &params)?
        };
        println!("{}\t{}", key, text);
    }

    let report = TranslationMetrics::global().report();
    info!(
        "{} lookups, {} served by English ({:.1}%)",
        report.lookups, report.fallbacks, report.fallback_rate
    );

    Ok(())
}
