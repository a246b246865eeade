use crate::i18n::{FormatParams, Language, LanguageTable, Translator};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    // Output
    pub output_language: String,

    // Generator switches that change wording
    pub optimize_c: bool,
    pub extract_all: bool,
    pub dot_image_format: String,

    // Overrides (<id>.json per language)
    pub translations_dir: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            output_language: std::env::var("OUTPUT_LANGUAGE")
                .unwrap_or_else(|_| "english".to_string()),

            optimize_c: std::env::var("OPTIMIZE_OUTPUT_FOR_C")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            extract_all: std::env::var("EXTRACT_ALL")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(false),
            dot_image_format: std::env::var("DOT_IMAGE_FORMAT")
                .unwrap_or_else(|_| "png".to_string()),

            translations_dir: std::env::var("TRANSLATIONS_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }

    /// Parameters carrying the wording switches and the image format.
    pub fn format_params(&self) -> FormatParams {
        FormatParams::new()
            .optimize_c(self.optimize_c)
            .extract_all(self.extract_all)
            .format(self.dot_image_format.as_str())
    }

    /// Translator for the configured language, with any override table applied.
    pub fn translator(&self) -> Result<Translator> {
        let language = match Language::from_id(&self.output_language) {
            Ok(language) => language,
            Err(_) => {
                warn!(
                    "Unknown OUTPUT_LANGUAGE '{}', using English",
                    self.output_language
                );
                Language::canonical()
            }
        };

        if let Some(dir) = &self.translations_dir {
            let path = dir.join(format!("{}.json", language.id()));
            if path.is_file() {
                let table = LanguageTable::from_path(&path).with_context(|| {
                    format!("Failed to load translation override {}", path.display())
                })?;
                info!("Loaded {} messages from {}", table.len(), path.display());
                if Language::from_id(&table.language).ok() != Some(language) {
                    warn!(
                        "{} declares language '{}', using it for {}",
                        path.display(),
                        table.language,
                        language
                    );
                }
                return Translator::with_table(language, table)
                    .context("Failed to build translator from override");
            }
            debug!("No override at {}", path.display());
        }

        Translator::new(language)
            .with_context(|| format!("Failed to build translator for {}", language))
    }
}

/// YES/NO style switch; `None` when the value is not recognized.
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}
