//! Per-language translation coverage.

use crate::i18n::{I18nResult, LanguageRegistry, LanguageTable, MessageKey};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How much of the key set one table translates.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageCoverage {
    pub language: String,
    pub translated: usize,
    pub total: usize,

    /// Translated share as a percentage (0-100)
    pub coverage_percent: f64,

    /// Keys that fall back to English
    pub missing: Vec<MessageKey>,

    pub needs_review: Vec<MessageKey>,
    pub updated_since: Option<String>,
}

impl LanguageCoverage {
    pub fn of(table: &LanguageTable) -> Self {
        let total = MessageKey::ALL.len();
        let missing: Vec<MessageKey> = MessageKey::ALL
            .iter()
            .copied()
            .filter(|key| !table.contains(*key))
            .collect();
        let translated = total - missing.len();

        Self {
            language: table.language.clone(),
            translated,
            total,
            coverage_percent: (translated as f64 / total as f64) * 100.0,
            missing,
            needs_review: table.needs_review.clone(),
            updated_since: table.updated_since.clone(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Coverage of every registered language, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct CoverageReport {
    pub generated_at: DateTime<Utc>,
    pub languages: Vec<LanguageCoverage>,
}

impl CoverageReport {
    pub fn build() -> I18nResult<Self> {
        let registry = LanguageRegistry::get();
        let languages = registry
            .list_all()
            .into_iter()
            .map(|config| registry.table(config.id).map(|table| LanguageCoverage::of(&table)))
            .collect::<I18nResult<Vec<_>>>()?;

        Ok(Self {
            generated_at: Utc::now(),
            languages,
        })
    }

    pub fn get(&self, language: &str) -> Option<&LanguageCoverage> {
        self.languages.iter().find(|c| c.language == language)
    }
}
