//! Translation table validation module.
//!
//! Checks a language table against the English one so that a broken
//! translation is caught before it reaches generated documentation:
//! placeholders a translation invents would fail at render time, and lost
//! `@N` markers would drop list entries or references.

use crate::i18n::translator::DATE_FIELDS;
use crate::i18n::{I18nResult, LanguageRegistry, LanguageTable, MessageKey, Template};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make some text render wrongly or not at all
    pub errors: Vec<String>,

    /// Gaps that fall back to English or need a translator's attention
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for language tables.
pub struct TranslationValidator;

static RUNTIME_TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

impl TranslationValidator {
    /// Validate `table` against the canonical `english` table.
    ///
    /// Errors:
    /// - a select map without a `_` branch
    /// - a placeholder the English text does not have
    /// - `@N` markers that differ from the English ones
    /// - a `needs_review` entry for an untranslated key
    ///
    /// Warnings:
    /// - keys missing from the table (they fall back to English)
    /// - `$word` tokens the English text has and the translation lost
    /// - keys listed in `needs_review`
    ///
    /// When `table` is the English table itself, missing keys are errors.
    pub fn validate(table: &LanguageTable, english: &LanguageTable) -> ValidationReport {
        let mut report = ValidationReport::new();
        let is_english = table.language == english.language;

        for key in MessageKey::ALL.iter().copied() {
            let Some(template) = table.get(key) else {
                if is_english {
                    report.errors.push(format!("{}: missing from the English table", key));
                } else {
                    report.warnings.push(format!("{}: not translated", key));
                }
                continue;
            };

            if !template.has_defaults() {
                report
                    .errors
                    .push(format!("{}: select map without a \"_\" branch", key));
            }

            let Some(reference) = english.get(key) else {
                continue;
            };
            if is_english {
                continue;
            }

            Self::check_placeholders(key, template, reference, &mut report);

            let markers = template.markers();
            let expected = reference.markers();
            if markers != expected {
                report.errors.push(format!(
                    "{}: marker mismatch: English has {:?}, translation has {:?}",
                    key, expected, markers
                ));
            }

            let tokens = Self::extract_runtime_tokens(template);
            for token in Self::extract_runtime_tokens(reference) {
                if !tokens.contains(&token) {
                    report
                        .warnings
                        .push(format!("{}: translation drops {}", key, token));
                }
            }
        }

        for key in &table.needs_review {
            if table.contains(*key) {
                report.warnings.push(format!("{}: marked for review", key));
            } else {
                report
                    .errors
                    .push(format!("{}: marked for review but not translated", key));
            }
        }

        report
    }

    /// Validate every registered language.
    pub fn validate_all() -> I18nResult<BTreeMap<&'static str, ValidationReport>> {
        let registry = LanguageRegistry::get();
        let english = registry.table(registry.canonical().id)?;

        let mut reports = BTreeMap::new();
        for language in registry.list_all() {
            let table = registry.table(language.id)?;
            reports.insert(language.id, Self::validate(&table, &english));
        }
        Ok(reports)
    }

    fn check_placeholders(
        key: MessageKey,
        template: &Template,
        reference: &Template,
        report: &mut ValidationReport,
    ) {
        let known = reference.placeholders();
        for name in template.placeholders() {
            if known.contains(&name) {
                continue;
            }
            // Date patterns may reorder and pad fields freely.
            if key == MessageKey::DateTime && DATE_FIELDS.contains(&name.as_str()) {
                continue;
            }
            report
                .errors
                .push(format!("{}: unknown placeholder {{{}}}", key, name));
        }
    }

    /// `$word` tokens substituted by the page at runtime (e.g. `$num`).
    fn extract_runtime_tokens(template: &Template) -> BTreeSet<String> {
        let regex = RUNTIME_TOKEN_REGEX.get_or_init(|| Regex::new(r"\$[a-z]+").unwrap());

        template
            .texts()
            .into_iter()
            .flat_map(|text| regex.find_iter(text).map(|m| m.as_str().to_string()))
            .collect()
    }
}
