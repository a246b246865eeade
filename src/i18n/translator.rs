//! The localized string table for one output language.
//!
//! A [`Translator`] resolves a [`MessageKey`] through a fixed fallback chain
//! (the language's own table, then the canonical English table), picks the
//! template variant matching the call's [`FormatParams`], and interpolates it.
//!
//! One translator is *active* process-wide. Switching languages swaps the
//! whole `Arc<Translator>`; tables are never mutated after construction.

use crate::i18n::template::interpolate;
use crate::i18n::{
    CompoundKind, FormatParams, I18nError, I18nResult, Language, LanguageTable, ListStyle,
    MessageKey, TranslationMetrics,
};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, error, info, warn};

/// Placeholders `DateTime` templates may use.
pub const DATE_FIELDS: &[&str] = &[
    "year",
    "month",
    "month_name",
    "day",
    "day_padded",
    "weekday",
    "hour",
    "minute",
    "second",
];

/// Localized messages for one language, backed by the English table.
#[derive(Debug, Clone)]
pub struct Translator {
    language: Language,
    table: Arc<LanguageTable>,
    fallback: Arc<LanguageTable>,
}

impl Translator {
    /// Translator for a registered language using its embedded table.
    pub fn new(language: Language) -> I18nResult<Self> {
        Ok(Self {
            language,
            table: language.table()?,
            fallback: Language::canonical().table()?,
        })
    }

    /// Translator for a language id or alias.
    pub fn for_id(id: &str) -> I18nResult<Self> {
        Self::new(Language::from_id(id)?)
    }

    pub fn english() -> I18nResult<Self> {
        Self::new(Language::ENGLISH)
    }

    /// Translator that reads `table` in place of the embedded one.
    ///
    /// English stays at the end of the chain, so a partial override only
    /// replaces the keys it defines.
    pub fn with_table(language: Language, table: LanguageTable) -> I18nResult<Self> {
        Ok(Self {
            language,
            table: Arc::new(table),
            fallback: Language::canonical().table()?,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Canonical lowercase English id of the language ("german", "czech").
    pub fn id_language(&self) -> &'static str {
        self.language.id()
    }

    /// The language's own (possibly sparse) table.
    pub fn table(&self) -> &LanguageTable {
        &self.table
    }

    /// LaTeX commands that switch a document to this language.
    pub fn latex_language_support_command(&self) -> &str {
        &self.table.latex
    }

    /// Warning for tables that lag behind the current key set.
    pub fn update_needed_message(&self) -> Option<String> {
        self.table.updated_since.as_ref().map(|since| {
            format!(
                "The selected output language \"{}\" has not been updated\nsince {}.  \
                 As a result some sentences may appear in English.\n\n",
                self.id_language(),
                since
            )
        })
    }

    /// Render `key` for the given parameters.
    pub fn localize(&self, key: MessageKey, params: &FormatParams) -> I18nResult<String> {
        let tags = params.tags();
        let (text, _) = self.resolve(key, &tags)?;
        self.render(key, text, params, |_| None)
    }

    /// Like [`localize`](Self::localize), with the key given by name.
    pub fn localize_named(&self, name: &str, params: &FormatParams) -> I18nResult<String> {
        self.localize(name.parse()?, params)
    }

    /// A message that takes no parameters.
    pub fn text(&self, key: MessageKey) -> I18nResult<String> {
        self.localize(key, &FormatParams::default())
    }

    /// `@0 … @(n-1)` joined the way this language joins lists.
    pub fn write_list(&self, n: usize) -> String {
        let style = self.list_style();
        let separator = style.map_or(", ", |s| s.separator.as_str());
        let final_separator = style.map_or(", ", |s| s.final_separator.as_str());
        let pair = style.map_or(", ", |s| s.pair_separator());

        let mut out = String::new();
        for i in 0..n {
            out.push_str(&format!("@{}", i));
            if i + 1 == n {
                break;
            }
            out.push_str(if n == 2 {
                pair
            } else if i + 2 == n {
                final_separator
            } else {
                separator
            });
        }

        if let Some(overflow) = style.and_then(|s| s.overflow.as_ref()) {
            if out.chars().count() > overflow.limit {
                out.push_str(&overflow.suffix.replace("{count}", &n.to_string()));
            }
        }

        out
    }

    /// A word key such as `Class` or `Author`.
    pub fn word(&self, key: MessageKey, first_capital: bool, singular: bool) -> I18nResult<String> {
        let params = FormatParams::new()
            .first_capital(first_capital)
            .singular(singular);
        self.localize(key, &params)
    }

    /// A list key such as `InheritsList` with `n` entries.
    pub fn list(&self, key: MessageKey, n: usize) -> I18nResult<String> {
        self.localize(key, &FormatParams::new().count(n))
    }

    /// Title of a compound's reference page.
    pub fn compound_reference(
        &self,
        name: &str,
        kind: CompoundKind,
        is_template: bool,
    ) -> I18nResult<String> {
        let params = FormatParams::new()
            .name(name)
            .compound(kind)
            .template(is_template);
        self.localize(MessageKey::CompoundReference, &params)
    }

    /// Lead-in of the source file list under a compound.
    pub fn generated_from_files(&self, kind: CompoundKind, single: bool) -> I18nResult<String> {
        let params = FormatParams::new().compound(kind).single(single);
        self.localize(MessageKey::GeneratedFromFiles, &params)
    }

    /// Search result summary; `$num` is left for the caller.
    pub fn search_results(&self, count: usize) -> I18nResult<String> {
        self.localize(MessageKey::SearchResults, &FormatParams::new().count(count))
    }

    /// The graph legend page for the given image format.
    pub fn legend_docs(&self, format: &str) -> I18nResult<String> {
        self.localize(MessageKey::LegendDocs, &FormatParams::new().format(format))
    }

    /// Page footer: generation date and optional project name.
    pub fn generated_at(&self, date: &str, project: Option<&str>) -> I18nResult<String> {
        let mut params = FormatParams::new().date(date);
        if let Some(project) = project {
            params = params.project(project);
        }
        self.localize(MessageKey::GeneratedAt, &params)
    }

    /// A timestamp in this language's date format.
    pub fn date_time(&self, when: NaiveDateTime, include_time: bool) -> I18nResult<String> {
        let params = FormatParams::new().include_time(include_time);
        let tags = params.tags();
        let (text, source) = self.resolve(MessageKey::DateTime, &tags)?;

        // Names come from the table that supplied the pattern.
        let calendar = source.calendar.as_ref().or(self.fallback.calendar.as_ref());
        let weekday = when.weekday().num_days_from_monday() as usize;
        let month = when.month0() as usize;

        self.render(MessageKey::DateTime, text, &params, |name| match name {
            "year" => Some(format!("{:04}", when.year())),
            "month" => Some(format!("{:02}", when.month())),
            "month_name" => calendar.map(|c| c.months[month].clone()),
            "day" => Some(when.day().to_string()),
            "day_padded" => Some(format!("{:02}", when.day())),
            "weekday" => calendar.map(|c| c.weekdays[weekday].clone()),
            "hour" => Some(format!("{:02}", when.hour())),
            "minute" => Some(format!("{:02}", when.minute())),
            "second" => Some(format!("{:02}", when.second())),
            _ => None,
        })
    }

    fn list_style(&self) -> Option<&ListStyle> {
        self.table.list.as_ref().or(self.fallback.list.as_ref())
    }

    /// Tables in lookup order.
    fn chain(&self) -> Vec<&LanguageTable> {
        if Arc::ptr_eq(&self.table, &self.fallback) {
            vec![self.table.as_ref()]
        } else {
            vec![self.table.as_ref(), self.fallback.as_ref()]
        }
    }

    /// First text for `key` along the chain, with the table it came from.
    fn resolve(&self, key: MessageKey, tags: &BTreeSet<&str>) -> I18nResult<(&str, &LanguageTable)> {
        let metrics = TranslationMetrics::global();

        for (depth, table) in self.chain().into_iter().enumerate() {
            let Some(text) = table.get(key).and_then(|template| template.select(tags)) else {
                continue;
            };

            if depth == 0 {
                metrics.record_hit();
            } else {
                metrics.record_fallback();
                debug!(
                    "'{}' not translated for {}, using {}",
                    key,
                    self.id_language(),
                    table.language
                );
            }
            return Ok((text, table));
        }

        metrics.record_miss();
        error!("No translation for '{}' in {} or its fallback", key, self.id_language());
        Err(I18nError::MissingTranslation {
            language: self.id_language().to_string(),
            key: key.to_string(),
        })
    }

    /// Fill placeholders and apply first-letter capitalization.
    ///
    /// `extra` supplies computed values; named arguments from `params` come
    /// after it.
    fn render<F>(
        &self,
        key: MessageKey,
        text: &str,
        params: &FormatParams,
        extra: F,
    ) -> I18nResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let list = if key.is_list() {
            let count = params.count.ok_or_else(|| I18nError::MissingParameter {
                key: key.to_string(),
                name: "count".to_string(),
            })?;
            Some(self.write_list(count))
        } else {
            None
        };

        let rendered = interpolate(text, |name| {
            if name == "list" {
                if let Some(list) = &list {
                    return Some(list.clone());
                }
            }
            extra(name).or_else(|| params.get(name).map(str::to_string))
        })
        .map_err(|name| I18nError::MissingParameter {
            key: key.to_string(),
            name,
        })?;

        Ok(if params.first_capital {
            capitalize_first(&rendered)
        } else {
            rendered
        })
    }
}

/// Uppercase the first character (Unicode-aware); the rest is unchanged.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ==================== Active translator ====================

static ACTIVE: OnceLock<RwLock<Option<Arc<Translator>>>> = OnceLock::new();

fn active_slot() -> &'static RwLock<Option<Arc<Translator>>> {
    ACTIVE.get_or_init(|| RwLock::new(None))
}

/// The active translator; English until another one is installed.
pub fn active() -> I18nResult<Arc<Translator>> {
    let slot = active_slot();

    if let Some(current) = slot.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
        return Ok(Arc::clone(current));
    }

    let english = Arc::new(Translator::english()?);
    let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
    Ok(Arc::clone(guard.get_or_insert(english)))
}

/// Make `translator` the active one; readers holding the previous one keep it.
pub fn install(translator: Translator) -> Arc<Translator> {
    let translator = Arc::new(translator);
    info!("Output language set to {}", translator.id_language());

    let mut guard = active_slot().write().unwrap_or_else(PoisonError::into_inner);
    *guard = Some(Arc::clone(&translator));
    translator
}

/// Activate the language named `id`.
///
/// An unknown id activates English and returns `false`.
pub fn select_language(id: &str) -> I18nResult<bool> {
    match Translator::for_id(id) {
        Ok(translator) => {
            if let Some(message) = translator.update_needed_message() {
                info!("{}", message.trim_end());
            }
            install(translator);
            Ok(true)
        }
        Err(I18nError::UnknownLanguage(_)) => {
            warn!("Unknown output language '{}', using English", id);
            install(Translator::english()?);
            Ok(false)
        }
        Err(err) => Err(err),
    }
}
