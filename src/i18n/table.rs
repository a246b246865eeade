//! Language tables: the sparse per-language message data.
//!
//! Tables are JSON documents. Unknown fields and unknown message keys are
//! rejected when a table is parsed, so a typo in a locale file surfaces at
//! load time instead of as silently missing text.

use crate::i18n::{I18nError, I18nResult, MessageKey, Template};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// How a language joins list markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListStyle {
    /// Between items.
    pub separator: String,

    /// Before the last item of three or more.
    #[serde(rename = "final")]
    pub final_separator: String,

    /// Between exactly two items; `final_separator` when absent.
    #[serde(default)]
    pub pair: Option<String>,

    /// Count suffix for long lists.
    #[serde(default)]
    pub overflow: Option<ListOverflow>,
}

impl ListStyle {
    pub fn pair_separator(&self) -> &str {
        self.pair.as_deref().unwrap_or(&self.final_separator)
    }
}

/// Suffix appended when the joined markers exceed `limit` characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListOverflow {
    pub limit: usize,
    /// May contain `{count}`.
    pub suffix: String,
}

/// Abbreviated weekday (Monday first) and month names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Calendar {
    pub weekdays: [String; 7],
    pub months: [String; 12],
}

/// One language's messages and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LanguageTable {
    /// Canonical lowercase English id, e.g. "german".
    pub language: String,

    /// Release the table was last brought up to date with.
    #[serde(default)]
    pub updated_since: Option<String>,

    /// LaTeX preamble lines enabling the language.
    #[serde(default)]
    pub latex: String,

    #[serde(default)]
    pub list: Option<ListStyle>,

    #[serde(default)]
    pub calendar: Option<Calendar>,

    /// Keys whose text is known to be partial or untranslated.
    #[serde(default)]
    pub needs_review: Vec<MessageKey>,

    messages: HashMap<MessageKey, Template>,
}

impl LanguageTable {
    /// Parse a table from JSON.
    pub fn from_json(json: &str) -> I18nResult<Self> {
        serde_json::from_str(json).map_err(|source| I18nError::InvalidTable {
            language: language_hint(json),
            source,
        })
    }

    /// Read and parse a table file.
    pub fn from_path(path: &Path) -> I18nResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| I18nError::InvalidTable {
            language: path.display().to_string(),
            source,
        })
    }

    pub fn get(&self, key: MessageKey) -> Option<&Template> {
        self.messages.get(&key)
    }

    pub fn contains(&self, key: MessageKey) -> bool {
        self.messages.contains_key(&key)
    }

    /// Translated keys, in canonical order.
    pub fn keys(&self) -> Vec<MessageKey> {
        MessageKey::ALL
            .iter()
            .copied()
            .filter(|key| self.contains(*key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Best-effort language id for error messages about unparsable JSON.
fn language_hint(json: &str) -> String {
    #[derive(Deserialize)]
    struct Header {
        language: String,
    }

    serde_json::from_str::<serde_json::Value>(json)
        .ok()
        .and_then(|value| serde_json::from_value::<Header>(value).ok())
        .map(|header| header.language)
        .unwrap_or_else(|| "<unknown>".to_string())
}
