//! Language type: validated handle onto a registered language.

use crate::i18n::registry::LANGUAGES;
use crate::i18n::{I18nError, I18nResult, LanguageConfig, LanguageRegistry, LanguageTable};
use std::fmt;
use std::sync::Arc;

/// A validated language.
///
/// Only languages present and enabled in the registry can be constructed,
/// so every accessor is infallible.
#[derive(Clone, Copy)]
pub struct Language {
    config: &'static LanguageConfig,
}

impl Language {
    pub const ENGLISH: Language = Language { config: &LANGUAGES[0] };
    pub const GERMAN: Language = Language { config: &LANGUAGES[1] };
    pub const SPANISH: Language = Language { config: &LANGUAGES[2] };
    pub const FRENCH: Language = Language { config: &LANGUAGES[3] };
    pub const ITALIAN: Language = Language { config: &LANGUAGES[4] };
    pub const DUTCH: Language = Language { config: &LANGUAGES[5] };
    pub const POLISH: Language = Language { config: &LANGUAGES[6] };
    pub const PORTUGUESE: Language = Language { config: &LANGUAGES[7] };
    pub const JAPANESE: Language = Language { config: &LANGUAGES[8] };
    pub const VIETNAMESE: Language = Language { config: &LANGUAGES[9] };
    pub const RUSSIAN: Language = Language { config: &LANGUAGES[10] };
    pub const CZECH: Language = Language { config: &LANGUAGES[11] };
    pub const LITHUANIAN: Language = Language { config: &LANGUAGES[12] };
    pub const SERBIAN_CYRILLIC: Language = Language { config: &LANGUAGES[13] };
    pub const PERSIAN: Language = Language { config: &LANGUAGES[14] };

    /// Create a Language from an id or alias (case-insensitive).
    ///
    /// # Returns
    /// * `Ok(Language)` if the id is known and the language is enabled
    /// * `Err(I18nError::UnknownLanguage)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let czech = Language::from_id("Czech")?;
    /// assert_eq!(czech.id(), "czech");
    /// ```
    pub fn from_id(id: &str) -> I18nResult<Language> {
        match LanguageRegistry::get().get_by_id(id) {
            Some(config) if config.enabled => Ok(Language { config }),
            _ => Err(I18nError::UnknownLanguage(id.to_string())),
        }
    }

    /// The language every fallback chain ends in.
    pub fn canonical() -> Language {
        Language {
            config: LanguageRegistry::get().canonical(),
        }
    }

    /// Canonical lowercase English id (e.g., "german").
    pub fn id(&self) -> &'static str {
        self.config.id
    }

    pub fn config(&self) -> &'static LanguageConfig {
        self.config
    }

    pub fn name(&self) -> &'static str {
        self.config.name
    }

    pub fn native_name(&self) -> &'static str {
        self.config.native_name
    }

    pub fn iso_code(&self) -> &'static str {
        self.config.iso_code
    }

    pub fn is_canonical(&self) -> bool {
        self.config.is_canonical
    }

    /// The parsed (cached) table for this language.
    pub fn table(&self) -> I18nResult<Arc<LanguageTable>> {
        LanguageRegistry::get().table(self.config.id)
    }
}

impl PartialEq for Language {
    fn eq(&self, other: &Self) -> bool {
        self.config.id == other.config.id
    }
}

impl Eq for Language {}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Language").field(&self.config.id).finish()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config.id)
    }
}
