//! Language registry: Single source of truth for all supported languages.
//!
//! Each language carries its metadata and the embedded JSON source of its
//! table. Tables are parsed on first use and cached for the life of the
//! process; the registry itself is a `OnceLock` singleton.

use crate::i18n::{I18nError, I18nResult, LanguageTable};
use std::sync::{Arc, OnceLock};

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Canonical lowercase English id (e.g., "german", "serbian-cyrillic")
    pub id: &'static str,

    /// English name of the language (e.g., "German")
    pub name: &'static str,

    /// Native name of the language (e.g., "Deutsch")
    pub native_name: &'static str,

    /// ISO 639-1 language code (e.g., "de")
    pub iso_code: &'static str,

    /// Alternative ids accepted on selection
    pub aliases: &'static [&'static str],

    /// Whether this is the fallback language (exactly one is)
    pub is_canonical: bool,

    /// Whether this language can be selected
    pub enabled: bool,

    /// Embedded JSON table
    pub source: &'static str,
}

impl LanguageConfig {
    /// Whether `id` (already lowercased) names this language.
    fn matches(&self, id: &str) -> bool {
        self.id == id || self.aliases.contains(&id)
    }
}

macro_rules! locale {
    ($file:literal) => {
        include_str!(concat!("../../resources/locales/", $file, ".json"))
    };
}

pub(crate) const LANGUAGES: &[LanguageConfig] = &[
    LanguageConfig {
        id: "english",
        name: "English",
        native_name: "English",
        iso_code: "en",
        aliases: &[],
        is_canonical: true,
        enabled: true,
        source: locale!("english"),
    },
    LanguageConfig {
        id: "german",
        name: "German",
        native_name: "Deutsch",
        iso_code: "de",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("german"),
    },
    LanguageConfig {
        id: "spanish",
        name: "Spanish",
        native_name: "Español",
        iso_code: "es",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("spanish"),
    },
    LanguageConfig {
        id: "french",
        name: "French",
        native_name: "Français",
        iso_code: "fr",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("french"),
    },
    LanguageConfig {
        id: "italian",
        name: "Italian",
        native_name: "Italiano",
        iso_code: "it",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("italian"),
    },
    LanguageConfig {
        id: "dutch",
        name: "Dutch",
        native_name: "Nederlands",
        iso_code: "nl",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("dutch"),
    },
    LanguageConfig {
        id: "polish",
        name: "Polish",
        native_name: "Polski",
        iso_code: "pl",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("polish"),
    },
    LanguageConfig {
        id: "portuguese",
        name: "Portuguese",
        native_name: "Português",
        iso_code: "pt",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("portuguese"),
    },
    LanguageConfig {
        id: "japanese",
        name: "Japanese",
        native_name: "日本語",
        iso_code: "ja",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("japanese"),
    },
    LanguageConfig {
        id: "vietnamese",
        name: "Vietnamese",
        native_name: "Tiếng Việt",
        iso_code: "vi",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("vietnamese"),
    },
    LanguageConfig {
        id: "russian",
        name: "Russian",
        native_name: "Русский",
        iso_code: "ru",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("russian"),
    },
    LanguageConfig {
        id: "czech",
        name: "Czech",
        native_name: "Čeština",
        iso_code: "cs",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("czech"),
    },
    LanguageConfig {
        id: "lithuanian",
        name: "Lithuanian",
        native_name: "Lietuvių",
        iso_code: "lt",
        aliases: &[],
        is_canonical: false,
        enabled: true,
        source: locale!("lithuanian"),
    },
    LanguageConfig {
        id: "serbian-cyrillic",
        name: "Serbian (Cyrillic)",
        native_name: "Српски",
        iso_code: "sr",
        aliases: &["serbiancyr"],
        is_canonical: false,
        enabled: true,
        source: locale!("serbian-cyrillic"),
    },
    LanguageConfig {
        id: "persian",
        name: "Persian",
        native_name: "فارسی",
        iso_code: "fa",
        aliases: &["farsi"],
        is_canonical: false,
        enabled: true,
        source: locale!("persian"),
    },
];

/// Global language registry singleton.
///
/// Holds every supported language and a lazily filled table cache. The
/// language list is immutable; each cache slot is written at most once.
pub struct LanguageRegistry {
    languages: &'static [LanguageConfig],
    tables: Vec<OnceLock<Arc<LanguageTable>>>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: LANGUAGES,
            tables: LANGUAGES.iter().map(|_| OnceLock::new()).collect(),
        })
    }

    /// Get a language configuration by id or alias (case-insensitive).
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_id(&self, id: &str) -> Option<&'static LanguageConfig> {
        self.position(id).map(|index| &self.languages[index])
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&'static LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&'static LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the canonical language configuration.
    ///
    /// The canonical language terminates every fallback chain. The registry
    /// lists it first.
    pub fn canonical(&self) -> &'static LanguageConfig {
        self.languages
            .iter()
            .find(|lang| lang.is_canonical)
            .unwrap_or(&self.languages[0])
    }

    /// Check if a language id is supported and enabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.get_by_id(id)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }

    /// Parsed table for a language, cached after the first call.
    pub fn table(&self, id: &str) -> I18nResult<Arc<LanguageTable>> {
        let index = self
            .position(id)
            .ok_or_else(|| I18nError::UnknownLanguage(id.to_string()))?;
        let slot = &self.tables[index];

        if let Some(table) = slot.get() {
            return Ok(Arc::clone(table));
        }

        let config = &self.languages[index];
        let table = LanguageTable::from_json(config.source).map_err(|err| match err {
            I18nError::InvalidTable { source, .. } => I18nError::InvalidTable {
                language: config.id.to_string(),
                source,
            },
            other => other,
        })?;

        // A concurrent caller may have won the race; both parsed the same source.
        Ok(Arc::clone(slot.get_or_init(|| Arc::new(table))))
    }

    fn position(&self, id: &str) -> Option<usize> {
        let id = id.trim().to_ascii_lowercase();
        self.languages.iter().position(|lang| lang.matches(&id))
    }
}
