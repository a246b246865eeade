//! Internationalization (i18n) module for generated documentation.
//!
//! Every sentence the generator writes is identified by a [`MessageKey`] and
//! rendered by the active [`Translator`]. Language tables are embedded JSON,
//! sparse, and backed by the English table.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their tables
//! - `language`: Type-safe handle onto a registered language
//! - `key`: The closed set of message keys
//! - `template`: Variant selection and placeholder interpolation
//! - `table`: One language's messages, list style and calendar
//! - `translator`: Fallback resolution, list rendering, the active translator
//! - `validator`: Table checks against English
//! - `coverage`: Per-language translation coverage
//! - `metrics`: Lookup and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use doc_translator::i18n::{self, FormatParams, MessageKey};
//!
//! i18n::select_language("german")?;
//! let translator = i18n::active()?;
//! let title = translator.localize(MessageKey::CompoundList, &FormatParams::new())?;
//! ```

mod compound;
mod coverage;
mod error;
mod key;
mod language;
mod metrics;
mod params;
mod registry;
mod table;
mod template;
mod translator;
mod validator;

pub use compound::CompoundKind;
pub use coverage::{CoverageReport, LanguageCoverage};
pub use error::{I18nError, I18nResult};
pub use key::MessageKey;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use params::FormatParams;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use table::{Calendar, LanguageTable, ListOverflow, ListStyle};
pub use template::{interpolate, Template, DEFAULT_BRANCH};
pub use translator::{active, install, select_language, Translator, DATE_FIELDS};
pub use validator::{TranslationValidator, ValidationReport};
