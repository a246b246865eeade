//! Error types for the localization layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for localization operations.
pub type I18nResult<T> = Result<T, I18nError>;

/// Localization errors.
#[derive(Debug, Error)]
pub enum I18nError {
    /// Language id (or alias) is not in the registry.
    #[error("unknown language: '{0}'")]
    UnknownLanguage(String),

    /// Message key name does not exist.
    #[error("unknown message key: '{0}'")]
    UnknownKey(String),

    /// Neither the language table nor the fallback chain has the key.
    #[error("no translation for '{key}' in '{language}' or its fallback")]
    MissingTranslation {
        /// Language id the lookup started from.
        language: String,
        /// Key name.
        key: String,
    },

    /// The selected text needs an argument the caller did not supply.
    #[error("message '{key}' requires parameter '{name}'")]
    MissingParameter {
        /// Key name.
        key: String,
        /// Placeholder or parameter name.
        name: String,
    },

    /// A locale table could not be parsed.
    #[error("invalid table for '{language}': {source}")]
    InvalidTable {
        /// Language id (or file name) of the table.
        language: String,
        #[source]
        source: serde_json::Error,
    },

    /// A locale table could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
