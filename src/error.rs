//! Error types surfaced by the resolver and the dictionary loader.

use thiserror::Error;

use crate::replacements::Replacements;

/// Failure to resolve a message key into a rendered string.
///
/// [`Translator::translate`](crate::Translator::translate) never returns this
/// to the caller; it is handed to the configured
/// [`ErrorObserver`](crate::ErrorObserver) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The key is absent, its value is not a language mapping, or the mapping
    /// has no entry for the language.
    #[error(
        "No translation found for {key}. Language: {language}. Replaces: {}",
        render_replaces(.replacements.as_ref())
    )]
    NoTranslationAvailable {
        key: String,
        language: String,
        replacements: Option<Replacements>,
    },

    /// The stored language variant cannot be read as a string.
    #[error("Malformed template for {key}. Language: {language}. Found: {found}")]
    MalformedTemplate { key: String, language: String, found: &'static str },
}

impl TranslateError {
    /// Message key the failed lookup was made for.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::NoTranslationAvailable { key, .. } | Self::MalformedTemplate { key, .. } => key,
        }
    }

    /// Language the failed lookup was made for.
    #[must_use]
    pub fn language(&self) -> &str {
        match self {
            Self::NoTranslationAvailable { language, .. }
            | Self::MalformedTemplate { language, .. } => language,
        }
    }
}

/// Renders the replacement set for the `NoTranslationAvailable` message.
fn render_replaces(replacements: Option<&Replacements>) -> String {
    replacements.map_or_else(|| "none".to_string(), Replacements::to_json)
}

/// Failure to build a [`MessageDictionary`](crate::MessageDictionary) from JSON.
#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Failed to read message file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse message file: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The document root is something other than an object.
    #[error("Message dictionary must be a JSON object, found {0}")]
    NotAnObject(&'static str),
}
