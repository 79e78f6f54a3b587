use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::placeholder::PlaceholderStyle;
use crate::translator::TranslatorConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "placeholderStyle")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Numbered list of validation errors, one per line.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorSettings {
    /// Language code every lookup is made for. Not checked against a list of
    /// known codes.
    pub language: String,

    pub placeholder_style: PlaceholderStyle,

    /// Message dictionary JSON, relative to the workspace root.
    pub messages_file: String,
}

impl TranslatorSettings {
    /// # Errors
    /// - Required field is empty
    /// - Language contains whitespace
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.language.is_empty() {
            errors.push(ValidationError::new(
                "language",
                "The language cannot be empty. Please specify a language code, for example: \"en\"",
            ));
        } else if self.language.chars().any(char::is_whitespace) {
            errors.push(ValidationError::new(
                "language",
                format!("Language code '{}' must not contain whitespace", self.language),
            ));
        }

        if self.messages_file.is_empty() {
            errors.push(ValidationError::new(
                "messagesFile",
                "The path cannot be empty. Example: \"messages.json\"",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// Translator options derived from these settings, with the default observer.
    #[must_use]
    pub fn translator_config(&self) -> TranslatorConfig {
        TranslatorConfig::default().with_placeholder_style(self.placeholder_style)
    }
}

impl Default for TranslatorSettings {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            placeholder_style: PlaceholderStyle::Double,
            messages_file: "messages.json".to_string(),
        }
    }
}
