//! In-memory message dictionary.
//!
//! Shape is only checked lazily: a key whose value is not a language mapping,
//! or a language variant that is not a string, is accepted at construction and
//! reported when that key is looked up.

use std::borrow::Cow;
use std::path::Path;

use serde_json::{
    Map,
    Number,
    Value,
};

use crate::error::DictionaryError;

/// Mapping from message key to language variants (`language -> template`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MessageDictionary {
    /// Raw key -> language mapping.
    messages: Map<String, Value>,
}

/// Why a template could not be produced for a `(key, language)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TemplateError {
    /// Key absent, not a mapping, or no entry for the language.
    Missing,
    /// Entry present but not coercible to a string; carries the JSON kind found.
    Malformed(&'static str),
}

impl MessageDictionary {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from a parsed JSON document.
    ///
    /// # Errors
    /// The root value is not an object.
    pub fn from_value(value: Value) -> Result<Self, DictionaryError> {
        match value {
            Value::Object(messages) => Ok(Self { messages }),
            other => Err(DictionaryError::NotAnObject(json_kind(&other))),
        }
    }

    /// Builds a dictionary from JSON text.
    ///
    /// ```
    /// use msg_translator::MessageDictionary;
    ///
    /// let dictionary =
    ///     MessageDictionary::from_json_str(r#"{"greet": {"en": "Hi", "ja": "やあ"}}"#).unwrap();
    /// assert!(dictionary.contains_key("greet"));
    /// ```
    ///
    /// # Errors
    /// Invalid JSON, or a root that is not an object.
    pub fn from_json_str(text: &str) -> Result<Self, DictionaryError> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    /// Adds or replaces the template for `key` in `language`.
    ///
    /// If `key` currently holds something other than a language mapping it is
    /// replaced by a fresh mapping.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        language: impl Into<String>,
        template: impl Into<String>,
    ) {
        let entry =
            self.messages.entry(key.into()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        if let Value::Object(variants) = entry {
            variants.insert(language.into(), Value::String(template.into()));
        }
    }

    #[must_use]
    pub fn with_message<L, T>(mut self, key: &str, variants: impl IntoIterator<Item = (L, T)>) -> Self
    where
        L: Into<String>,
        T: Into<String>,
    {
        for (language, template) in variants {
            self.insert(key, language, template);
        }
        self
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Languages available for `key`; empty if the key is absent or not a mapping.
    #[must_use]
    pub fn languages(&self, key: &str) -> Vec<&str> {
        self.messages
            .get(key)
            .and_then(Value::as_object)
            .map(|variants| variants.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Looks up the template for `key` in `language`, coercing scalars to text.
    ///
    /// Numbers render in their shortest form, so a stored `1.0` becomes `"1"`.
    pub(crate) fn template(&self, key: &str, language: &str) -> Result<Cow<'_, str>, TemplateError> {
        let variant = self
            .messages
            .get(key)
            .and_then(Value::as_object)
            .and_then(|variants| variants.get(language))
            .ok_or(TemplateError::Missing)?;

        match variant {
            Value::String(s) => Ok(Cow::Borrowed(s.as_str())),
            Value::Number(number) => Ok(Cow::Owned(number_text(number))),
            Value::Bool(flag) => Ok(Cow::Owned(flag.to_string())),
            other => Err(TemplateError::Malformed(json_kind(other))),
        }
    }
}

impl<K, L, T, V> FromIterator<(K, V)> for MessageDictionary
where
    K: Into<String>,
    L: Into<String>,
    T: Into<String>,
    V: IntoIterator<Item = (L, T)>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut dictionary = Self::new();
        for (key, variants) in iter {
            let key = key.into();
            for (language, template) in variants {
                dictionary.insert(key.as_str(), language, template);
            }
        }
        dictionary
    }
}

/// Text of a JSON number; integral floats drop their fraction (`1.0` -> `1`).
fn number_text(number: &Number) -> String {
    if number.is_f64() {
        // f64's Display prints 1.0 as "1" and 1.5 as "1.5".
        number.as_f64().map_or_else(|| number.to_string(), |float| float.to_string())
    } else {
        number.to_string()
    }
}

/// Name of a JSON value's type, for diagnostics.
const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Loads a message dictionary from a JSON file.
///
/// # Errors
/// Returns error if file read or JSON parse fails, or the root is not an object.
pub fn load_dictionary_file(file_path: &Path) -> Result<MessageDictionary, DictionaryError> {
    tracing::debug!("Loading message dictionary from: {:?}", file_path);

    let content = std::fs::read_to_string(file_path)?;
    let dictionary = MessageDictionary::from_json_str(&content)?;

    tracing::debug!("Loaded {} message keys", dictionary.len());
    Ok(dictionary)
}
