//! Message resolution and placeholder substitution.

use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use crate::dictionary::{
    MessageDictionary,
    TemplateError,
};
use crate::error::TranslateError;
use crate::observer::{
    DEFAULT_ERROR_MESSAGE,
    ErrorObserver,
    LogObserver,
};
use crate::placeholder::{
    PlaceholderStyle,
    placeholder_names,
};
use crate::replacements::Replacements;

/// Options fixed when a [`Translator`] is built.
#[derive(Clone)]
pub struct TranslatorConfig {
    pub placeholder_style: PlaceholderStyle,
    pub observer: Arc<dyn ErrorObserver>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self { placeholder_style: PlaceholderStyle::default(), observer: Arc::new(LogObserver) }
    }
}

impl fmt::Debug for TranslatorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TranslatorConfig")
            .field("placeholder_style", &self.placeholder_style)
            .finish_non_exhaustive()
    }
}

impl TranslatorConfig {
    #[must_use]
    pub fn with_placeholder_style(mut self, style: PlaceholderStyle) -> Self {
        self.placeholder_style = style;
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ErrorObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Replaces the observer with a closure.
    #[must_use]
    pub fn on_error<F>(self, f: F) -> Self
    where
        F: Fn(&TranslateError, &str) + Send + Sync + 'static,
    {
        self.with_observer(Arc::new(f))
    }
}

/// Resolves message keys for one language against a borrowed dictionary.
///
/// Holds no mutable state: every call is a pure function of its arguments and
/// the values captured at construction. Build a new `Translator` to switch
/// language or dictionary.
#[derive(Debug, Clone)]
pub struct Translator<'a> {
    /// Messages to resolve against.
    dictionary: &'a MessageDictionary,
    /// Language code used for every lookup.
    language: String,
    /// Placeholder style and observer.
    config: TranslatorConfig,
}

/// Builds a [`Translator`]; `None` config means all defaults.
#[must_use]
pub fn build(
    dictionary: &MessageDictionary,
    language: impl Into<String>,
    config: Option<TranslatorConfig>,
) -> Translator<'_> {
    Translator::new(dictionary, language, config.unwrap_or_default())
}

impl<'a> Translator<'a> {
    #[must_use]
    pub fn new(
        dictionary: &'a MessageDictionary,
        language: impl Into<String>,
        config: TranslatorConfig,
    ) -> Self {
        let language = language.into();
        tracing::debug!(
            language = %language,
            style = ?config.placeholder_style,
            "Building translator over {} message keys",
            dictionary.len()
        );
        Self { dictionary, language, config }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub const fn placeholder_style(&self) -> PlaceholderStyle {
        self.config.placeholder_style
    }

    /// Renders `key` with no replacements. Returns an empty string on failure.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.report(self.resolve(key, None))
    }

    /// Renders `key`, substituting `replacements`. Returns an empty string on
    /// failure after notifying the observer.
    ///
    /// ```
    /// use msg_translator::{MessageDictionary, Replacements, build};
    ///
    /// let dictionary = MessageDictionary::new()
    ///     .with_message("welcome", [("en", "Welcome back, {{username}}!"), ("es", "¡Bienvenido, {{username}}!")]);
    /// let translator = build(&dictionary, "es", None);
    ///
    /// let text = translator.translate_with("welcome", &Replacements::new().with("username", "Bob"));
    /// assert_eq!(text, "¡Bienvenido, Bob!");
    /// ```
    #[must_use]
    pub fn translate_with(&self, key: &str, replacements: &Replacements) -> String {
        self.report(self.resolve(key, Some(replacements)))
    }

    /// Resolves `key` without swallowing failures.
    ///
    /// Each replacement with a value replaces only the first occurrence of its
    /// token, in insertion order. A token only matches in the configured style:
    /// `{name}` inside `{{name}}` is left alone. Tokens without a value stay
    /// verbatim.
    ///
    /// # Errors
    /// - `NoTranslationAvailable`: key absent, not a language mapping, or no
    ///   variant for this language
    /// - `MalformedTemplate`: variant is not a string, number or boolean
    pub fn resolve(
        &self,
        key: &str,
        replacements: Option<&Replacements>,
    ) -> Result<String, TranslateError> {
        let template = self.template(key, replacements)?;

        let Some(replacements) = replacements else {
            return Ok(template.into_owned());
        };

        if tracing::enabled!(tracing::Level::TRACE) {
            let declared = placeholder_names(&template, self.config.placeholder_style);
            for (name, _) in replacements.iter().filter(|(name, _)| !declared.contains(name)) {
                tracing::trace!(key, name, "Replacement has no matching placeholder");
            }
        }

        let mut rendered = template.into_owned();
        for (name, value) in replacements.iter() {
            let Some(value) = value else {
                continue;
            };
            if let Some(range) = self.config.placeholder_style.find_token(&rendered, name) {
                rendered.replace_range(range, value);
            }
        }

        Ok(rendered)
    }

    /// Placeholder names declared by the template for `key`.
    ///
    /// # Errors
    /// Same lookup failures as [`Translator::resolve`].
    pub fn placeholders(&self, key: &str) -> Result<BTreeSet<String>, TranslateError> {
        let template = self.template(key, None)?;
        Ok(placeholder_names(&template, self.config.placeholder_style)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Fetches the raw template, mapping lookup failures to [`TranslateError`].
    fn template(
        &self,
        key: &str,
        replacements: Option<&Replacements>,
    ) -> Result<Cow<'a, str>, TranslateError> {
        self.dictionary.template(key, &self.language).map_err(|error| match error {
            TemplateError::Missing => TranslateError::NoTranslationAvailable {
                key: key.to_string(),
                language: self.language.clone(),
                replacements: replacements.cloned(),
            },
            TemplateError::Malformed(found) => TranslateError::MalformedTemplate {
                key: key.to_string(),
                language: self.language.clone(),
                found,
            },
        })
    }

    /// Collapses a failed resolution into an empty string.
    fn report(&self, result: Result<String, TranslateError>) -> String {
        result.unwrap_or_else(|error| {
            self.config.observer.on_error(&error, DEFAULT_ERROR_MESSAGE);
            String::new()
        })
    }
}
