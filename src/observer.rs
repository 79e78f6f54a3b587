//! Error observers notified when a message cannot be resolved.

use crate::error::TranslateError;

/// Diagnostic message passed to observers alongside the error.
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to translate message, rendering empty string";

/// Receives resolution failures that `translate` swallows.
///
/// Implemented for any `Fn(&TranslateError, &str) + Send + Sync` closure.
pub trait ErrorObserver: Send + Sync {
    fn on_error(&self, error: &TranslateError, default_message: &str);
}

impl<F> ErrorObserver for F
where
    F: Fn(&TranslateError, &str) + Send + Sync,
{
    fn on_error(&self, error: &TranslateError, default_message: &str) {
        self(error, default_message);
    }
}

/// Default observer: logs through `tracing` and lets the caller continue.
///
/// Events only become visible once the application installs a `tracing`
/// subscriber (the `msg-translate` binary writes them to stderr). Without one,
/// failures are silent apart from the empty string; pass a closure through
/// [`TranslatorConfig::on_error`](crate::TranslatorConfig::on_error) to report
/// them elsewhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ErrorObserver for LogObserver {
    fn on_error(&self, error: &TranslateError, default_message: &str) {
        match error {
            TranslateError::NoTranslationAvailable { .. } => {
                tracing::warn!(key = error.key(), language = error.language(), "{default_message}: {error}");
            }
            TranslateError::MalformedTemplate { .. } => {
                tracing::error!(key = error.key(), language = error.language(), "{default_message}: {error}");
            }
        }
    }
}
