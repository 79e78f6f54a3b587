//! msg-translator
//!
//! メッセージキーと言語から文字列を解決し、名前付きプレースホルダーを置換する翻訳エンジン

pub mod config;
pub mod dictionary;
pub mod error;
pub mod observer;
pub mod placeholder;
pub mod replacements;
pub mod translator;

#[cfg(test)]
mod test_utils;

pub use dictionary::{
    MessageDictionary,
    load_dictionary_file,
};
pub use error::{
    DictionaryError,
    TranslateError,
};
pub use observer::{
    DEFAULT_ERROR_MESSAGE,
    ErrorObserver,
    LogObserver,
};
pub use placeholder::{
    PlaceholderStyle,
    placeholder_names,
};
pub use replacements::Replacements;
pub use translator::{
    Translator,
    TranslatorConfig,
    build,
};
