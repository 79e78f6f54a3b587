//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use std::sync::Mutex;

use crate::dictionary::MessageDictionary;
use crate::error::TranslateError;
use crate::observer::ErrorObserver;

/// テスト用の `MessageDictionary` を作成する
///
/// # Arguments
/// * `entries` - `(キー, 言語コード, テンプレート)` のリスト
pub(crate) fn create_dictionary(entries: &[(&str, &str, &str)]) -> MessageDictionary {
    let mut dictionary = MessageDictionary::new();
    for (key, language, template) in entries {
        dictionary.insert(*key, *language, *template);
    }
    dictionary
}

/// 受け取ったエラーを記録する `ErrorObserver`
#[derive(Debug, Default)]
pub(crate) struct RecordingObserver {
    /// 通知されたエラー（通知順）
    errors: Mutex<Vec<TranslateError>>,
}

impl RecordingObserver {
    /// 記録されたエラーのコピーを返す
    pub(crate) fn errors(&self) -> Vec<TranslateError> {
        self.errors.lock().map(|errors| errors.clone()).unwrap_or_default()
    }

    /// 記録されたエラーのメッセージを返す
    pub(crate) fn messages(&self) -> Vec<String> {
        self.errors().iter().map(ToString::to_string).collect()
    }
}

impl ErrorObserver for RecordingObserver {
    fn on_error(&self, error: &TranslateError, _default_message: &str) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error.clone());
        }
    }
}
