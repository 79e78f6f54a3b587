//! 設定管理を行うモジュール
//!
//! ワークスペースの設定ファイルを読み込み、コマンドライン引数による上書きを適用する。

use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    TranslatorSettings,
    loader,
};
use crate::placeholder::PlaceholderStyle;

/// 設定ファイルより優先される値（コマンドライン引数など）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsOverrides {
    /// 表示言語
    pub language: Option<String>,
    /// プレースホルダーの括弧スタイル
    pub placeholder_style: Option<PlaceholderStyle>,
}

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: TranslatorSettings,

    /// 設定ファイルを読み込んだディレクトリ（メッセージファイルの基準パス）
    workspace_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// ワークスペースの設定ファイルを読み込む
    ///
    /// 設定ファイルがなければデフォルト値を使う。失敗した場合は現在の状態を維持する。
    ///
    /// # Errors
    /// - ファイル読み込み・JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, workspace_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for workspace: {:?}", workspace_root);

        let loaded = match &workspace_root {
            Some(root) => loader::load_from_workspace(root)?,
            None => None,
        };
        let settings = loaded.unwrap_or_default();
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.workspace_root = workspace_root;
        tracing::debug!("Settings loaded: {:?}", self.current_settings);

        Ok(())
    }

    /// 上書き値を適用する
    ///
    /// 適用後の設定が不正な場合は何も変更しない。
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn apply_overrides(&mut self, overrides: SettingsOverrides) -> Result<(), ConfigError> {
        let mut settings = self.current_settings.clone();
        if let Some(language) = overrides.language {
            settings.language = language;
        }
        if let Some(style) = overrides.placeholder_style {
            settings.placeholder_style = style;
        }

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        tracing::debug!("Applied overrides: {:?}", settings);
        self.current_settings = settings;
        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &TranslatorSettings {
        &self.current_settings
    }

    /// メッセージファイルのパス
    ///
    /// 相対パスはワークスペースルート基準で解決する
    #[must_use]
    pub fn messages_path(&self) -> PathBuf {
        let messages_file = Path::new(&self.current_settings.messages_file);
        match self.workspace_root.as_deref() {
            Some(root) if messages_file.is_relative() => root.join(messages_file),
            _ => messages_file.to_path_buf(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    /// 設定ファイルを書き込んだ一時ワークスペースを作る
    fn workspace_with_config(content: &str) -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), content).unwrap();
        temp_dir
    }

    #[rstest]
    fn messages_path_without_workspace_is_as_configured() {
        let mut manager = ConfigManager::new();

        manager.load_settings(None).unwrap();

        assert_eq!(manager.messages_path(), PathBuf::from("messages.json"));
    }

    #[rstest]
    fn messages_path_resolves_against_workspace() {
        let workspace = workspace_with_config(r#"{"messagesFile": "i18n/messages.json"}"#);
        let mut manager = ConfigManager::new();

        manager.load_settings(Some(workspace.path().to_path_buf())).unwrap();

        assert_eq!(manager.messages_path(), workspace.path().join("i18n/messages.json"));
    }

    #[rstest]
    fn messages_path_keeps_absolute_file() {
        let workspace = TempDir::new().unwrap();
        let absolute = workspace.path().join("elsewhere.json");
        let content = serde_json::json!({ "messagesFile": absolute }).to_string();
        let workspace = workspace_with_config(&content);
        let mut manager = ConfigManager::new();

        manager.load_settings(Some(workspace.path().to_path_buf())).unwrap();

        assert_eq!(manager.messages_path(), absolute);
    }

    #[rstest]
    fn invalid_config_file_keeps_previous_state() {
        let workspace = workspace_with_config(r#"{"language": ""}"#);
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(Some(workspace.path().to_path_buf()));

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.messages_path(), PathBuf::from("messages.json"));
    }

    #[rstest]
    #[case::none(SettingsOverrides::default(), "es", PlaceholderStyle::Single)]
    #[case::language(
        SettingsOverrides { language: Some("fr".to_string()), placeholder_style: None },
        "fr",
        PlaceholderStyle::Single
    )]
    #[case::style(
        SettingsOverrides { language: None, placeholder_style: Some(PlaceholderStyle::Double) },
        "es",
        PlaceholderStyle::Double
    )]
    fn overrides_win_over_config_file(
        #[case] overrides: SettingsOverrides,
        #[case] language: &str,
        #[case] style: PlaceholderStyle,
    ) {
        let workspace =
            workspace_with_config(r#"{"language": "es", "placeholderStyle": "single"}"#);
        let mut manager = ConfigManager::new();
        manager.load_settings(Some(workspace.path().to_path_buf())).unwrap();

        manager.apply_overrides(overrides).unwrap();

        assert_that!(manager.get_settings().language, eq(language));
        assert_that!(manager.get_settings().placeholder_style, eq(style));
    }

    #[rstest]
    fn invalid_override_is_rejected_without_change() {
        let mut manager = ConfigManager::new();
        let overrides = SettingsOverrides {
            language: Some("en US".to_string()),
            placeholder_style: Some(PlaceholderStyle::Single),
        };

        let result = manager.apply_overrides(overrides);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_that!(manager.get_settings(), eq(&TranslatorSettings::default()));
    }
}
