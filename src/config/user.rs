//! ユーザー設定
//!
//! 実行時にユーザーの設定ディレクトリから読み込む:
//! Windows: C:\Users\<User>\AppData\Roaming\anonupload\config.toml
//! macOS:   /Users/<User>/Library/Application Support/anonupload/config.toml
//! Linux:   /home/<user>/.config/anonupload/config.toml
//!
//! 初回読み込み時にコメント付きのデフォルトファイルを作成する。

use crate::config::app::APP_CONFIG;
use crate::config::error::ConfigError;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = r#"# anonupload - user configuration
# Set with 'anon setup <url>'. When absent, the built-in endpoint is used.
# custom_url = "https://file.io"
"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    /// 組み込みのデフォルトに代わるアップロード先
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
}

impl UserConfig {
    /// プラットフォーム固有の設定ファイルパス
    ///
    /// # Errors
    /// 設定ディレクトリが存在しないプラットフォームでは `ConfigError::DirectoryNotFound`
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("anonupload").join("config.toml"))
    }

    /// 設定を読み込んで検証する（必要ならデフォルトファイルを作成）
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// `config_path` の設定を読み込んで検証する
    ///
    /// ファイルがなければ先にデフォルトテンプレートから作成します。
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        config.validate()?;

        Ok(config)
    }

    fn create_default_config(config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent(config_path)?;

        fs::write(config_path, DEFAULT_TOML).map_err(|e| {
            ConfigError::file_system(
                format!(
                    "Failed to create default config file: {}",
                    config_path.display()
                ),
                e,
            )
        })
    }

    fn ensure_parent(config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }
        Ok(())
    }

    /// `config_path` に保存する（親ディレクトリも作成）
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        Self::ensure_parent(config_path)?;

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::serialize_error("Failed to serialize config", e))?;

        fs::write(config_path, content).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to write config file: {}", config_path.display()),
                e,
            )
        })
    }

    /// 送信先になり得ない `custom_url` は早期にエラーとする
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.custom_url {
            validate_endpoint(url)?;
        }
        Ok(())
    }

    pub fn set_custom_url(&mut self, url: impl Into<String>) -> Result<(), ConfigError> {
        let url = url.into();
        validate_endpoint(&url)?;
        self.custom_url = Some(url);
        Ok(())
    }

    /// 送信先エンドポイント: `custom_url` があればそれ、なければ組み込みのデフォルト
    pub fn endpoint(&self) -> &str {
        self.custom_url
            .as_deref()
            .unwrap_or(APP_CONFIG.api.default_endpoint)
    }
}

fn validate_endpoint(url: &str) -> Result<(), ConfigError> {
    if url.trim().is_empty() {
        return Err(ConfigError::validation_error("custom_url cannot be empty"));
    }

    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(ConfigError::validation_error(format!(
            "custom_url '{}' must use http or https, not '{}'",
            url,
            parsed.scheme()
        ))),
        Err(e) => Err(ConfigError::validation_error(format!(
            "custom_url '{}' is not a valid URL: {}",
            url, e
        ))),
    }
}
