// コマンド層: サブコマンドごとに1モジュール
// 必要な設定を読み込んでパイプラインを実行し、プレゼンテーション層に CommandResult を返す

pub mod download;
pub mod result;
pub mod setup;
pub mod upload;

pub use result::CommandResult;

use crate::config::UserConfig;
use crate::domain::outcome::LoggedUrl;
use crate::transfer::UploadOptions;
use crate::transfer::upload_log::UploadLog;
use crate::transfer::uploader::Uploader;
use anyhow::{Context, Result};

/// `up` と `d` に共通のアップロード設定
#[derive(Debug, Clone, Default)]
pub struct UploadSettings {
    pub expires: Option<String>,
    pub logged_url: LoggedUrl,
    pub show_progress: bool,
}

/// ユーザー設定（またはデフォルト）のエンドポイント用にアップローダーを作成
fn build_uploader(settings: UploadSettings) -> Result<Uploader> {
    let user_config = UserConfig::load()
        .context("Failed to load user configuration. Please check your config.toml file.")?;

    let options = UploadOptions::new(user_config.endpoint())
        .with_expires(settings.expires)
        .with_logged_url(settings.logged_url)
        .with_progress(settings.show_progress);
    tracing::debug!(url = %options.target_url(), "upload endpoint resolved");

    Ok(Uploader::new(options, UploadLog::in_current_dir())?)
}
