//! `anon d`: URLをダウンロードし、取得したファイルをアップロードする

use crate::api::error::InfraError;
use crate::commands::result::CommandResult;
use crate::commands::{UploadSettings, build_uploader};
use crate::transfer::DownloadOptions;
use crate::transfer::downloader::Downloader;
use crate::transfer::pipeline::download_and_upload;
use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// 各URLを `path`（デフォルトは作業ディレクトリ）にダウンロードしてアップロードする
///
/// `delete` 指定時はローカルのコピーを削除する。
///
/// # Errors
/// 解析できないURLで実行を終える（それまでの結果は有効）。
pub async fn execute(
    urls: &[String],
    path: Option<PathBuf>,
    delete: bool,
    settings: UploadSettings,
) -> Result<CommandResult> {
    let destination = match path {
        Some(path) => path,
        None => env::current_dir()
            .map_err(|e| InfraError::io("Failed to read the current directory", e))?,
    };

    let downloader = Downloader::new(settings.show_progress)?;
    let uploader = build_uploader(settings)?;
    let options = DownloadOptions { destination, delete };

    let summary = download_and_upload(&downloader, &uploader, urls, &options).await?;
    Ok(CommandResult::Download(summary))
}
