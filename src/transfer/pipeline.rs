//! バッチ処理の制御
//!
//! ターゲットを1つずつ最後まで処理してから次へ進む。
//! 項目ごとの失敗は表示して数えるだけ。`up` へのディレクトリ指定と
//! 不正なダウンロードURLはエラーとしてバッチを終える。

use crate::domain::error::DomainError;
use crate::domain::outcome::DownloadOutcome;
use crate::domain::validator::validate_upload_target;
use crate::presentation::output;
use crate::transfer::DownloadOptions;
use crate::transfer::downloader::FileDownloader;
use crate::transfer::uploader::FileUploader;
use anyhow::Result;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// 「ファイル名を変更しますか？」への回答
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameDecision {
    Keep,
    /// 新しいファイル名（同じディレクトリ内）
    Rename(String),
}

/// アップロード前にリネームするか尋ねる
pub trait RenamePrompter {
    fn decide(&mut self, path: &Path) -> Result<RenameDecision>;
}

/// `--no-rename` 用: すべて元の名前のまま
#[derive(Debug, Default, Clone, Copy)]
pub struct KeepNames;

impl RenamePrompter for KeepNames {
    fn decide(&mut self, _path: &Path) -> Result<RenameDecision> {
        Ok(RenameDecision::Keep)
    }
}

/// 実行の最後に表示するバッチ集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchSummary {
    fn record(&mut self, success: bool) {
        if success {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }
}

/// ローカルファイルを順にアップロードする（各ファイルの前にリネームを確認）
///
/// # Errors
/// ディレクトリに当たった時点で `DomainError::NotAFile` を返し、残りは処理しない。
/// プロンプトの読み取り失敗も返す。
pub async fn upload_files<U, P>(
    uploader: &U,
    prompter: &mut P,
    files: &[PathBuf],
) -> Result<BatchSummary>
where
    U: FileUploader,
    P: RenamePrompter + ?Sized,
{
    let mut summary = BatchSummary::default();

    for file in files {
        match validate_upload_target(file).await {
            Ok(()) => {}
            Err(e @ DomainError::NotAFile { .. }) => return Err(e.into()),
            Err(e) => {
                output::print_error(&e.to_string());
                summary.record(false);
                continue;
            }
        }

        let target = match prompter.decide(file)? {
            RenameDecision::Keep => file.clone(),
            RenameDecision::Rename(name) => match rename_in_place(file, &name).await {
                Ok(renamed) => renamed,
                Err(e) => {
                    output::print_error(&format!(
                        "cannot rename \"{}\" to \"{}\": {}",
                        file.display(),
                        name.trim(),
                        e
                    ));
                    summary.record(false);
                    continue;
                }
            },
        };

        output::print_uploading(&target);
        let result = uploader.upload(&target).await;
        output::print_upload_result(&result);
        summary.record(result.is_success());
    }

    tracing::debug!(?summary, "upload batch finished");
    Ok(summary)
}

/// 各URLをダウンロードしてアップロードする
///
/// `options.delete` が指定されていれば、アップロード結果に関係なくローカルファイルを削除する。
///
/// # Errors
/// 解析できないURLでバッチを中断し、以降のURLは試さない。
pub async fn download_and_upload<D, U>(
    downloader: &D,
    uploader: &U,
    urls: &[String],
    options: &DownloadOptions,
) -> Result<BatchSummary>
where
    D: FileDownloader,
    U: FileUploader,
{
    let mut summary = BatchSummary::default();

    for url in urls {
        let path = match downloader.download(url, None, &options.destination).await? {
            DownloadOutcome::Saved(path) => {
                output::print_downloaded(&path);
                path
            }
            DownloadOutcome::Failed(failure) => {
                output::print_error(&failure.to_string());
                summary.record(false);
                continue;
            }
        };

        output::print_uploading(&path);
        let result = uploader.upload(&path).await;
        output::print_upload_result(&result);
        summary.record(result.is_success());

        if options.delete {
            remove_local(&path).await;
        }
    }

    tracing::debug!(?summary, "download batch finished");
    Ok(summary)
}

/// 同じディレクトリ内で `path` を `name` にリネーム（空の名前なら変更しない）
async fn rename_in_place(path: &Path, name: &str) -> std::io::Result<PathBuf> {
    let name = name.trim();
    if name.is_empty() {
        return Ok(path.to_path_buf());
    }
    let renamed = path.with_file_name(name);
    tokio::fs::rename(path, &renamed).await?;
    tracing::info!(from = %path.display(), to = %renamed.display(), "file renamed");
    Ok(renamed)
}

async fn remove_local(path: &Path) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => tracing::info!(file = %path.display(), "local copy removed"),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            let missing = DomainError::file_not_found(path.display().to_string());
            output::print_error(&missing.to_string());
        }
        Err(e) => {
            output::print_error(&format!("cannot remove \"{}\": {}", path.display(), e));
        }
    }
}
