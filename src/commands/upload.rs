//! `anon up`: ローカルファイルのアップロード

use crate::commands::result::CommandResult;
use crate::commands::{UploadSettings, build_uploader};
use crate::presentation::input::ConsolePrompter;
use crate::transfer::pipeline::{KeepNames, RenamePrompter, upload_files};
use anyhow::Result;
use std::path::PathBuf;

/// `files` を順にアップロードする（`prompt_rename` なら各ファイルの前にリネームを確認）
///
/// # Errors
/// `files` 中の最初のディレクトリで停止する。
pub async fn execute(
    files: &[PathBuf],
    prompt_rename: bool,
    settings: UploadSettings,
) -> Result<CommandResult> {
    let uploader = build_uploader(settings)?;

    let mut prompter: Box<dyn RenamePrompter> = if prompt_rename {
        Box::new(ConsolePrompter::stdio())
    } else {
        Box::new(KeepNames)
    };

    let summary = upload_files(&uploader, prompter.as_mut(), files).await?;
    Ok(CommandResult::Upload(summary))
}
