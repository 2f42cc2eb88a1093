//! ドメインサービス: アップロード対象の検証
//!
//! リネームやアップロードの前にローカルパスを確認する。

use crate::domain::error::DomainError;
use std::path::Path;

/// `anon up` に渡されたパスを検証
///
/// # Errors
/// - `NotAFile`: ディレクトリだった。呼び出し側はバッチ全体を中断する。
/// - `FileNotFound`: パスに何もない。呼び出し側はこの項目を飛ばす。
pub async fn validate_upload_target(path: &Path) -> Result<(), DomainError> {
    let display = path.display().to_string();

    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|_| DomainError::file_not_found(&display))?;

    if metadata.is_dir() {
        return Err(DomainError::not_a_file(display));
    }

    Ok(())
}
