//! ドメイン層のエラー
//!
//! アップロード対象のルール違反を表す。
//! 外部クレートのエラーは持たず、問題のパスのみ保持する。

use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// パスが存在しない
    #[error("the file \"{path}\" doesn't exist")]
    FileNotFound { path: String },

    /// ファイルの代わりにディレクトリが指定された
    #[error("'{path}' is a directory, not a file")]
    NotAFile { path: String },
}

impl DomainError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn not_a_file(path: impl Into<String>) -> Self {
        Self::NotAFile { path: path.into() }
    }

    /// 終了コードを決めるための深刻度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::FileNotFound { .. } => ErrorSeverity::UserError,
            Self::NotAFile { .. } => ErrorSeverity::UserError,
        }
    }

    /// エラーメッセージの下に表示するヒント
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::FileNotFound { .. } => {
                Some("Please check the file path and ensure the file exists.")
            }
            Self::NotAFile { .. } => Some(
                "You cannot upload a directory. Files after it in the list were not processed.",
            ),
        }
    }
}
