//! ドメイン層: ターゲットごとの転送結果
//!
//! 各ターゲットは必ずこのいずれか1つを返す。
//! 回復可能な失敗はエラーではなく値として扱い、`Err` になるのは致命的な場合のみ。

use std::path::PathBuf;
use thiserror::Error;

/// サーバーではなくローカルで生成する `error_type` の値
pub mod failure_kind {
    pub const NO_NETWORK: &str = "no_network";
    pub const REQUEST_FAILED: &str = "request_failed";
    pub const INVALID_RESPONSE: &str = "invalid_response";
    pub const FILE_ERROR: &str = "file_error";
}

/// ホストに到達できないときのメッセージ
pub const NO_NETWORK_MESSAGE: &str = "No internet connection";

/// アップロード1回分の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Success { short_url: String, full_url: String },
    Failure { error_type: String, message: String },
}

/// アップロードログに記録するURLの種類
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoggedUrl {
    #[default]
    Full,
    Short,
}

impl UploadResult {
    pub fn success(short_url: impl Into<String>, full_url: impl Into<String>) -> Self {
        Self::Success {
            short_url: short_url.into(),
            full_url: full_url.into(),
        }
    }

    pub fn failure(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failure {
            error_type: error_type.into(),
            message: message.into(),
        }
    }

    pub fn no_network() -> Self {
        Self::failure(failure_kind::NO_NETWORK, NO_NETWORK_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// 記録するURL（失敗時は `None`）
    pub fn logged_url(&self, which: LoggedUrl) -> Option<&str> {
        match (self, which) {
            (Self::Success { full_url, .. }, LoggedUrl::Full) => Some(full_url.as_str()),
            (Self::Success { short_url, .. }, LoggedUrl::Short) => Some(short_url.as_str()),
            (Self::Failure { .. }, _) => None,
        }
    }
}

/// 致命的エラー以外で終わったダウンロード1回分の結果
#[derive(Debug)]
pub enum DownloadOutcome {
    /// このパスに保存した
    Saved(PathBuf),
    Failed(DownloadFailure),
}

/// ダウンロードでファイルが得られなかった理由
#[derive(Error, Debug)]
pub enum DownloadFailure {
    #[error("No internet connection")]
    NoNetwork,

    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} answered with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("cannot determine a file name for {url}; no Content-Disposition and no name in the URL path")]
    NoFilename { url: String },

    /// 途中までのファイルはディスクに残る
    #[error("connection lost while downloading {url} (partial file kept at {partial})")]
    ConnectionLost { url: String, partial: String },

    #[error("{context}: {message}")]
    Io { context: String, message: String },
}
