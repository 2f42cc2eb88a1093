//! インフラ層のエラー
//!
//! 外部とのやり取りで起きる失敗（ネットワーク、HTTPクライアントに渡すURL、
//! ローカルファイルシステム）。
//! 原因チェーンは #[source] で保持する。

use crate::error_severity::ErrorSeverity;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfraError {
    /// ホストに到達できない
    #[error("no internet connection: {message}")]
    NoNetwork { message: String },

    /// その他の通信エラー
    #[error("network error: {message}")]
    Network { message: String },

    /// リクエストのタイムアウト
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// 絶対URLとして解析できない（多くはスキーム抜け）
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// ローカルI/Oエラー
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },
}

impl InfraError {
    pub fn no_network(message: impl Into<String>) -> Self {
        Self::NoNetwork {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// 終了コードを決めるための深刻度
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidUrl { .. } => ErrorSeverity::UserError,
            _ => ErrorSeverity::SystemError,
        }
    }

    /// エラーメッセージの下に表示するヒント
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::InvalidUrl { .. } => {
                Some("Include the scheme, for example https://example.com/file.zip")
            }
            Self::NoNetwork { .. } => Some("Check your internet connection."),
            _ => None,
        }
    }
}
