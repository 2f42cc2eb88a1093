//! 転送パイプライン
//!
//! ファイルをアップロード先へ、URLのリソースをディスクへ、1件ずつストリーミングする。
//! ターゲットごとの失敗は値で返し、致命的な場合のみエラーとして返す。

pub mod downloader;
pub mod pipeline;
pub mod upload_log;
pub mod uploader;

use crate::domain::outcome::LoggedUrl;

/// アップローダーの設定（CLI層で解決済み）
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// エンドポイントURL（ユーザー設定またはデフォルトから解決済み）
    pub endpoint: String,
    /// file.io 形式のホストが解釈する保持期間（例: `1w`）
    pub expires: Option<String>,
    pub logged_url: LoggedUrl,
    pub show_progress: bool,
}

impl UploadOptions {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            expires: None,
            logged_url: LoggedUrl::default(),
            show_progress: true,
        }
    }

    pub fn with_expires(mut self, expires: Option<String>) -> Self {
        self.expires = expires.filter(|e| !e.trim().is_empty());
        self
    }

    pub fn with_logged_url(mut self, logged_url: LoggedUrl) -> Self {
        self.logged_url = logged_url;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// multipart フォームの送信先URL
    pub fn target_url(&self) -> String {
        match &self.expires {
            Some(expires) => format!(
                "{}/?expires={}",
                self.endpoint.trim_end_matches('/'),
                expires.trim()
            ),
            None => self.endpoint.clone(),
        }
    }
}

/// ダウンロード後アップロードの設定
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// 保存先ディレクトリ（なければ作成）
    pub destination: std::path::PathBuf,
    /// アップロード後にローカルのコピーを削除
    pub delete: bool,
}
