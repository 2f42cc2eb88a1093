use crate::config::APP_CONFIG;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// アップロード済みURLの追記専用ログ（1行1件）
///
/// 書き込みのたびに追記モードで開き、読み返すことはない。
#[derive(Debug, Clone)]
pub struct UploadLog {
    path: PathBuf,
}

impl UploadLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 作業ディレクトリの `urls.txt`
    pub fn in_current_dir() -> Self {
        Self::new(APP_CONFIG.transfer.upload_log_file)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `url` を1行として1回の書き込みで追記
    pub async fn append(&self, url: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", url).as_bytes()).await?;
        file.flush().await
    }
}
