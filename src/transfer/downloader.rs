use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::config::APP_CONFIG;
use crate::domain::filename::detect_filename;
use crate::domain::outcome::{DownloadFailure, DownloadOutcome};
use crate::domain::progress::Advance;
use crate::presentation::progress::TransferReporter;
use reqwest::Url;
use reqwest::header::CONTENT_LENGTH;
use std::future::Future;
use std::path::Path;
use tokio::fs::{self, File};
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// URLを1つローカルディスクに取得する
///
/// `Err` は致命的な場合（解析できないURL）専用で、それ以外はすべて `DownloadOutcome`。
pub trait FileDownloader {
    fn download(
        &self,
        url: &str,
        custom_filename: Option<&str>,
        destination: &Path,
    ) -> impl Future<Output = Result<DownloadOutcome, InfraError>>;
}

/// HEAD で事前確認し、GET でボディを受信する
pub struct Downloader {
    client: ApiClient,
    chunk_size: usize,
    show_progress: bool,
}

impl Downloader {
    pub fn new(show_progress: bool) -> Result<Self, InfraError> {
        Ok(Self {
            client: ApiClient::for_download()?,
            chunk_size: APP_CONFIG.transfer.chunk_size,
            show_progress,
        })
    }
}

impl FileDownloader for Downloader {
    async fn download(
        &self,
        url: &str,
        custom_filename: Option<&str>,
        destination: &Path,
    ) -> Result<DownloadOutcome, InfraError> {
        let parsed = Url::parse(url).map_err(|e| InfraError::invalid_url(url, e))?;

        tracing::debug!(%url, "requesting headers");
        let head = match self.client.head(&parsed).await {
            Ok(response) => response,
            Err(e) => return Ok(failed(request_failure(url, e))),
        };

        let total = head
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok());
        let filename = detect_filename(custom_filename, Some(url), Some(head.headers()));
        if filename.is_empty() {
            return Ok(failed(DownloadFailure::NoFilename {
                url: url.to_string(),
            }));
        }

        if let Err(e) = fs::create_dir_all(destination).await {
            return Ok(failed(io_failure(
                format!("cannot create directory {}", destination.display()),
                e,
            )));
        }
        let target = destination.join(&filename);

        let mut response = match self.client.get(&parsed).await {
            Ok(response) => response,
            Err(e) => return Ok(failed(request_failure(url, e))),
        };
        let status = response.status();
        if !status.is_success() {
            return Ok(failed(DownloadFailure::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            }));
        }

        let mut file = match File::create(&target).await {
            Ok(file) => file,
            Err(e) => {
                return Ok(failed(io_failure(
                    format!("cannot create {}", target.display()),
                    e,
                )));
            }
        };

        tracing::debug!(file = %target.display(), ?total, "downloading");
        let mut reporter = TransferReporter::new(&filename, total, self.show_progress);
        loop {
            let bytes = match response.chunk().await {
                Ok(Some(bytes)) => bytes,
                Ok(None) => break,
                Err(e) => {
                    reporter.abandon();
                    let state = reporter.state();
                    tracing::warn!(
                        %url,
                        error = %e,
                        received = state.transferred(),
                        expected = ?state.total(),
                        "download interrupted"
                    );
                    return Ok(failed(DownloadFailure::ConnectionLost {
                        url: url.to_string(),
                        partial: target.display().to_string(),
                    }));
                }
            };

            if let Err(e) = write_in_pieces(&mut file, &bytes, self.chunk_size, &mut reporter).await {
                reporter.abandon();
                return Ok(failed(io_failure(
                    format!("cannot write {}", target.display()),
                    e,
                )));
            }
        }

        if let Err(e) = file.flush().await {
            reporter.abandon();
            return Ok(failed(io_failure(
                format!("cannot write {}", target.display()),
                e,
            )));
        }
        reporter.finish();
        tracing::info!(file = %target.display(), bytes = reporter.state().transferred(), "download complete");

        Ok(DownloadOutcome::Saved(target))
    }
}

/// `bytes` を最大 `chunk_size` ずつ書き込み、書くたびにレポーターを進める
async fn write_in_pieces<W>(
    writer: &mut W,
    bytes: &[u8],
    chunk_size: usize,
    reporter: &mut TransferReporter,
) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    for piece in bytes.chunks(chunk_size.max(1)) {
        writer.write_all(piece).await?;
        reporter.update(Advance::By(piece.len() as u64));
    }
    Ok(())
}

fn failed(failure: DownloadFailure) -> DownloadOutcome {
    DownloadOutcome::Failed(failure)
}

fn request_failure(url: &str, error: InfraError) -> DownloadFailure {
    match error {
        InfraError::NoNetwork { .. } => DownloadFailure::NoNetwork,
        other => DownloadFailure::Request {
            url: url.to_string(),
            message: other.to_string(),
        },
    }
}

fn io_failure(context: String, error: std::io::Error) -> DownloadFailure {
    DownloadFailure::Io {
        context,
        message: error.to_string(),
    }
}
