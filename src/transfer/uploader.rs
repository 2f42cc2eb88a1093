use crate::api::client::ApiClient;
use crate::api::error::InfraError;
use crate::api::types::classify_response;
use crate::domain::outcome::{UploadResult, failure_kind};
use crate::domain::progress::Advance;
use crate::presentation::progress::TransferReporter;
use crate::transfer::UploadOptions;
use crate::transfer::upload_log::UploadLog;
use futures_util::StreamExt;
use reqwest::Body;
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tokio::fs::File;
use tokio_util::io::ReaderStream;

/// ホストがファイルを受け取る multipart フィールド名
const FILE_FIELD: &str = "file";

/// ローカルファイルを1つアップロードし、結果を分類する
///
/// 実装はエラーを返さない。失敗はすべて `UploadResult::Failure`。
pub trait FileUploader {
    fn upload(&self, path: &Path) -> impl Future<Output = UploadResult>;
}

/// 設定されたエンドポイントへ multipart フォームとしてストリーミング送信する
pub struct Uploader {
    client: ApiClient,
    options: UploadOptions,
    log: UploadLog,
}

impl Uploader {
    pub fn new(options: UploadOptions, log: UploadLog) -> Result<Self, InfraError> {
        Ok(Self {
            client: ApiClient::for_upload()?,
            options,
            log,
        })
    }

    async fn record(&self, result: &UploadResult) {
        let Some(url) = result.logged_url(self.options.logged_url) else {
            return;
        };
        match self.log.append(url).await {
            Ok(()) => tracing::info!(log = %self.log.path().display(), "upload URL recorded"),
            Err(e) => tracing::warn!(
                log = %self.log.path().display(),
                error = %e,
                "failed to record upload URL"
            ),
        }
    }
}

impl FileUploader for Uploader {
    async fn upload(&self, path: &Path) -> UploadResult {
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                return UploadResult::failure(
                    failure_kind::FILE_ERROR,
                    format!("cannot open \"{}\": {}", path.display(), e),
                );
            }
        };
        let size = file.metadata().await.ok().map(|metadata| metadata.len());
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| FILE_FIELD.to_string());

        let reporter = Arc::new(Mutex::new(TransferReporter::new(
            &file_name,
            size,
            self.options.show_progress,
        )));
        let stream_reporter = Arc::clone(&reporter);
        let mut bytes_read = 0u64;
        let stream = ReaderStream::new(file).inspect(move |chunk| {
            if let Ok(bytes) = chunk {
                bytes_read += bytes.len() as u64;
                if let Ok(mut reporter) = stream_reporter.lock() {
                    reporter.update(Advance::To(bytes_read));
                }
            }
        });

        let body = Body::wrap_stream(stream);
        let part = match size {
            Some(length) => Part::stream_with_length(body, length),
            None => Part::stream(body),
        }
        .file_name(file_name);
        let form = Form::new().part(FILE_FIELD, part);

        let url = self.options.target_url();
        tracing::debug!(file = %path.display(), %url, ?size, "uploading");

        let sent = self.client.post_multipart(&url, form).await;
        if let Ok(reporter) = reporter.lock() {
            match &sent {
                Ok(_) => reporter.finish(),
                Err(_) => reporter.abandon(),
            }
        }

        let response = match sent {
            Ok(response) => response,
            Err(InfraError::NoNetwork { message }) => {
                tracing::debug!(%message, "upload endpoint unreachable");
                return UploadResult::no_network();
            }
            Err(e) => return UploadResult::failure(failure_kind::REQUEST_FAILED, e.to_string()),
        };

        let status = response.status();
        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                return UploadResult::failure(
                    failure_kind::REQUEST_FAILED,
                    format!("failed to read response body: {}", e),
                );
            }
        };
        tracing::debug!(%status, bytes = text.len(), "upload response received");

        let result = classify_response(&text);
        self.record(&result).await;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::outcome::LoggedUrl;
    use crate::test_support::{CannedResponse, closed_port_url, serve};
    use tempfile::TempDir;

    const SUCCESS_BODY: &str = r#"{"status": true, "data": {"file": {"url": {"short": "https://h/s", "full": "https://h/f/report.txt"}}}}"#;

    fn uploader(endpoint: String, log: UploadLog) -> Uploader {
        Uploader::new(UploadOptions::new(endpoint).with_progress(false), log).expect("uploader")
    }

    fn sample_file(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("report.txt");
        std::fs::write(&path, b"quarterly numbers").expect("write sample");
        path
    }

    fn log_lines(log: &UploadLog) -> Vec<String> {
        std::fs::read_to_string(log.path())
            .map(|content| content.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_success_appends_one_log_line() {
        let server = serve(|_| CannedResponse::new(200, SUCCESS_BODY)).await;
        let dir = TempDir::new().expect("temp dir");
        let log = UploadLog::new(dir.path().join("urls.txt"));
        let file = sample_file(&dir);

        let result = uploader(server.url("/api/v1/upload"), log.clone())
            .upload(&file)
            .await;

        assert_eq!(
            result,
            UploadResult::success("https://h/s", "https://h/f/report.txt")
        );
        assert_eq!(log_lines(&log), vec!["https://h/f/report.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_request_is_multipart_with_file_field() {
        let server = serve(|_| CannedResponse::new(200, SUCCESS_BODY)).await;
        let dir = TempDir::new().expect("temp dir");
        let file = sample_file(&dir);

        uploader(
            server.url("/api/v1/upload"),
            UploadLog::new(dir.path().join("urls.txt")),
        )
        .upload(&file)
        .await;

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.path, "/api/v1/upload");
        assert!(
            request
                .header("content-type")
                .is_some_and(|value| value.starts_with("multipart/form-data"))
        );
        let body = request.body_text();
        assert!(body.contains("name=\"file\""));
        assert!(body.contains("filename=\"report.txt\""));
        assert!(body.contains("quarterly numbers"));
    }

    #[tokio::test]
    async fn test_short_url_can_be_logged() {
        let server = serve(|_| CannedResponse::new(200, SUCCESS_BODY)).await;
        let dir = TempDir::new().expect("temp dir");
        let log = UploadLog::new(dir.path().join("urls.txt"));
        let file = sample_file(&dir);
        let options = UploadOptions::new(server.url("/"))
            .with_progress(false)
            .with_logged_url(LoggedUrl::Short);

        Uploader::new(options, log.clone())
            .expect("uploader")
            .upload(&file)
            .await;

        assert_eq!(log_lines(&log), vec!["https://h/s".to_string()]);
    }

    #[tokio::test]
    async fn test_server_error_leaves_log_untouched() {
        let server = serve(|_| {
            CannedResponse::new(
                200,
                r#"{"status": false, "error": {"message": "Invalid file", "type": "ERROR_FILE_INVALID"}}"#,
            )
        })
        .await;
        let dir = TempDir::new().expect("temp dir");
        let log = UploadLog::new(dir.path().join("urls.txt"));
        let file = sample_file(&dir);

        let result = uploader(server.url("/"), log.clone()).upload(&file).await;

        assert_eq!(
            result,
            UploadResult::failure("ERROR_FILE_INVALID", "Invalid file")
        );
        assert!(!log.path().exists());
    }

    #[tokio::test]
    async fn test_non_json_body_is_reported_verbatim() {
        let server = serve(|_| CannedResponse::new(500, "oops")).await;
        let dir = TempDir::new().expect("temp dir");
        let log = UploadLog::new(dir.path().join("urls.txt"));
        let file = sample_file(&dir);

        let result = uploader(server.url("/"), log.clone()).upload(&file).await;

        assert_eq!(
            result,
            UploadResult::failure(failure_kind::INVALID_RESPONSE, "oops")
        );
        assert!(log_lines(&log).is_empty());
    }

    #[tokio::test]
    async fn test_expiry_is_sent_as_query() {
        let server = serve(|_| CannedResponse::new(200, SUCCESS_BODY)).await;
        let dir = TempDir::new().expect("temp dir");
        let file = sample_file(&dir);
        let options = UploadOptions::new(server.url(""))
            .with_progress(false)
            .with_expires(Some("1w".to_string()));

        Uploader::new(options, UploadLog::new(dir.path().join("urls.txt")))
            .expect("uploader")
            .upload(&file)
            .await;

        assert_eq!(server.requests()[0].path, "/?expires=1w");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_no_network() {
        let dir = TempDir::new().expect("temp dir");
        let log = UploadLog::new(dir.path().join("urls.txt"));
        let file = sample_file(&dir);

        let result = uploader(closed_port_url().await, log.clone())
            .upload(&file)
            .await;

        assert_eq!(result, UploadResult::no_network());
        assert!(!log.path().exists());
    }

    #[tokio::test]
    async fn test_missing_file_is_a_failure() {
        let dir = TempDir::new().expect("temp dir");
        let log = UploadLog::new(dir.path().join("urls.txt"));

        let result = uploader("http://127.0.0.1:9/".to_string(), log)
            .upload(&dir.path().join("missing.txt"))
            .await;

        assert!(matches!(
            result,
            UploadResult::Failure { ref error_type, .. } if error_type == failure_kind::FILE_ERROR
        ));
    }
}
