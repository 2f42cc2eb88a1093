//! プレゼンテーション層: コンソール出力
//!
//! 各ターゲットの結果は grep しやすいよう `[TAG]` 付きで stdout に出す。
//! 進捗バーとプロンプトは stderr を使う。

use crate::commands::result::{CommandResult, SetupResult};
use crate::domain::outcome::UploadResult;
use crate::transfer::pipeline::BatchSummary;
use std::path::Path;

pub fn print_uploading(path: &Path) {
    println!("[UPLOADING]: {}", path.display());
}

pub fn print_downloaded(path: &Path) {
    println!("[DOWNLOADED]: {}", path.display());
}

pub fn print_error(message: &str) {
    println!("[ERROR]: {}", message);
}

pub fn print_upload_result(result: &UploadResult) {
    println!("{}", format_upload_result(result));
}

/// 成功時は両方のURLを `[SUCCESS]` で、失敗時はメッセージと種別を `[ERROR]` で整形
pub fn format_upload_result(result: &UploadResult) -> String {
    match result {
        UploadResult::Success {
            short_url,
            full_url,
        } => format!(
            "[SUCCESS]: Your file has been successfully uploaded:\nFull URL: {}\nShort URL: {}",
            full_url, short_url
        ),
        UploadResult::Failure {
            error_type,
            message,
        } => format!("[ERROR]: {}\n{}", message, error_type),
    }
}

fn format_summary(action: &str, summary: &BatchSummary) -> String {
    format!(
        "{} {} of {} file(s) ({} failed)",
        action,
        summary.succeeded,
        summary.total(),
        summary.failed
    )
}

fn format_setup(result: &SetupResult) -> String {
    match (&result.custom_url, result.changed) {
        (Some(url), true) => format!(
            "Configuration updated successfully.\nUpload endpoint: {}\nSaved to: {}",
            url, result.config_path
        ),
        (Some(url), false) => format!("Configuration unchanged.\nUpload endpoint: {}", url),
        (None, _) => "Configuration unchanged. The built-in upload endpoint is used.".to_string(),
    }
}

/// コマンドの最終結果を表示する
pub fn output_result(result: &CommandResult) {
    match result {
        CommandResult::Setup(r) => println!("{}", format_setup(r)),
        CommandResult::Upload(summary) => {
            if summary.total() > 1 {
                println!("{}", format_summary("Uploaded", summary));
            }
        }
        CommandResult::Download(summary) => {
            if summary.total() > 1 {
                println!("{}", format_summary("Transferred", summary));
            }
        }
        CommandResult::Version { version } => println!("{}", version),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_shows_both_urls() {
        let text = format_upload_result(&UploadResult::success("https://s", "https://f"));

        assert!(text.starts_with("[SUCCESS]"));
        assert!(text.contains("Full URL: https://f"));
        assert!(text.contains("Short URL: https://s"));
    }

    #[test]
    fn test_failure_shows_message_and_type() {
        let text = format_upload_result(&UploadResult::failure("ERROR_FILE_INVALID", "bad file"));

        assert_eq!(text, "[ERROR]: bad file\nERROR_FILE_INVALID");
    }

    #[test]
    fn test_summary_counts() {
        let summary = BatchSummary {
            succeeded: 2,
            failed: 1,
        };

        assert_eq!(
            format_summary("Uploaded", &summary),
            "Uploaded 2 of 3 file(s) (1 failed)"
        );
    }

    #[test]
    fn test_setup_messages() {
        let updated = SetupResult {
            custom_url: Some("https://file.io".to_string()),
            changed: true,
            config_path: "/tmp/config.toml".to_string(),
        };
        assert!(format_setup(&updated).starts_with("Configuration updated successfully."));

        let untouched = SetupResult {
            custom_url: None,
            changed: false,
            config_path: "/tmp/config.toml".to_string(),
        };
        assert!(format_setup(&untouched).contains("built-in"));
    }
}
