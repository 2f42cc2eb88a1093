mod api;
mod cli;
mod commands;
mod config;
mod domain;
mod error_severity;
mod presentation;
mod transfer;

#[cfg(test)]
mod test_support;

use api::error::InfraError;
use clap::Parser;
use config::APP_CONFIG;
use config::error::ConfigError;
use domain::error::DomainError;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();
    init_tracing();

    if let Err(e) = cli::run(cli).await {
        handle_error(e);
    }
}

/// 診断ログは stderr へ。`ANON_LOG` で絞り込む（デフォルトは warn のみ）
fn init_tracing() {
    let filter = EnvFilter::try_from_env(APP_CONFIG.logging.filter_env)
        .unwrap_or_else(|_| EnvFilter::new(APP_CONFIG.logging.default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// エラーチェーンを表示し、最初に見つかった型付きエラーの終了コードで終了する
fn handle_error(error: anyhow::Error) -> ! {
    let (headline, causes) = report(&error);
    eprintln!("[ERROR]: {}", headline);

    if !causes.is_empty() {
        eprintln!("\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            eprintln!("  {}: {}", i + 1, cause);
        }
    }

    if let Some(hint) = error_hint(&error) {
        eprintln!("\nHint: {}", hint);
    }

    std::process::exit(exit_code(&error));
}

/// 致命的エラーの見出しと原因一覧
///
/// 不正なURLはそれ自体を見出しにし、上位のコマンドコンテキストは省く。
fn report(error: &anyhow::Error) -> (String, Vec<String>) {
    let start = error.chain().position(is_invalid_url).unwrap_or(0);
    let mut lines = error.chain().skip(start).map(|cause| cause.to_string());
    let headline = lines.next().unwrap_or_default();
    (headline, lines.collect())
}

fn is_invalid_url(cause: &(dyn std::error::Error + 'static)) -> bool {
    matches!(
        cause.downcast_ref::<InfraError>(),
        Some(InfraError::InvalidUrl { .. })
    )
}

fn exit_code(error: &anyhow::Error) -> i32 {
    for cause in error.chain() {
        if let Some(err) = cause.downcast_ref::<DomainError>() {
            return err.severity().exit_code();
        }
        if let Some(err) = cause.downcast_ref::<InfraError>() {
            return err.severity().exit_code();
        }
        if let Some(err) = cause.downcast_ref::<ConfigError>() {
            return err.severity().exit_code();
        }
    }

    1
}

fn error_hint(error: &anyhow::Error) -> Option<&str> {
    error.chain().find_map(|cause| {
        if let Some(err) = cause.downcast_ref::<DomainError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<InfraError>() {
            err.hint()
        } else if let Some(err) = cause.downcast_ref::<ConfigError>() {
            err.hint()
        } else {
            None
        }
    })
}
