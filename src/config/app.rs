//! アプリケーション設定
//!
//! ビルド時に固定され、ユーザーは変更できない。
//! 実行時に上書きできるのはユーザー設定の `custom_url` のみ。

/// アプリケーション全体の設定
#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub transfer: TransferConfig,
    pub logging: LoggingConfig,
}

/// アップロード先の設定
#[derive(Debug, Clone, Copy)]
pub struct ApiConfig {
    /// `anon setup` 未実行時に使うエンドポイント
    pub default_endpoint: &'static str,
}

/// 転送設定
#[derive(Debug, Clone, Copy)]
pub struct TransferConfig {
    /// ダウンロード保存時の1回の書き込みサイズ（バイト）
    pub chunk_size: usize,

    /// アップロード済みURLの追記専用ログ（作業ディレクトリからの相対パス）
    pub upload_log_file: &'static str,
}

/// ログ設定
#[derive(Debug, Clone, Copy)]
pub struct LoggingConfig {
    /// tracing のフィルタ指定を読む環境変数
    pub filter_env: &'static str,

    /// 環境変数が未設定または不正なときのフィルタ
    pub default_filter: &'static str,
}

pub const APP_CONFIG: AppConfig = AppConfig {
    api: ApiConfig {
        default_endpoint: "https://anonymfile.com/api/v1/upload",
    },
    transfer: TransferConfig {
        chunk_size: 1024,
        upload_log_file: "urls.txt",
    },
    logging: LoggingConfig {
        filter_env: "ANON_LOG",
        default_filter: "warn",
    },
};
