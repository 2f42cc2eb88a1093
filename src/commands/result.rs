//! コマンド実行結果
//!
//! 各コマンドはこのいずれかを返し、表示方法はプレゼンテーション層が決める。

use crate::transfer::pipeline::BatchSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    Setup(SetupResult),
    Upload(BatchSummary),
    Download(BatchSummary),
    Version { version: &'static str },
}

/// `anon setup` の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupResult {
    /// 実行後に保存されているエンドポイント
    pub custom_url: Option<String>,
    /// プロンプトが空のままなら false
    pub changed: bool,
    pub config_path: String,
}
