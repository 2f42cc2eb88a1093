//! 全レイヤーが共有するエラー深刻度
//!
//! アーキテクチャの最外層に属し、プロセスの終了コードを決める。
//!
//! **依存方向の原則:**
//! - domain / infra / config の各エラーはこの型に対応付ける
//! - このモジュールは他のモジュールに依存しない

use std::fmt;

/// ユーザーから見た失敗の深刻度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// ユーザーの入力エラー
    ///
    /// ファイルの代わりにディレクトリを渡した、ファイルがない、URLが不正など。
    ///
    /// **Exit Code: 1**
    UserError,

    /// 設定エラー
    ///
    /// 保存された設定が読めない、または不正。
    ///
    /// **Exit Code: 2**
    ConfigError,

    /// システムエラー
    ///
    /// ネットワークやファイルシステムなど、ユーザー入力以外の要因。
    ///
    /// **Exit Code: 3**
    SystemError,
}

impl ErrorSeverity {
    /// この深刻度に対応する終了コード
    pub fn exit_code(self) -> i32 {
        match self {
            Self::UserError => 1,
            Self::ConfigError => 2,
            Self::SystemError => 3,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserError => write!(f, "user error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SystemError => write!(f, "system error"),
        }
    }
}
