//! 設定管理
//!
//! 2層構成:
//! 1. AppConfig - コンパイル時定数（APP_CONFIG）
//! 2. UserConfig - ユーザーの config.toml（起動時に1回読み込む）
//!
//! ```rust,ignore
//! use crate::config::{APP_CONFIG, UserConfig};
//!
//! let chunk_size = APP_CONFIG.transfer.chunk_size;
//!
//! let user_config = UserConfig::load()?;
//! let endpoint = user_config.endpoint();
//! ```

pub mod app;
pub mod error;
pub mod user;

pub use app::APP_CONFIG;
pub use user::UserConfig;
