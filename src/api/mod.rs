// アップロードAPIとダウンロード元へのアクセス
//
// - client: エラー変換付きの reqwest ラッパー
// - types: アップロードレスポンスとその分類
// - error: InfraError

pub mod client;
pub mod error;
pub mod types;
