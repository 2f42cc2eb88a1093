//! アップロードAPIのレスポンス型
//!
//! 対応ホストは複数の JSON 形式のいずれかで応答する。
//! 各形式を順に試し、どれにも当てはまらなければ生のボディを持つ失敗とする。

use crate::domain::outcome::{UploadResult, failure_kind};
use serde::Deserialize;
use serde_json::Value;

/// anonymfile 形式の成功: `data.file.url.{short,full}`
#[derive(Debug, Deserialize)]
struct UploadedPayload {
    data: UploadedData,
}

#[derive(Debug, Deserialize)]
struct UploadedData {
    file: UploadedFile,
}

#[derive(Debug, Deserialize)]
struct UploadedFile {
    url: FileUrls,
}

#[derive(Debug, Deserialize)]
struct FileUrls {
    short: String,
    full: String,
}

/// file.io 形式の成功: トップレベルの `link` のみ
#[derive(Debug, Deserialize)]
struct LinkPayload {
    link: String,
}

/// エラーボディ（宣言順に試す）
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    /// `{"error": {"message": "...", "type": "..."}}`
    Nested { error: NestedError },
    /// `{"error": "...", "message": "..."}`
    Flat { error: String, message: String },
}

#[derive(Debug, Deserialize)]
struct NestedError {
    message: String,
    #[serde(rename = "type")]
    kind: String,
}

/// レスポンスボディを `UploadResult` に変換する。失敗しない。
pub fn classify_response(body: &str) -> UploadResult {
    let value = match serde_json::from_str::<Value>(body) {
        Ok(value @ Value::Object(_)) => value,
        _ => return unrecognised(body),
    };

    if has_truthy_status(&value) {
        if let Ok(payload) = UploadedPayload::deserialize(&value) {
            let urls = payload.data.file.url;
            return UploadResult::success(urls.short, urls.full);
        }
        if let Ok(payload) = LinkPayload::deserialize(&value) {
            return UploadResult::success(payload.link.clone(), payload.link);
        }
    }

    match ErrorPayload::deserialize(&value) {
        Ok(ErrorPayload::Nested { error }) => UploadResult::failure(error.kind, error.message),
        Ok(ErrorPayload::Flat { error, message }) => UploadResult::failure(error, message),
        Err(_) => unrecognised(body),
    }
}

fn unrecognised(body: &str) -> UploadResult {
    UploadResult::failure(failure_kind::INVALID_RESPONSE, body)
}

fn has_truthy_status(value: &Value) -> bool {
    ["status", "success"]
        .iter()
        .filter_map(|key| value.get(key))
        .any(is_truthy)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
