//! ドメインサービス: ダウンロードファイル名の決定
//!
//! 保存時のファイル名を選ぶ。優先順位:
//! 明示的な名前、`Content-Disposition` ヘッダー、URLのパス。

use reqwest::Url;
use reqwest::header::{CONTENT_DISPOSITION, HeaderMap};

/// これだけで構成される名前は無意味とみなす文字
const FILLER: &[char] = &[' ', '\n', '\t', '.'];

/// 保存先のファイル名を決定
///
/// どこからも名前が得られなければ空文字列を返す。
/// 呼び出し側はこれを「保存先を決められない」として扱うこと。
pub fn detect_filename(
    explicit: Option<&str>,
    url: Option<&str>,
    headers: Option<&HeaderMap>,
) -> String {
    if let Some(name) = explicit.filter(|name| !name.is_empty()) {
        return name.to_string();
    }

    headers
        .and_then(filename_from_headers)
        .or_else(|| url.and_then(filename_from_url))
        .unwrap_or_default()
}

/// URLパスの末尾要素（空またはドットのみなら `None`）
pub fn filename_from_url(url: &str) -> Option<String> {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        // 絶対URLでない場合はクエリより前をパスとみなす
        Err(_) => url.split(['?', '#']).next().unwrap_or_default().to_string(),
    };

    let name = base_name(&path);
    if name.trim_matches(FILLER).is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// `Content-Disposition` ヘッダーからの名前（ヘッダーがあり正しい形式の場合）
pub fn filename_from_headers(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(CONTENT_DISPOSITION)?.to_str().ok()?;
    filename_from_content_disposition(value)
}

/// `inline; filename="a.txt"` / `attachment; filename=a.txt` を解析
///
/// `filename=` が複数あると曖昧なので `None`。
pub fn filename_from_content_disposition(value: &str) -> Option<String> {
    let mut parts = value.split(';');

    let disposition = parts.next()?.trim().to_ascii_lowercase();
    let params: Vec<&str> = parts.collect();
    if params.is_empty() {
        return None;
    }
    if disposition != "inline" && disposition != "attachment" {
        return None;
    }

    let mut names = params
        .iter()
        .filter_map(|param| param.trim().strip_prefix("filename="));
    let raw = names.next()?;
    if names.next().is_some() {
        return None;
    }

    let unquoted = raw.trim_matches(|c| c == ' ' || c == '\t' || c == '"');
    let name = base_name(unquoted);
    if name.trim_matches(FILLER).is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// 最後のパス区切り以降
fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
