//! HTTPクライアント
//!
//! reqwest の薄いラッパーで、通信エラーを `InfraError` に変換する。
//! タイムアウトは設定せず、reqwest のデフォルトに従う。

use crate::api::error::InfraError;
use reqwest::multipart::Form;
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder, Response, Url};

type ApiResult<T> = Result<T, InfraError>;

pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    /// アップロード先用のクライアント（リダイレクトは追わない）
    pub fn for_upload() -> ApiResult<Self> {
        Self::build(Client::builder().redirect(Policy::none()))
    }

    /// ダウンロード元用のクライアント（リダイレクトを追う）
    pub fn for_download() -> ApiResult<Self> {
        Self::build(Client::builder())
    }

    fn build(builder: reqwest::ClientBuilder) -> ApiResult<Self> {
        let client = builder
            .build()
            .map_err(|e| InfraError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// multipart フォームを POST
    pub async fn post_multipart(&self, url: &str, form: Form) -> ApiResult<Response> {
        let request = self.client.post(url).multipart(form);
        Self::send_with_error_handling(request, url, "POST").await
    }

    /// ヘッダーのみの事前確認
    pub async fn head(&self, url: &Url) -> ApiResult<Response> {
        let request = self.client.head(url.clone());
        Self::send_with_error_handling(request, url.as_str(), "HEAD").await
    }

    /// GET（ボディは呼び出し側が `Response::chunk` で読む）
    pub async fn get(&self, url: &Url) -> ApiResult<Response> {
        let request = self.client.get(url.clone());
        Self::send_with_error_handling(request, url.as_str(), "GET").await
    }

    async fn send_with_error_handling(
        request: RequestBuilder,
        target: &str,
        method: &str,
    ) -> ApiResult<Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                InfraError::timeout(format!("{} {}", method, target))
            } else if e.is_connect() {
                InfraError::no_network(format!(
                    "Connection failed for {} {}: {}",
                    method, target, e
                ))
            } else {
                InfraError::network(format!("Request failed for {} {}: {}", method, target, e))
            }
        })
    }
}
