//! JSON HTTP Client
//!
//! Thin wrapper over `reqwest` that prefixes the API origin and turns non-2xx
//! responses into `ApiError::Status`.

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    client: Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let resp = self.send(self.request(Method::GET, path)).await?;
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a JSON body and discard the acknowledgement
    pub async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> ApiResult<()> {
        self.send(self.request(method, path).json(body)).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.send(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        log::debug!("[HTTP] {} {}", method, path);
        self.client
            .request(method, self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
    }

    async fn send(&self, req: RequestBuilder) -> ApiResult<Response> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::Status { status: status.as_u16(), body })
    }
}
