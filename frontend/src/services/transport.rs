use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

/// Status and raw body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The two verbs the frontend needs. Browser builds use [`GlooTransport`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse>;

    async fn post_json(&self, url: &str, body: &Value) -> ApiResult<HttpResponse>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get(&self, url: &str) -> ApiResult<HttpResponse> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        read_response(response).await
    }

    async fn post_json(&self, url: &str, body: &Value) -> ApiResult<HttpResponse> {
        let response = Request::post(url)
            .json(body)
            .map_err(|e| ApiError::Encode(format!("{:?}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        read_response(response).await
    }
}

async fn read_response(response: Response) -> ApiResult<HttpResponse> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

    Ok(HttpResponse { status, body })
}
