//! `gloo-net` implementation of the HTTP port.

use async_trait::async_trait;
use gloo_net::http::Request;

use crate::domain::ports::{HttpClient, HttpResponse};
use crate::error::HttpError;

/// Same-origin and CORS GETs through the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlooHttpClient;

#[async_trait(?Send)]
impl HttpClient for GlooHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| HttpError::Network(e.to_string()))?;

        let mut result = HttpResponse::new(response.status());
        for (name, value) in response.headers().entries() {
            result = result.with_header(name, value);
        }

        let body = response
            .binary()
            .await
            .map_err(|e| HttpError::Body(e.to_string()))?;

        Ok(result.with_body(body))
    }
}
