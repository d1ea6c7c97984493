//! HTTP port used by the captcha refresher and the background fetcher.

use async_trait::async_trait;

use crate::error::HttpError;

/// A fully read HTTP response.
///
/// Header names are matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Minimal GET-only HTTP client.
///
/// Futures are `!Send`: the page runs on a single event loop.
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait HttpClient {
    /// Issues a GET and reads the whole body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the request could not be sent and
    /// [`HttpError::Body`] if the body could not be read. Non-2xx statuses are
    /// not errors at this level.
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}
