//! Captcha refresh: fetch a challenge, show it, release the previous image.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;

use crate::config::PageConfig;
use crate::domain::entities::CaptchaChallenge;
use crate::domain::ports::{CaptchaView, HttpClient, ObjectUrls};
use crate::error::CaptchaError;

/// Result of one [`CaptchaRefresher::refresh`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The new challenge is displayed and its token stored.
    Installed,
    /// A newer refresh started while this one was in flight; its response was dropped.
    Superseded,
    /// The refresh failed and the retry message is shown.
    Failed,
}

/// Keeps the captcha image and the hidden token field in step with the backend.
///
/// Each refresh takes a new generation number. A response is applied only if
/// no newer refresh started while it was in flight, so the token submitted
/// with the form always belongs to the image on screen.
///
/// The object URL of the displayed image is owned here: it is revoked right
/// after its replacement is installed, never before.
pub struct CaptchaRefresher<H, U, V>
where
    H: HttpClient + ?Sized,
    U: ObjectUrls + ?Sized,
    V: CaptchaView + ?Sized,
{
    http: Rc<H>,
    urls: Rc<U>,
    view: Rc<V>,
    endpoint: String,
    header: String,
    retry_message: String,
    displayed: RefCell<Option<String>>,
    generation: Cell<u64>,
}

impl<H, U, V> CaptchaRefresher<H, U, V>
where
    H: HttpClient + ?Sized,
    U: ObjectUrls + ?Sized,
    V: CaptchaView + ?Sized,
{
    pub fn new(http: Rc<H>, urls: Rc<U>, view: Rc<V>, config: &PageConfig) -> Self {
        Self {
            http,
            urls,
            view,
            endpoint: config.captcha_endpoint.clone(),
            header: config.captcha_header.clone(),
            retry_message: config.captcha_retry_message.clone(),
            displayed: RefCell::new(None),
            generation: Cell::new(0),
        }
    }

    /// Object URL currently shown, if any.
    pub fn displayed_url(&self) -> Option<String> {
        self.displayed.borrow().clone()
    }

    /// Captcha URL with a cache-busting `t` parameter.
    pub fn captcha_url(&self, now_ms: i64) -> String {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("t", &now_ms.to_string())
            .finish();
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        format!("{}{separator}{query}", self.endpoint)
    }

    /// Fetches a new challenge and displays it.
    ///
    /// Failures are logged and replaced by the retry message on the image;
    /// the stored token is left untouched. Nothing is retried automatically.
    pub async fn refresh(&self) -> RefreshOutcome {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);

        let url = self.captcha_url(Utc::now().timestamp_millis());
        let fetched = self.fetch_challenge(&url).await;

        let latest = self.generation.get();
        if generation != latest {
            tracing::debug!(generation, latest, "discarding superseded captcha response");
            return RefreshOutcome::Superseded;
        }

        match fetched.and_then(|challenge| self.install(challenge)) {
            Ok(()) => {
                tracing::debug!(generation, "captcha refreshed");
                RefreshOutcome::Installed
            }
            Err(e) => {
                tracing::error!(error = %e, url = %url, "captcha refresh failed");
                self.view.show_fallback(&self.retry_message);
                RefreshOutcome::Failed
            }
        }
    }

    async fn fetch_challenge(&self, url: &str) -> Result<CaptchaChallenge, CaptchaError> {
        let response = self.http.get(url).await?;

        if !response.is_success() {
            return Err(CaptchaError::Fetch {
                status: response.status,
            });
        }

        let token = response
            .header(&self.header)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CaptchaError::TokenMissing {
                header: self.header.clone(),
            })?;
        let content_type = response.header("Content-Type").map(str::to_string);

        Ok(CaptchaChallenge::new(token, response.body, content_type))
    }

    fn install(&self, challenge: CaptchaChallenge) -> Result<(), CaptchaError> {
        let image_url = self
            .urls
            .create(&challenge.image, &challenge.content_type)
            .map_err(|e| CaptchaError::Image(e.to_string()))?;

        self.view.set_token(&challenge.token);
        self.view.set_image(&image_url);

        let previous = self.displayed.replace(Some(image_url));
        if let Some(previous) = previous {
            self.urls.revoke(&previous);
        }

        Ok(())
    }
}
