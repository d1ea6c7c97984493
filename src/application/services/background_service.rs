//! Decorative page background from a public image provider.

use std::rc::Rc;

use rand::Rng;

use crate::config::PageConfig;
use crate::domain::entities::ImageList;
use crate::domain::ports::{BackgroundTarget, HttpClient};
use crate::error::BackgroundImageError;

/// Fetches the provider's image list and applies one image as the background.
///
/// Purely cosmetic: failures are returned for logging and leave the page
/// without a background. There is no cache and no retry.
pub struct BackgroundImageFetcher<H, T>
where
    H: HttpClient + ?Sized,
    T: BackgroundTarget + ?Sized,
{
    http: Rc<H>,
    target: Rc<T>,
    api: String,
    token: String,
}

impl<H, T> BackgroundImageFetcher<H, T>
where
    H: HttpClient + ?Sized,
    T: BackgroundTarget + ?Sized,
{
    pub fn new(http: Rc<H>, target: Rc<T>, config: &PageConfig) -> Self {
        Self {
            http,
            target,
            api: config.background_api.clone(),
            token: config.background_token.clone(),
        }
    }

    /// Provider URL with the token query parameter.
    pub fn request_url(&self) -> String {
        match url::Url::parse_with_params(&self.api, &[("token", self.token.as_str())]) {
            Ok(url) => url.into(),
            Err(_) => format!("{}?token={}", self.api, self.token),
        }
    }

    /// Fetches the list, picks an entry with `rng` and applies it.
    ///
    /// Returns the CSS value that was applied.
    ///
    /// # Errors
    ///
    /// Returns [`BackgroundImageError`] on transport failure, a non-2xx
    /// status, an undecodable body, or an empty list.
    pub async fn fetch_and_apply<R: Rng>(
        &self,
        rng: &mut R,
    ) -> Result<String, BackgroundImageError> {
        let response = self.http.get(&self.request_url()).await?;

        if !response.is_success() {
            return Err(BackgroundImageError::Status {
                status: response.status,
            });
        }

        let list: ImageList = serde_json::from_slice(&response.body)?;
        let entry = list.pick(rng).ok_or(BackgroundImageError::Empty)?;
        let css_value = entry.css_value();

        self.target.set_background(&css_value);
        tracing::debug!(
            image = %entry.image_url,
            candidates = list.data.len(),
            "background applied"
        );

        Ok(css_value)
    }
}
