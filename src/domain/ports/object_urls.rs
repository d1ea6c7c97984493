//! Locally materialized binary resources (blob URLs).

use crate::error::WidgetError;

/// Creates and releases object URLs for in-memory binary data.
///
/// Every URL handed out by [`ObjectUrls::create`] holds browser memory until
/// it is passed to [`ObjectUrls::revoke`].
#[cfg_attr(test, mockall::automock)]
pub trait ObjectUrls {
    /// # Errors
    ///
    /// Returns [`WidgetError`] if the browser refuses to create the resource.
    fn create(&self, bytes: &[u8], content_type: &str) -> Result<String, WidgetError>;

    fn revoke(&self, url: &str);
}
