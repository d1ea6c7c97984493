//! Blob-backed object URLs.

use js_sys::{Array, Uint8Array};
use web_sys::{Blob, BlobPropertyBag, Url};

use crate::domain::ports::ObjectUrls;
use crate::error::WidgetError;
use crate::infrastructure::js_message;

#[derive(Debug, Default, Clone, Copy)]
pub struct BlobObjectUrls;

impl ObjectUrls for BlobObjectUrls {
    fn create(&self, bytes: &[u8], content_type: &str) -> Result<String, WidgetError> {
        let parts = Array::of1(&Uint8Array::from(bytes));
        let options = BlobPropertyBag::new();
        options.set_type(content_type);

        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
            .map_err(|e| WidgetError::new("blob", js_message(&e)))?;

        Url::create_object_url_with_blob(&blob)
            .map_err(|e| WidgetError::new("blob", js_message(&e)))
    }

    fn revoke(&self, url: &str) {
        if let Err(e) = Url::revoke_object_url(url) {
            tracing::warn!(url, error = %js_message(&e), "failed to revoke object URL");
        }
    }
}
