//! Browser adapters for the domain ports.
//!
//! Compiled for `wasm32` only. Each adapter is a thin shim over `web-sys`,
//! `js-sys` or `gloo-net`; all decisions live in the services.
//!
//! # Modules
//!
//! - [`http`] - `gloo-net` backed [`crate::domain::ports::HttpClient`]
//! - [`object_urls`] - Blob URLs for the captcha image
//! - [`dom`] - Inputs, buttons, captcha image, password toggle, footer, background
//! - [`widgets`] - ClipboardJS and ECharts globals

pub mod dom;
pub mod http;
pub mod object_urls;
pub mod widgets;

pub use dom::{DomBackground, DomCaptchaView, DomField, DomFooter, DomPasswordView, DomSubmit};
pub use http::GlooHttpClient;
pub use object_urls::BlobObjectUrls;
pub use widgets::{ClipboardJs, EChartsService};

use wasm_bindgen::JsValue;

/// Best-effort text of a thrown JS value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &JsValue::from_str("message"))
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}
