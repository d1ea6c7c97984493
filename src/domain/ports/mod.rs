//! Port traits: every page capability the services depend on.
//!
//! Services are generic over these traits so they can run against the real
//! DOM in the browser and against mocks or fakes in tests.
//!
//! # Implementations
//!
//! - `crate::infrastructure` - `web-sys` / `gloo-net` adapters (wasm32 only)
//! - Mocks generated via `mockall` under `cfg(test)`
//! - Hand-written fakes in `tests/common`

pub mod dom;
pub mod http;
pub mod object_urls;
pub mod widgets;

pub use dom::{
    BackgroundTarget, CaptchaView, FieldControl, FooterTarget, PasswordView, SubmitControl,
};
pub use http::{HttpClient, HttpResponse};
pub use object_urls::ObjectUrls;
pub use widgets::{ChartService, ClipboardService};

#[cfg(test)]
pub use dom::{
    MockBackgroundTarget, MockCaptchaView, MockFieldControl, MockFooterTarget, MockPasswordView,
    MockSubmitControl,
};
#[cfg(test)]
pub use http::MockHttpClient;
#[cfg(test)]
pub use object_urls::MockObjectUrls;
#[cfg(test)]
pub use widgets::{MockChartService, MockClipboardService};
