//! # panel-web
//!
//! Browser-side controller for the login, register and dashboard pages of the
//! QQ bot management panel. Compiles to WebAssembly for the browser and to a
//! native library for tests.
//!
//! ## Architecture
//!
//! The page logic is split the same way a service would be:
//!
//! - **Domain Layer** ([`domain`]) - Field rules, footer arithmetic, entities and port traits
//! - **Application Layer** ([`application`]) - One service per page feature, plus page setup
//! - **Infrastructure Layer** (`infrastructure`, wasm32 only) - `web-sys` / `gloo-net` adapters
//! - **Web Layer** (`web`, wasm32 only) - Page-ready entry point and event wiring
//!
//! ## Features
//!
//! - Live validation of the login and register forms, with submit gating
//! - Captcha refresh with blob URL lifecycle and stale-response protection
//! - Password visibility toggle
//! - Dashboard usage chart and click-to-copy helper
//! - Footer uptime line and decorative background image
//!
//! ## Configuration
//!
//! The page controller reads its settings from `data-*` attributes on
//! `<body>` via [`config::PageConfig`]. See [`config`] for the list.
//!
//! ## Testing
//!
//! Services depend only on the traits in [`domain::ports`], so everything
//! except the thin browser adapters runs under `cargo test` against mocks and
//! fakes.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod infrastructure;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::PageConfig;
pub use error::{BackgroundImageError, CaptchaError, ChartDataError, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for integration tests.
pub mod prelude {
    pub use crate::application::page::{ChartBinding, Feature, PageBindings, PageSetup};
    pub use crate::application::services::captcha_service::RefreshOutcome;
    pub use crate::application::services::{
        BackgroundImageFetcher, CaptchaRefresher, ChartIsland, FormController, PasswordToggle,
        SubmitOutcome, UsageChartRenderer,
    };
    pub use crate::config::PageConfig;
    pub use crate::domain::entities::{FieldKey, FormKind, UsageSeries};
    pub use crate::domain::ports::{
        BackgroundTarget, CaptchaView, ChartService, ClipboardService, FieldControl,
        FooterTarget, HttpClient, HttpResponse, ObjectUrls, PasswordView, SubmitControl,
    };
    pub use crate::domain::validation::validate;
    pub use crate::error::{HttpError, WidgetError};
}
