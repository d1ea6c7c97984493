//! Application layer: one service per page feature, plus page setup.
//!
//! Services consume the port traits from [`crate::domain::ports`] and expose
//! the event handlers the browser layer binds to.
//!
//! # Available Services
//!
//! - [`services::form_service::FormController`] - Live validation and submit gating
//! - [`services::captcha_service::CaptchaRefresher`] - Captcha fetch and blob URL lifecycle
//! - [`services::password_toggle::PasswordToggle`] - Password visibility latch
//! - [`services::chart_service::UsageChartRenderer`] - Dashboard usage chart
//! - [`services::background_service::BackgroundImageFetcher`] - Decorative background
//! - [`page::PageSetup`] - Synchronous page-ready leaves (footer, clipboard, chart)

pub mod page;
pub mod services;
