//! Feature services for the application layer.

pub mod background_service;
pub mod captcha_service;
pub mod chart_service;
pub mod form_service;
pub mod password_toggle;

pub use background_service::BackgroundImageFetcher;
pub use captcha_service::CaptchaRefresher;
pub use chart_service::{ChartIsland, UsageChartRenderer, area_chart_option};
pub use form_service::{FormController, SubmitOutcome};
pub use password_toggle::PasswordToggle;
