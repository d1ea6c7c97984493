//! Error taxonomy for the page controller.
//!
//! Every error here is recovered at the boundary of the feature that raised it:
//! validation errors land in an inline error slot, captcha errors turn into a
//! retry hint on the image, and background/chart errors are only logged. None of
//! them is fatal to the page.

use thiserror::Error;

use crate::domain::entities::FieldKey;

/// A single field failed its validation rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: FieldKey,
    pub message: &'static str,
}

impl ValidationError {
    pub fn new(field: FieldKey, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// Transport-level failure reported by an [`crate::domain::ports::HttpClient`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("network error: {0}")]
    Network(String),
    #[error("response body could not be read: {0}")]
    Body(String),
}

/// Failure of one captcha refresh.
#[derive(Debug, Error)]
pub enum CaptchaError {
    #[error("captcha request failed: {0}")]
    Transport(#[from] HttpError),

    #[error("captcha endpoint returned HTTP {status}")]
    Fetch { status: u16 },

    #[error("captcha response is missing the {header} header")]
    TokenMissing { header: String },

    #[error("captcha image could not be displayed: {0}")]
    Image(String),
}

/// Failure of the decorative background fetch.
#[derive(Debug, Error)]
pub enum BackgroundImageError {
    #[error("background request failed: {0}")]
    Transport(#[from] HttpError),

    #[error("background provider returned HTTP {status}")]
    Status { status: u16 },

    #[error("background provider sent an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("background provider returned no images")]
    Empty,
}

/// The chart data island could not be turned into a series.
#[derive(Debug, Error)]
pub enum ChartDataError {
    #[error("chart data attribute `{attribute}` is missing")]
    Missing { attribute: &'static str },

    #[error("chart data attribute `{attribute}` is not valid JSON: {source}")]
    Malformed {
        attribute: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("chart data has {dates} dates but {counts} counts")]
    LengthMismatch { dates: usize, counts: usize },

    #[error("chart date `{0}` is not in YYYY-MM-DD form")]
    InvalidDate(String),
}

/// Failure of the usage chart render.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error(transparent)]
    Data(#[from] ChartDataError),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

/// A third-party widget (clipboard, chart) is unavailable or rejected the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{widget} widget: {message}")]
pub struct WidgetError {
    pub widget: &'static str,
    pub message: String,
}

impl WidgetError {
    pub fn new(widget: &'static str, message: impl Into<String>) -> Self {
        Self {
            widget,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display_names_field() {
        let err = ValidationError::new(FieldKey::Qq, "QQ号格式不正确");
        assert_eq!(err.to_string(), "qq: QQ号格式不正确");
    }

    #[test]
    fn test_captcha_error_from_http_error() {
        let err: CaptchaError = HttpError::Network("offline".to_string()).into();
        assert!(matches!(err, CaptchaError::Transport(_)));
        assert_eq!(err.to_string(), "captcha request failed: network error: offline");
    }

    #[test]
    fn test_chart_error_messages() {
        let err = ChartDataError::LengthMismatch { dates: 3, counts: 2 };
        assert_eq!(err.to_string(), "chart data has 3 dates but 2 counts");

        let err = ChartDataError::Missing {
            attribute: "data-dates",
        };
        assert!(err.to_string().contains("data-dates"));
    }
}
