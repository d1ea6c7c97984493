//! Page configuration read from `data-*` attributes on `<body>`.
//!
//! The server-rendered template carries every tunable of the page controller
//! as an attribute, so the controller has no hidden globals:
//!
//! ```html
//! <body data-web-time="2023-03-01"
//!       data-background-token="..."
//!       data-log-level="debug">
//! ```
//!
//! ## Optional Attributes
//!
//! - `data-web-time` - Site launch date, `YYYY-MM-DD` (default: `2024-01-01`)
//! - `data-captcha-endpoint` - Captcha image route (default: `/auth/captcha`)
//! - `data-captcha-header` - Response header carrying the token (default: `X-Captcha-ID`)
//! - `data-captcha-field` - Hidden form field receiving the token (default: `captcha_id`)
//! - `data-captcha-retry` - Text shown when the captcha fails to load
//! - `data-background-api` - Image provider URL (default: the Bing mirror)
//! - `data-background-token` - Image provider token; empty disables backgrounds
//! - `data-copy-selector` - Elements that copy on click (default: `.copy-btn`)
//! - `data-login-busy` / `data-register-busy` - Submit labels while submitting
//! - `data-icon-show` / `data-icon-hide` - Password toggle icon classes
//! - `data-log-level` - Log filter (default: `info`)
//! - `data-log-format` - `text` or `json` (default: `text`)
//!
//! ## Background Images
//!
//! The image provider requires a token and no token ships with the page, so
//! backgrounds are off by default. Setting `data-background-token` turns the
//! fetch on; see [`PageConfig::is_background_enabled`].

use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const DEFAULT_WEB_TIME: &str = "2024-01-01";
pub const DEFAULT_BACKGROUND_API: &str = "https://api.makuo.cc/api/get.img.bing";

/// Page controller configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageConfig {
    /// Site launch date used by the footer uptime counter.
    pub web_time: NaiveDate,
    pub captcha_endpoint: String,
    pub captcha_header: String,
    pub captcha_field: String,
    pub captcha_retry_message: String,
    pub background_api: String,
    /// Token for the image provider. Backgrounds are disabled while empty.
    pub background_token: String,
    pub copy_selector: String,
    pub login_busy_label: String,
    pub register_busy_label: String,
    /// Icon class shown while the password is masked.
    pub icon_show_class: String,
    /// Icon class shown while the password is visible.
    pub icon_hide_class: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            web_time: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            captcha_endpoint: "/auth/captcha".to_string(),
            captcha_header: "X-Captcha-ID".to_string(),
            captcha_field: "captcha_id".to_string(),
            captcha_retry_message: "验证码加载失败，点击重试".to_string(),
            background_api: DEFAULT_BACKGROUND_API.to_string(),
            background_token: String::new(),
            copy_selector: ".copy-btn".to_string(),
            login_busy_label: "登录中...".to_string(),
            register_busy_label: "注册中...".to_string(),
            icon_show_class: "bi-eye".to_string(),
            icon_hide_class: "bi-eye-slash".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl PageConfig {
    /// Builds a configuration from attribute lookups, falling back to defaults.
    ///
    /// `lookup` receives full attribute names such as `data-web-time`. Blank
    /// values count as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if `data-web-time` is present but not a valid date.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let web_time = match get("data-web-time") {
            Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                .with_context(|| format!("data-web-time must be YYYY-MM-DD, got '{raw}'"))?,
            None => defaults.web_time,
        };

        Ok(Self {
            web_time,
            captcha_endpoint: get("data-captcha-endpoint").unwrap_or(defaults.captcha_endpoint),
            captcha_header: get("data-captcha-header").unwrap_or(defaults.captcha_header),
            captcha_field: get("data-captcha-field").unwrap_or(defaults.captcha_field),
            captcha_retry_message: get("data-captcha-retry")
                .unwrap_or(defaults.captcha_retry_message),
            background_api: get("data-background-api").unwrap_or(defaults.background_api),
            background_token: get("data-background-token").unwrap_or(defaults.background_token),
            copy_selector: get("data-copy-selector").unwrap_or(defaults.copy_selector),
            login_busy_label: get("data-login-busy").unwrap_or(defaults.login_busy_label),
            register_busy_label: get("data-register-busy")
                .unwrap_or(defaults.register_busy_label),
            icon_show_class: get("data-icon-show").unwrap_or(defaults.icon_show_class),
            icon_hide_class: get("data-icon-hide").unwrap_or(defaults.icon_hide_class),
            log_level: get("data-log-level").unwrap_or(defaults.log_level),
            log_format: get("data-log-format").unwrap_or(defaults.log_format),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the captcha header or field name is empty
    /// - the captcha endpoint is neither a path nor an http(s) URL
    /// - the background API is not an `https://` URL
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.captcha_header.is_empty() {
            anyhow::bail!("data-captcha-header must not be empty");
        }

        if self.captcha_field.is_empty() {
            anyhow::bail!("data-captcha-field must not be empty");
        }

        if !self.captcha_endpoint.starts_with('/') && !self.captcha_endpoint.starts_with("http") {
            anyhow::bail!(
                "data-captcha-endpoint must be a path or an http(s) URL, got '{}'",
                self.captcha_endpoint
            );
        }

        let api = url::Url::parse(&self.background_api).with_context(|| {
            format!(
                "data-background-api is not a valid URL: '{}'",
                self.background_api
            )
        })?;
        if api.scheme() != "https" {
            anyhow::bail!(
                "data-background-api must use https, got '{}'",
                self.background_api
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "data-log-format must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Returns whether the decorative background fetch is enabled.
    pub fn is_background_enabled(&self) -> bool {
        !self.background_token.is_empty()
    }

    /// Logs a configuration summary (without the provider token).
    pub fn print_summary(&self) {
        tracing::info!("Page configuration loaded:");
        tracing::info!("  Launch date: {}", self.web_time);
        tracing::info!(
            "  Captcha: {} ({} -> {})",
            self.captcha_endpoint,
            self.captcha_header,
            self.captcha_field
        );

        if self.is_background_enabled() {
            tracing::info!(
                "  Background: {} (token {})",
                self.background_api,
                mask_token(&self.background_token)
            );
        } else {
            tracing::info!("  Background: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks a secret for logging, keeping at most its first four characters.
///
/// - `0123456789abcdef` → `0123***`
/// - `abc` → `***`
fn mask_token(token: &str) -> String {
    if token.chars().count() <= 4 {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(4).collect();
    format!("{prefix}***")
}

/// Loads and validates the page configuration.
///
/// # Errors
///
/// Returns an error if an attribute cannot be parsed or validation fails.
pub fn load<F>(lookup: F) -> Result<PageConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let config = PageConfig::from_lookup(lookup)?;
    config.validate()?;
    Ok(config)
}
