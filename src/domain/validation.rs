//! Per-field validation rules for the login and register forms.
//!
//! Rules are pure and stateless. Callers trim leading and trailing whitespace
//! before validating; nothing here trims further.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::entities::FieldKey;
use crate::error::ValidationError;

/// Minimum password length, in UTF-16 code units as the browser counts them.
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// ASCII digits only; `\d` would also accept other Unicode digits.
static QQ_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5,11}$").expect("qq pattern is valid"));

pub const MSG_USERNAME_REQUIRED: &str = "请输入用户名";
pub const MSG_NAME_REQUIRED: &str = "请输入用户名";
pub const MSG_NAME_CHARSET: &str = "用户名只能包含字母和数字";
pub const MSG_EMAIL_REQUIRED: &str = "请输入邮箱";
pub const MSG_EMAIL_FORMAT: &str = "邮箱格式不正确";
pub const MSG_QQ_REQUIRED: &str = "请输入QQ号";
pub const MSG_QQ_FORMAT: &str = "QQ号应为5-11位数字";
pub const MSG_PASSWORD_REQUIRED: &str = "请输入密码";
pub const MSG_PASSWORD_LENGTH: &str = "密码长度不能少于6位";
pub const MSG_CODE_REQUIRED: &str = "请输入验证码";

/// Validates an already trimmed field value.
///
/// # Errors
///
/// Returns a [`ValidationError`] carrying the message to show in the field's
/// error slot.
///
/// # Examples
///
/// ```
/// use panel_web::domain::entities::FieldKey;
/// use panel_web::domain::validation::validate;
///
/// assert!(validate(FieldKey::Qq, "123456").is_ok());
/// assert!(validate(FieldKey::Qq, "1234").is_err());
/// assert!(validate(FieldKey::Password, "abc").is_err());
/// ```
pub fn validate(key: FieldKey, value: &str) -> Result<(), ValidationError> {
    let fail = |message| Err(ValidationError::new(key, message));

    match key {
        FieldKey::Username => {
            if value.is_empty() {
                return fail(MSG_USERNAME_REQUIRED);
            }
        }
        FieldKey::Name => {
            if value.is_empty() {
                return fail(MSG_NAME_REQUIRED);
            }
            if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
                return fail(MSG_NAME_CHARSET);
            }
        }
        FieldKey::Email => {
            if value.is_empty() {
                return fail(MSG_EMAIL_REQUIRED);
            }
            if !EMAIL_RE.is_match(value) {
                return fail(MSG_EMAIL_FORMAT);
            }
        }
        FieldKey::Qq => {
            if value.is_empty() {
                return fail(MSG_QQ_REQUIRED);
            }
            if !QQ_RE.is_match(value) {
                return fail(MSG_QQ_FORMAT);
            }
        }
        FieldKey::Password => {
            if value.is_empty() {
                return fail(MSG_PASSWORD_REQUIRED);
            }
            if value.encode_utf16().count() < MIN_PASSWORD_LEN {
                return fail(MSG_PASSWORD_LENGTH);
            }
        }
        FieldKey::Code => {
            if value.is_empty() {
                return fail(MSG_CODE_REQUIRED);
            }
        }
    }

    Ok(())
}

/// Error message for a value, empty when valid.
pub fn error_message(key: FieldKey, value: &str) -> &'static str {
    match validate(key, value) {
        Ok(()) => "",
        Err(e) => e.message,
    }
}
