//! DOM capabilities, one narrow trait per bound element.

/// A validated input together with its inline error slot.
#[cfg_attr(test, mockall::automock)]
pub trait FieldControl {
    /// Current raw value of the input.
    fn read_value(&self) -> String;

    /// Replaces the text of the error slot; an empty message clears it.
    fn set_error(&self, message: &str);

    fn set_invalid_style(&self, invalid: bool);
}

/// The submit button of a form.
#[cfg_attr(test, mockall::automock)]
pub trait SubmitControl {
    fn disable(&self);

    /// Replaces the button label with a busy indicator followed by `label`.
    fn show_busy(&self, label: &str);
}

/// The captcha image and the hidden token field submitted with the form.
#[cfg_attr(test, mockall::automock)]
pub trait CaptchaView {
    fn set_token(&self, token: &str);

    fn set_image(&self, url: &str);

    /// Shows `message` on the image in place of a challenge.
    fn show_fallback(&self, message: &str);
}

/// A password input and the icon of its visibility toggle.
#[cfg_attr(test, mockall::automock)]
pub trait PasswordView {
    /// True while the input masks its value.
    fn is_masked(&self) -> bool;

    fn set_masked(&self, masked: bool);

    /// Swaps the icon class `remove` for `add`.
    fn swap_icon(&self, add: &str, remove: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait BackgroundTarget {
    /// Sets the CSS `background-image` value.
    fn set_background(&self, css_value: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait FooterTarget {
    fn set_text(&self, text: &str);
}
