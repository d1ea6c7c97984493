//! Password visibility latch.

use crate::config::PageConfig;
use crate::domain::ports::PasswordView;

/// Flips a password input between masked and plain text.
///
/// The toggle holds no state of its own: it reads the input's current mode on
/// every activation, so it stays correct if something else changes the input.
pub struct PasswordToggle<V: PasswordView> {
    view: V,
    show_class: String,
    hide_class: String,
}

impl<V: PasswordView> PasswordToggle<V> {
    pub fn new(view: V, config: &PageConfig) -> Self {
        Self {
            view,
            show_class: config.icon_show_class.clone(),
            hide_class: config.icon_hide_class.clone(),
        }
    }

    /// Flips the mode; returns `true` when the password is now visible.
    pub fn toggle(&self) -> bool {
        let reveal = self.view.is_masked();
        self.view.set_masked(!reveal);

        if reveal {
            self.view.swap_icon(&self.hide_class, &self.show_class);
        } else {
            self.view.swap_icon(&self.show_class, &self.hide_class);
        }

        reveal
    }
}
