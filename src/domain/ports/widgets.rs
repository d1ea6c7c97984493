//! Third-party page widgets, reduced to the single call the page makes on each.

use crate::domain::entities::UsageSeries;
use crate::error::WidgetError;

/// Click-to-copy behaviour for elements matching a selector.
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardService {
    /// # Errors
    ///
    /// Returns [`WidgetError`] if the clipboard widget is not loaded.
    fn enable(&self, selector: &str) -> Result<(), WidgetError>;
}

/// Area chart rendering into a mount element.
#[cfg_attr(test, mockall::automock)]
pub trait ChartService {
    /// # Errors
    ///
    /// Returns [`WidgetError`] if the charting widget is missing or throws.
    fn render(&self, container: &str, series: &UsageSeries) -> Result<(), WidgetError>;
}
