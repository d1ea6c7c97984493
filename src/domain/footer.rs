//! Footer line: copyright years and site uptime.

use chrono::{Datelike, NaiveDate};

/// Builds the footer text from the site launch date and today's date.
///
/// ```
/// use chrono::NaiveDate;
/// use panel_web::domain::footer::footer_text;
///
/// let launch = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(footer_text(launch, today), "© 2023-2024 · 已稳定运行 366 天");
/// ```
pub fn footer_text(launch: NaiveDate, today: NaiveDate) -> String {
    let years = if launch.year() >= today.year() {
        launch.year().to_string()
    } else {
        format!("{}-{}", launch.year(), today.year())
    };

    format!("© {years} · 已稳定运行 {} 天", uptime_days(launch, today))
}

/// Whole days since launch; zero when the launch date is in the future.
pub fn uptime_days(launch: NaiveDate, today: NaiveDate) -> i64 {
    (today - launch).num_days().max(0)
}
