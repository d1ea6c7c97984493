//! Usage chart series built from the dashboard data island.

use chrono::{Datelike, NaiveDate};

use crate::error::ChartDataError;

/// Month glyphs indexed by zero-based month number.
pub const MONTH_LABELS: [&str; 12] = [
    "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
];

/// Returns the month glyph for a zero-based month, or `None` past December.
pub fn month_label(month0: u32) -> Option<&'static str> {
    MONTH_LABELS.get(month0 as usize).copied()
}

/// One day of usage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsagePoint {
    pub date: NaiveDate,
    pub label: String,
    pub count: u64,
}

/// Ordered usage points rendered as an area chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageSeries {
    pub points: Vec<UsagePoint>,
}

impl UsageSeries {
    /// Pairs parallel date and count sequences into labelled points.
    ///
    /// # Errors
    ///
    /// Returns [`ChartDataError::LengthMismatch`] if the sequences differ in
    /// length and [`ChartDataError::InvalidDate`] for a date that is not
    /// `YYYY-MM-DD`.
    pub fn from_parallel(dates: &[String], counts: &[u64]) -> Result<Self, ChartDataError> {
        if dates.len() != counts.len() {
            return Err(ChartDataError::LengthMismatch {
                dates: dates.len(),
                counts: counts.len(),
            });
        }

        let points = dates
            .iter()
            .zip(counts)
            .map(|(raw, &count)| {
                let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| ChartDataError::InvalidDate(raw.clone()))?;
                Ok(UsagePoint {
                    label: point_label(date),
                    date,
                    count,
                })
            })
            .collect::<Result<Vec<_>, ChartDataError>>()?;

        Ok(Self { points })
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn counts(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.count).collect()
    }

    pub fn total(&self) -> u64 {
        self.points.iter().map(|p| p.count).sum()
    }

    /// The busiest day, first one wins on ties.
    pub fn peak(&self) -> Option<&UsagePoint> {
        self.points
            .iter()
            .reduce(|best, p| if p.count > best.count { p } else { best })
    }
}

fn point_label(date: NaiveDate) -> String {
    // month0() is always < 12
    let month = month_label(date.month0()).unwrap_or_default();
    format!("{month}{}日", date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_month_label_lookup() {
        assert_eq!(month_label(0), Some("1月"));
        assert_eq!(month_label(11), Some("12月"));
        assert_eq!(month_label(12), None);
    }

    #[test]
    fn test_series_labels_use_month_glyphs() {
        let series =
            UsageSeries::from_parallel(&dates(&["2024-05-01", "2024-12-31"]), &[3, 7]).unwrap();

        assert_eq!(series.labels(), vec!["5月1日", "12月31日"]);
        assert_eq!(series.counts(), vec![3, 7]);
        assert_eq!(series.total(), 10);
        assert_eq!(series.peak().map(|p| p.count), Some(7));
    }

    #[test]
    fn test_series_length_mismatch() {
        let err = UsageSeries::from_parallel(&dates(&["2024-05-01"]), &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            ChartDataError::LengthMismatch {
                dates: 1,
                counts: 2
            }
        ));
    }

    #[test]
    fn test_series_invalid_date() {
        let err = UsageSeries::from_parallel(&dates(&["05/01/2024"]), &[1]).unwrap_err();
        assert!(matches!(err, ChartDataError::InvalidDate(d) if d == "05/01/2024"));
    }

    #[test]
    fn test_empty_series() {
        let series = UsageSeries::from_parallel(&[], &[]).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.total(), 0);
        assert!(series.peak().is_none());
    }

    #[test]
    fn test_peak_prefers_first_on_tie() {
        let series =
            UsageSeries::from_parallel(&dates(&["2024-01-01", "2024-01-02"]), &[5, 5]).unwrap();
        assert_eq!(series.peak().map(|p| p.label.as_str()), Some("1月1日"));
    }
}
