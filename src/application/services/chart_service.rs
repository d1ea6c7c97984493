//! Dashboard usage chart.

use std::rc::Rc;

use crate::domain::entities::UsageSeries;
use crate::domain::ports::ChartService;
use crate::error::{ChartDataError, ChartError};

pub const DATES_ATTRIBUTE: &str = "data-dates";
pub const COUNTS_ATTRIBUTE: &str = "data-counts";

/// Raw data island read from the chart mount element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartIsland {
    /// Element id the chart is mounted into.
    pub container: String,
    /// JSON array of `YYYY-MM-DD` strings (`data-dates`).
    pub dates: Option<String>,
    /// JSON array of counts (`data-counts`).
    pub counts: Option<String>,
}

impl ChartIsland {
    /// Decodes both arrays into a series.
    ///
    /// # Errors
    ///
    /// Returns [`ChartDataError`] if an attribute is missing, is not a JSON
    /// array of the expected type, or the arrays differ in length.
    pub fn parse(&self) -> Result<UsageSeries, ChartDataError> {
        let dates: Vec<String> = decode(DATES_ATTRIBUTE, self.dates.as_deref())?;
        let counts: Vec<u64> = decode(COUNTS_ATTRIBUTE, self.counts.as_deref())?;
        UsageSeries::from_parallel(&dates, &counts)
    }
}

fn decode<T: serde::de::DeserializeOwned>(
    attribute: &'static str,
    raw: Option<&str>,
) -> Result<T, ChartDataError> {
    let raw = raw
        .filter(|r| !r.trim().is_empty())
        .ok_or(ChartDataError::Missing { attribute })?;
    serde_json::from_str(raw).map_err(|source| ChartDataError::Malformed { attribute, source })
}

/// Chart widget option for an area chart of `series`.
///
/// The shape follows the ECharts option object; the subtitle carries the total
/// and the busiest day.
pub fn area_chart_option(series: &UsageSeries) -> serde_json::Value {
    serde_json::json!({
        "title": { "subtext": subtitle(series) },
        "tooltip": { "trigger": "axis" },
        "grid": { "left": 40, "right": 20, "top": 50, "bottom": 30 },
        "xAxis": {
            "type": "category",
            "boundaryGap": false,
            "data": series.labels(),
        },
        "yAxis": { "type": "value", "minInterval": 1 },
        "series": [{
            "name": "调用次数",
            "type": "line",
            "smooth": true,
            "areaStyle": {},
            "data": series.counts(),
        }],
    })
}

fn subtitle(series: &UsageSeries) -> String {
    let total = format!("共 {} 次", series.total());
    match series.peak() {
        Some(peak) if peak.count > 0 => {
            format!("{total} · 峰值 {} {} 次", peak.label, peak.count)
        }
        _ => total,
    }
}

/// Turns the data island into an area chart through a [`ChartService`].
pub struct UsageChartRenderer<C: ChartService + ?Sized> {
    chart: Rc<C>,
}

impl<C: ChartService + ?Sized> UsageChartRenderer<C> {
    pub fn new(chart: Rc<C>) -> Self {
        Self { chart }
    }

    /// Parses the island and renders it.
    ///
    /// Returns the rendered series. Malformed data is reported and nothing is
    /// drawn; the caller decides how loudly to log it.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Data`] for a bad data island and
    /// [`ChartError::Widget`] if the charting widget fails.
    pub fn render(&self, island: &ChartIsland) -> Result<UsageSeries, ChartError> {
        let series = island.parse()?;
        self.chart.render(&island.container, &series)?;

        tracing::debug!(
            container = %island.container,
            points = series.points.len(),
            total = series.total(),
            "usage chart rendered"
        );
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::MockChartService;
    use crate::error::WidgetError;

    fn island(dates: &str, counts: &str) -> ChartIsland {
        ChartIsland {
            container: "usageChart".to_string(),
            dates: Some(dates.to_string()),
            counts: Some(counts.to_string()),
        }
    }

    #[test]
    fn test_render_passes_series_to_widget() {
        let mut chart = MockChartService::new();
        chart
            .expect_render()
            .withf(|container, series| {
                container == "usageChart" && series.labels() == vec!["3月9日", "3月10日"]
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let renderer = UsageChartRenderer::new(Rc::new(chart));
        let series = renderer
            .render(&island(r#"["2025-03-09","2025-03-10"]"#, "[4, 11]"))
            .unwrap();

        assert_eq!(series.total(), 15);
    }

    #[test]
    fn test_malformed_json_is_not_rendered() {
        let mut chart = MockChartService::new();
        chart.expect_render().times(0);

        let renderer = UsageChartRenderer::new(Rc::new(chart));
        let err = renderer
            .render(&island(r#"["2025-03-09""#, "[4]"))
            .unwrap_err();

        assert!(matches!(
            err,
            ChartError::Data(ChartDataError::Malformed {
                attribute: DATES_ATTRIBUTE,
                ..
            })
        ));
    }

    #[test]
    fn test_negative_counts_are_malformed() {
        let err = island(r#"["2025-03-09"]"#, "[-1]").parse().unwrap_err();
        assert!(matches!(
            err,
            ChartDataError::Malformed {
                attribute: COUNTS_ATTRIBUTE,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_attribute() {
        let island = ChartIsland {
            container: "usageChart".to_string(),
            dates: Some("[]".to_string()),
            counts: None,
        };
        assert!(matches!(
            island.parse(),
            Err(ChartDataError::Missing {
                attribute: COUNTS_ATTRIBUTE
            })
        ));
    }

    #[test]
    fn test_area_chart_option_shape() {
        let series = island(r#"["2025-01-31","2025-02-01"]"#, "[2, 3]")
            .parse()
            .unwrap();
        let option = area_chart_option(&series);

        assert_eq!(option["xAxis"]["data"], serde_json::json!(["1月31日", "2月1日"]));
        assert_eq!(option["series"][0]["data"], serde_json::json!([2, 3]));
        assert_eq!(option["series"][0]["type"], "line");
        assert!(option["series"][0]["areaStyle"].is_object());
        assert_eq!(option["title"]["subtext"], "共 5 次 · 峰值 2月1日 3 次");
    }

    #[test]
    fn test_subtitle_names_busiest_day() {
        let series = island(r#"["2025-03-09","2025-03-10"]"#, "[4, 11]")
            .parse()
            .unwrap();
        let option = area_chart_option(&series);

        assert_eq!(option["title"]["subtext"], "共 15 次 · 峰值 3月10日 11 次");
    }

    #[test]
    fn test_subtitle_without_usage_has_no_peak() {
        let empty = island("[]", "[]").parse().unwrap();
        assert_eq!(area_chart_option(&empty)["title"]["subtext"], "共 0 次");

        let idle = island(r#"["2025-03-09"]"#, "[0]").parse().unwrap();
        assert_eq!(area_chart_option(&idle)["title"]["subtext"], "共 0 次");
    }

    #[test]
    fn test_widget_failure_is_reported() {
        let mut chart = MockChartService::new();
        chart
            .expect_render()
            .times(1)
            .returning(|_, _| Err(WidgetError::new("echarts", "not loaded")));

        let renderer = UsageChartRenderer::new(Rc::new(chart));
        let err = renderer.render(&island("[]", "[]")).unwrap_err();
        assert!(matches!(err, ChartError::Widget(_)));
    }
}
