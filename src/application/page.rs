//! Page-ready setup of the synchronous, independent page leaves.
//!
//! The footer, the clipboard helper and the usage chart need no network and
//! no event wiring, so they run once here. Every leaf is optional: a missing
//! binding means its elements are absent from the page and the leaf is
//! skipped. A failing leaf is logged and never stops the others.

use std::fmt;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::application::services::{ChartIsland, UsageChartRenderer};
use crate::config::PageConfig;
use crate::domain::footer::footer_text;
use crate::domain::ports::{ChartService, ClipboardService, FooterTarget};
use crate::error::ChartError;

/// A page-ready feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Footer,
    Clipboard,
    UsageChart,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Footer => f.write_str("footer"),
            Feature::Clipboard => f.write_str("clipboard"),
            Feature::UsageChart => f.write_str("usage chart"),
        }
    }
}

/// The chart widget plus the data island found on its mount element.
pub struct ChartBinding {
    pub service: Rc<dyn ChartService>,
    pub island: ChartIsland,
}

/// Elements and widgets found on the page; `None` when absent.
#[derive(Default)]
pub struct PageBindings {
    pub footer: Option<Rc<dyn FooterTarget>>,
    pub clipboard: Option<Rc<dyn ClipboardService>>,
    pub chart: Option<ChartBinding>,
}

/// What happened to each leaf.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub enabled: Vec<Feature>,
    pub skipped: Vec<Feature>,
    pub failed: Vec<(Feature, String)>,
}

impl SetupReport {
    pub fn is_enabled(&self, feature: Feature) -> bool {
        self.enabled.contains(&feature)
    }

    pub fn is_skipped(&self, feature: Feature) -> bool {
        self.skipped.contains(&feature)
    }

    pub fn failure(&self, feature: Feature) -> Option<&str> {
        self.failed
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, reason)| reason.as_str())
    }
}

/// Runs the synchronous page-ready leaves.
pub struct PageSetup;

impl PageSetup {
    pub fn run(config: &PageConfig, bindings: PageBindings, today: NaiveDate) -> SetupReport {
        let mut report = SetupReport::default();

        match bindings.footer {
            Some(footer) => {
                footer.set_text(&footer_text(config.web_time, today));
                report.enabled.push(Feature::Footer);
            }
            None => report.skipped.push(Feature::Footer),
        }

        match bindings.clipboard {
            Some(clipboard) => match clipboard.enable(&config.copy_selector) {
                Ok(()) => report.enabled.push(Feature::Clipboard),
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        selector = %config.copy_selector,
                        "clipboard helper unavailable"
                    );
                    report.failed.push((Feature::Clipboard, e.to_string()));
                }
            },
            None => report.skipped.push(Feature::Clipboard),
        }

        match bindings.chart {
            Some(binding) => {
                let renderer = UsageChartRenderer::new(binding.service);
                match renderer.render(&binding.island) {
                    Ok(_) => report.enabled.push(Feature::UsageChart),
                    Err(e) => {
                        match &e {
                            ChartError::Data(_) => tracing::warn!(
                                error = %e,
                                container = %binding.island.container,
                                "usage chart skipped: bad data island"
                            ),
                            ChartError::Widget(_) => {
                                tracing::warn!(error = %e, "usage chart widget failed")
                            }
                        }
                        report.failed.push((Feature::UsageChart, e.to_string()));
                    }
                }
            }
            None => report.skipped.push(Feature::UsageChart),
        }

        for feature in &report.skipped {
            tracing::debug!(%feature, "feature skipped: elements not on page");
        }
        tracing::info!(
            enabled = report.enabled.len(),
            skipped = report.skipped.len(),
            failed = report.failed.len(),
            "page setup finished"
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{MockChartService, MockClipboardService, MockFooterTarget};
    use crate::error::WidgetError;
    use mockall::predicate::eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()
    }

    #[test]
    fn test_empty_page_skips_everything() {
        let report = PageSetup::run(&PageConfig::default(), PageBindings::default(), today());

        assert!(report.enabled.is_empty());
        assert!(report.failed.is_empty());
        assert_eq!(
            report.skipped,
            vec![Feature::Footer, Feature::Clipboard, Feature::UsageChart]
        );
    }

    #[test]
    fn test_footer_and_clipboard() {
        let mut footer = MockFooterTarget::new();
        footer
            .expect_set_text()
            .with(eq("© 2024 · 已稳定运行 10 天"))
            .times(1)
            .return_const(());

        let mut clipboard = MockClipboardService::new();
        clipboard
            .expect_enable()
            .with(eq(".copy-btn"))
            .times(1)
            .returning(|_| Ok(()));

        let bindings = PageBindings {
            footer: Some(Rc::new(footer)),
            clipboard: Some(Rc::new(clipboard)),
            chart: None,
        };
        let report = PageSetup::run(&PageConfig::default(), bindings, today());

        assert!(report.is_enabled(Feature::Footer));
        assert!(report.is_enabled(Feature::Clipboard));
        assert!(report.is_skipped(Feature::UsageChart));
    }

    #[test]
    fn test_failures_do_not_stop_other_leaves() {
        let mut clipboard = MockClipboardService::new();
        clipboard
            .expect_enable()
            .returning(|_| Err(WidgetError::new("ClipboardJS", "not loaded")));

        let mut chart = MockChartService::new();
        chart.expect_render().times(0);

        let mut footer = MockFooterTarget::new();
        footer.expect_set_text().times(1).return_const(());

        let bindings = PageBindings {
            footer: Some(Rc::new(footer)),
            clipboard: Some(Rc::new(clipboard)),
            chart: Some(ChartBinding {
                service: Rc::new(chart),
                island: ChartIsland {
                    container: "usageChart".to_string(),
                    dates: Some("not json".to_string()),
                    counts: Some("[]".to_string()),
                },
            }),
        };
        let report = PageSetup::run(&PageConfig::default(), bindings, today());

        assert!(report.is_enabled(Feature::Footer));
        assert!(report.failure(Feature::Clipboard).is_some());
        assert!(
            report
                .failure(Feature::UsageChart)
                .is_some_and(|reason| reason.contains("data-dates"))
        );
    }
}
