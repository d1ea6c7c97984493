//! Page-ready orchestration.

use std::rc::Rc;

use anyhow::{Context, Result};
use chrono::Local;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Document;

use crate::application::page::{ChartBinding, PageBindings, PageSetup};
use crate::application::services::chart_service::{COUNTS_ATTRIBUTE, DATES_ATTRIBUTE};
use crate::application::services::{BackgroundImageFetcher, ChartIsland};
use crate::config::{self, PageConfig};
use crate::domain::entities::FormKind;
use crate::domain::ports::{ChartService, ClipboardService, FooterTarget};
use crate::infrastructure::dom::CHART_ID;
use crate::infrastructure::{ClipboardJs, DomBackground, DomFooter, EChartsService, GlooHttpClient};
use crate::logging;
use crate::web::events;

/// Module start hook.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    if let Err(e) = boot() {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "panel-web failed to start: {e:#}"
        )));
    }
}

/// Reads the configuration and binds every feature present on the page.
///
/// # Errors
///
/// Returns an error if there is no document or the `<body>` configuration
/// attributes are invalid. Individual features never fail the boot.
pub fn boot() -> Result<()> {
    let window = web_sys::window().context("no global window")?;
    let document = window.document().context("window has no document")?;
    let body = document.body().context("document has no <body>")?;

    let config = config::load(|key| body.get_attribute(key))?;
    logging::init(&config);
    config.print_summary();

    PageSetup::run(&config, page_bindings(&document, &config), Local::now().date_naive());

    for kind in [FormKind::Login, FormKind::Register] {
        events::bind_form(&document, kind, &config);
    }

    let http = Rc::new(GlooHttpClient);
    if events::bind_captcha(&document, Rc::clone(&http), &config) {
        tracing::info!("captcha refresh bound");
    }

    let toggles = events::bind_password_toggles(&document, &config);
    if toggles > 0 {
        tracing::info!(toggles, "password toggles bound");
    }

    spawn_background(&document, http, &config);

    Ok(())
}

fn page_bindings(document: &Document, config: &PageConfig) -> PageBindings {
    let footer = DomFooter::find(document).map(|f| Rc::new(f) as Rc<dyn FooterTarget>);

    let has_copy_targets = document
        .query_selector(&config.copy_selector)
        .ok()
        .flatten()
        .is_some();
    let clipboard = has_copy_targets.then(|| Rc::new(ClipboardJs) as Rc<dyn ClipboardService>);

    let chart = document.get_element_by_id(CHART_ID).map(|mount| ChartBinding {
        service: Rc::new(EChartsService) as Rc<dyn ChartService>,
        island: ChartIsland {
            container: CHART_ID.to_string(),
            dates: mount.get_attribute(DATES_ATTRIBUTE),
            counts: mount.get_attribute(COUNTS_ATTRIBUTE),
        },
    });

    PageBindings {
        footer,
        clipboard,
        chart,
    }
}

fn spawn_background(document: &Document, http: Rc<GlooHttpClient>, config: &PageConfig) {
    if !config.is_background_enabled() {
        tracing::debug!("background image disabled: no provider token");
        return;
    }
    let Some(target) = DomBackground::find(document) else {
        return;
    };

    let fetcher = BackgroundImageFetcher::new(http, Rc::new(target), config);
    spawn_local(async move {
        let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
        let mut rng = StdRng::seed_from_u64(seed);

        if let Err(e) = fetcher.fetch_and_apply(&mut rng).await {
            tracing::warn!(error = %e, "background image unavailable");
        }
    });
}
