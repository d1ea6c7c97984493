//! Third-party widgets loaded as page globals.

use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::application::services::area_chart_option;
use crate::domain::entities::UsageSeries;
use crate::domain::ports::{ChartService, ClipboardService};
use crate::error::WidgetError;
use crate::infrastructure::js_message;

fn global(name: &'static str) -> Result<JsValue, WidgetError> {
    let value = Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .map_err(|e| WidgetError::new(name, js_message(&e)))?;
    if value.is_undefined() || value.is_null() {
        return Err(WidgetError::new(name, "not loaded on this page"));
    }
    Ok(value)
}

fn method(target: &JsValue, widget: &'static str, name: &str) -> Result<Function, WidgetError> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| WidgetError::new(widget, format!("`{name}` is not a function")))
}

/// `new ClipboardJS(selector)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClipboardJs;

impl ClipboardService for ClipboardJs {
    fn enable(&self, selector: &str) -> Result<(), WidgetError> {
        let ctor = global("ClipboardJS")?
            .dyn_into::<Function>()
            .map_err(|_| WidgetError::new("ClipboardJS", "not a constructor"))?;

        Reflect::construct(&ctor, &Array::of1(&JsValue::from_str(selector)))
            .map_err(|e| WidgetError::new("ClipboardJS", js_message(&e)))?;

        tracing::debug!(selector, "clipboard helper enabled");
        Ok(())
    }
}

/// `echarts.init(el).setOption(option)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct EChartsService;

impl ChartService for EChartsService {
    fn render(&self, container: &str, series: &UsageSeries) -> Result<(), WidgetError> {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container))
            .ok_or_else(|| WidgetError::new("echarts", format!("no element #{container}")))?;

        let echarts = global("echarts")?;
        let chart = method(&echarts, "echarts", "init")?
            .call1(&echarts, &element)
            .map_err(|e| WidgetError::new("echarts", js_message(&e)))?;

        let option = JSON::parse(&area_chart_option(series).to_string())
            .map_err(|e| WidgetError::new("echarts", js_message(&e)))?;
        method(&chart, "echarts", "setOption")?
            .call1(&chart, &option)
            .map_err(|e| WidgetError::new("echarts", js_message(&e)))?;

        Ok(())
    }
}
