#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use panel_web::prelude::*;

#[derive(Default)]
pub struct FieldState {
    pub value: RefCell<String>,
    pub error: RefCell<String>,
    pub invalid: Cell<bool>,
    pub reads: Cell<u32>,
}

/// Shared handle to an in-memory input; clone it to inspect after binding.
#[derive(Clone, Default)]
pub struct FakeField(pub Rc<FieldState>);

impl FakeField {
    pub fn with_value(value: &str) -> Self {
        let field = Self::default();
        field.type_value(value);
        field
    }

    pub fn type_value(&self, value: &str) {
        *self.0.value.borrow_mut() = value.to_string();
    }

    pub fn error(&self) -> String {
        self.0.error.borrow().clone()
    }

    pub fn is_invalid(&self) -> bool {
        self.0.invalid.get()
    }
}

impl FieldControl for FakeField {
    fn read_value(&self) -> String {
        self.0.reads.set(self.0.reads.get() + 1);
        self.0.value.borrow().clone()
    }

    fn set_error(&self, message: &str) {
        *self.0.error.borrow_mut() = message.to_string();
    }

    fn set_invalid_style(&self, invalid: bool) {
        self.0.invalid.set(invalid);
    }
}

#[derive(Default)]
pub struct SubmitState {
    pub disabled: Cell<bool>,
    pub busy_label: RefCell<Option<String>>,
    pub disable_calls: Cell<u32>,
}

#[derive(Clone, Default)]
pub struct FakeSubmit(pub Rc<SubmitState>);

impl SubmitControl for FakeSubmit {
    fn disable(&self) {
        self.0.disabled.set(true);
        self.0.disable_calls.set(self.0.disable_calls.get() + 1);
    }

    fn show_busy(&self, label: &str) {
        *self.0.busy_label.borrow_mut() = Some(label.to_string());
    }
}

/// HTTP client answering from a script of responses, in call order.
///
/// Each scripted response can yield to the executor a number of times before
/// resolving, to interleave concurrent requests.
#[derive(Default)]
pub struct ScriptedHttp {
    script: RefCell<VecDeque<(usize, Result<HttpResponse, HttpError>)>>,
    pub requests: RefCell<Vec<String>>,
}

impl ScriptedHttp {
    pub fn push(&self, yields: usize, response: Result<HttpResponse, HttpError>) {
        self.script.borrow_mut().push_back((yields, response));
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpClient for ScriptedHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        self.requests.borrow_mut().push(url.to_string());
        let next = self.script.borrow_mut().pop_front();
        let (yields, response) =
            next.unwrap_or((0, Err(HttpError::Network("no scripted response".to_string()))));

        for _ in 0..yields {
            tokio::task::yield_now().await;
        }
        response
    }
}

#[derive(Default)]
pub struct FakeObjectUrls {
    next_id: Cell<u32>,
    pub created: RefCell<Vec<String>>,
    pub revoked: RefCell<Vec<String>>,
}

impl FakeObjectUrls {
    pub fn live(&self) -> Vec<String> {
        let revoked = self.revoked.borrow();
        self.created
            .borrow()
            .iter()
            .filter(|url| !revoked.contains(url))
            .cloned()
            .collect()
    }
}

impl ObjectUrls for FakeObjectUrls {
    fn create(&self, _bytes: &[u8], _content_type: &str) -> Result<String, WidgetError> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let url = format!("blob:panel/{id}");
        self.created.borrow_mut().push(url.clone());
        Ok(url)
    }

    fn revoke(&self, url: &str) {
        self.revoked.borrow_mut().push(url.to_string());
    }
}

#[derive(Default)]
pub struct FakeCaptchaView {
    pub token: RefCell<String>,
    pub image: RefCell<Option<String>>,
    pub alt: RefCell<String>,
}

impl CaptchaView for FakeCaptchaView {
    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = token.to_string();
    }

    fn set_image(&self, url: &str) {
        *self.image.borrow_mut() = Some(url.to_string());
        self.alt.borrow_mut().clear();
    }

    fn show_fallback(&self, message: &str) {
        *self.alt.borrow_mut() = message.to_string();
    }
}

pub struct PasswordState {
    pub masked: Cell<bool>,
    pub icon: RefCell<Vec<String>>,
}

/// Password input plus its toggle icon classes.
#[derive(Clone)]
pub struct FakePasswordView(pub Rc<PasswordState>);

impl FakePasswordView {
    pub fn new(icon_class: &str) -> Self {
        Self(Rc::new(PasswordState {
            masked: Cell::new(true),
            icon: RefCell::new(vec![icon_class.to_string()]),
        }))
    }

    pub fn icon_classes(&self) -> Vec<String> {
        self.0.icon.borrow().clone()
    }
}

impl PasswordView for FakePasswordView {
    fn is_masked(&self) -> bool {
        self.0.masked.get()
    }

    fn set_masked(&self, masked: bool) {
        self.0.masked.set(masked);
    }

    fn swap_icon(&self, add: &str, remove: &str) {
        let mut icon = self.0.icon.borrow_mut();
        icon.retain(|class| class != remove);
        icon.push(add.to_string());
    }
}

#[derive(Default)]
pub struct FakeBackground {
    pub css: RefCell<Option<String>>,
}

impl BackgroundTarget for FakeBackground {
    fn set_background(&self, css_value: &str) {
        *self.css.borrow_mut() = Some(css_value.to_string());
    }
}

#[derive(Default)]
pub struct FakeFooter {
    pub text: RefCell<String>,
}

impl FooterTarget for FakeFooter {
    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

#[derive(Default)]
pub struct FakeClipboard {
    pub selectors: RefCell<Vec<String>>,
}

impl ClipboardService for FakeClipboard {
    fn enable(&self, selector: &str) -> Result<(), WidgetError> {
        self.selectors.borrow_mut().push(selector.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeChart {
    pub rendered: RefCell<Vec<(String, UsageSeries)>>,
}

impl ChartService for FakeChart {
    fn render(&self, container: &str, series: &UsageSeries) -> Result<(), WidgetError> {
        self.rendered
            .borrow_mut()
            .push((container.to_string(), series.clone()));
        Ok(())
    }
}

pub fn captcha_ok(token: &str) -> Result<HttpResponse, HttpError> {
    Ok(HttpResponse::new(200)
        .with_header("X-Captcha-ID", token)
        .with_header("Content-Type", "image/png")
        .with_body(vec![0x89, b'P', b'N', b'G']))
}
