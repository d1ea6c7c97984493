//! DOM element adapters.

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement, HtmlInputElement,
};

use crate::domain::entities::FieldKey;
use crate::domain::ports::{
    BackgroundTarget, CaptchaView, FieldControl, FooterTarget, PasswordView, SubmitControl,
};

pub const FOOTER_ID: &str = "footerText";
pub const CAPTCHA_IMAGE_ID: &str = "captchaImage";
pub const CHART_ID: &str = "usageChart";
pub const PASSWORD_TOGGLE_SELECTOR: &str = ".toggle-password";

const INVALID_CLASS: &str = "is-invalid";
const ERROR_SLOT_SELECTOR: &str = ".invalid-feedback";
const SPINNER_CLASS: &str = "spinner-border spinner-border-sm me-2";

fn query<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// A form input and the `.invalid-feedback` element next to it.
pub struct DomField {
    input: HtmlInputElement,
    error_slot: Option<Element>,
}

impl DomField {
    /// Finds the input named after `key` inside `form`.
    pub fn find(form: &Element, key: FieldKey) -> Option<Self> {
        let input: HtmlInputElement = query(form, &format!("[name=\"{key}\"]"))?;
        let error_slot = input
            .parent_element()
            .and_then(|parent| parent.query_selector(ERROR_SLOT_SELECTOR).ok().flatten());

        Some(Self { input, error_slot })
    }

    pub fn element(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl FieldControl for DomField {
    fn read_value(&self) -> String {
        self.input.value()
    }

    fn set_error(&self, message: &str) {
        if let Some(slot) = &self.error_slot {
            slot.set_text_content(Some(message));
        }
    }

    fn set_invalid_style(&self, invalid: bool) {
        let _ = self
            .input
            .class_list()
            .toggle_with_force(INVALID_CLASS, invalid);
    }
}

/// The submit button of a form.
pub struct DomSubmit {
    button: HtmlButtonElement,
}

impl DomSubmit {
    pub fn find(form: &Element) -> Option<Self> {
        query(form, "[type=\"submit\"]").map(|button| Self { button })
    }
}

impl SubmitControl for DomSubmit {
    fn disable(&self) {
        self.button.set_disabled(true);
    }

    fn show_busy(&self, label: &str) {
        self.button.set_text_content(None);

        let Some(document) = self.button.owner_document() else {
            self.button.set_text_content(Some(label));
            return;
        };

        if let Ok(spinner) = document.create_element("span") {
            spinner.set_class_name(SPINNER_CLASS);
            let _ = spinner.set_attribute("role", "status");
            let _ = self.button.append_child(&spinner);
        }
        let _ = self
            .button
            .append_child(&document.create_text_node(label));
    }
}

/// Captcha `<img>` and the hidden token input.
pub struct DomCaptchaView {
    image: HtmlImageElement,
    token: HtmlInputElement,
    alt: String,
}

impl DomCaptchaView {
    pub fn find(document: &Document, token_field: &str) -> Option<Self> {
        let image = document
            .get_element_by_id(CAPTCHA_IMAGE_ID)?
            .dyn_into::<HtmlImageElement>()
            .ok()?;
        let token = document
            .query_selector(&format!("input[name=\"{token_field}\"]"))
            .ok()
            .flatten()?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let alt = image.alt();

        Some(Self { image, token, alt })
    }

    pub fn image(&self) -> &HtmlImageElement {
        &self.image
    }
}

impl CaptchaView for DomCaptchaView {
    fn set_token(&self, token: &str) {
        self.token.set_value(token);
    }

    fn set_image(&self, url: &str) {
        self.image.set_src(url);
        self.image.set_alt(&self.alt);
        self.image.set_title("");
    }

    fn show_fallback(&self, message: &str) {
        self.image.set_alt(message);
        self.image.set_title(message);
    }
}

/// A password input and the icon inside its toggle button.
pub struct DomPasswordView {
    input: HtmlInputElement,
    icon: Element,
}

impl DomPasswordView {
    /// Resolves a toggle button: its `data-target` names the input id, the
    /// icon is its first `<i>` child or the button itself.
    pub fn from_toggle(document: &Document, toggle: &Element) -> Option<Self> {
        let target = toggle.get_attribute("data-target")?;
        let input = document
            .get_element_by_id(target.trim_start_matches('#'))?
            .dyn_into::<HtmlInputElement>()
            .ok()?;
        let icon = toggle
            .query_selector("i")
            .ok()
            .flatten()
            .unwrap_or_else(|| toggle.clone());

        Some(Self { input, icon })
    }
}

impl PasswordView for DomPasswordView {
    fn is_masked(&self) -> bool {
        self.input.type_() == "password"
    }

    fn set_masked(&self, masked: bool) {
        self.input
            .set_type(if masked { "password" } else { "text" });
    }

    fn swap_icon(&self, add: &str, remove: &str) {
        let classes = self.icon.class_list();
        let _ = classes.remove_1(remove);
        let _ = classes.add_1(add);
    }
}

/// The page `<body>`, which carries the background image.
pub struct DomBackground {
    body: HtmlElement,
}

impl DomBackground {
    pub fn find(document: &Document) -> Option<Self> {
        document.body().map(|body| Self { body })
    }
}

impl BackgroundTarget for DomBackground {
    fn set_background(&self, css_value: &str) {
        let style = self.body.style();
        let _ = style.set_property("background-image", css_value);
        let _ = style.set_property("background-size", "cover");
    }
}

pub struct DomFooter {
    element: Element,
}

impl DomFooter {
    pub fn find(document: &Document) -> Option<Self> {
        document
            .get_element_by_id(FOOTER_ID)
            .map(|element| Self { element })
    }
}

impl FooterTarget for DomFooter {
    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }
}
