//! Event listener wiring.
//!
//! Listeners live as long as the page, so their closures are leaked with
//! `Closure::forget`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, EventTarget};

use crate::application::services::{CaptchaRefresher, FormController, PasswordToggle};
use crate::config::PageConfig;
use crate::domain::entities::FormKind;
use crate::domain::ports::HttpClient;
use crate::infrastructure::dom::PASSWORD_TOGGLE_SELECTOR;
use crate::infrastructure::{
    BlobObjectUrls, DomCaptchaView, DomField, DomPasswordView, DomSubmit, js_message,
};

fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        tracing::warn!(event, error = %js_message(&e), "failed to add event listener");
    }
    closure.forget();
}

/// Binds live validation and submit gating to one form.
///
/// Returns `false` when the form or its submit button is not on the page.
pub fn bind_form(document: &Document, kind: FormKind, config: &PageConfig) -> bool {
    let Some(form) = document.get_element_by_id(kind.form_id()) else {
        return false;
    };
    let Some(submit) = DomSubmit::find(&form) else {
        tracing::warn!(form = %kind, "form has no submit button; validation not bound");
        return false;
    };

    let busy_label = match kind {
        FormKind::Login => config.login_busy_label.clone(),
        FormKind::Register => config.register_busy_label.clone(),
    };

    let mut inputs = Vec::new();
    let controller = FormController::bind(
        kind,
        |key| {
            let field = DomField::find(&form, key)?;
            inputs.push((key, field.element().clone()));
            Some(field)
        },
        submit,
        busy_label,
    );
    let controller = Rc::new(RefCell::new(controller));

    for (key, input) in inputs {
        let on_blur = Rc::clone(&controller);
        listen(&input, "blur", move |_| {
            on_blur.borrow_mut().on_blur(key);
        });

        let on_input = Rc::clone(&controller);
        listen(&input, "input", move |_| {
            on_input.borrow_mut().on_input(key);
        });
    }

    listen(&form, "submit", move |event: Event| {
        if controller.borrow_mut().on_submit().should_cancel() {
            event.prevent_default();
        }
    });

    tracing::info!(form = %kind, "form validation bound");
    true
}

/// Loads the first captcha and refreshes it whenever the image is clicked.
///
/// Returns `false` when the captcha image or the token field is missing.
pub fn bind_captcha<H>(document: &Document, http: Rc<H>, config: &PageConfig) -> bool
where
    H: HttpClient + 'static,
{
    let Some(view) = DomCaptchaView::find(document, &config.captcha_field) else {
        return false;
    };
    let image = view.image().clone();

    let refresher = Rc::new(CaptchaRefresher::new(
        http,
        Rc::new(BlobObjectUrls),
        Rc::new(view),
        config,
    ));

    let initial = Rc::clone(&refresher);
    spawn_local(async move {
        initial.refresh().await;
    });

    listen(&image, "click", move |_| {
        let refresher = Rc::clone(&refresher);
        spawn_local(async move {
            refresher.refresh().await;
        });
    });

    true
}

/// Binds every password visibility toggle on the page; returns how many.
pub fn bind_password_toggles(document: &Document, config: &PageConfig) -> usize {
    let Ok(toggles) = document.query_selector_all(PASSWORD_TOGGLE_SELECTOR) else {
        return 0;
    };

    let mut bound = 0;
    for index in 0..toggles.length() {
        let Some(toggle) = toggles
            .item(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let Some(view) = DomPasswordView::from_toggle(document, &toggle) else {
            tracing::debug!("password toggle without a valid data-target");
            continue;
        };

        let latch = PasswordToggle::new(view, config);
        listen(&toggle, "click", move |event: Event| {
            event.prevent_default();
            latch.toggle();
        });
        bound += 1;
    }

    bound
}
