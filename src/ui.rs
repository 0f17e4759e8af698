//! Browser DOM helpers
//!
//! Thin web-sys wrappers for the dashboard: numeric input readers, output
//! writers, and toast notifications. Everything degrades to a no-op when an
//! element is missing so a partially rendered page never panics. Native
//! builds get logging stubs.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Toast auto-hide delay
pub const TOAST_MS: i32 = 4000;

#[cfg(target_arch = "wasm32")]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Parse the numeric value of an `<input>` by element id. Empty or
/// unparseable text yields None so callers can keep the last good value.
#[cfg(target_arch = "wasm32")]
pub fn input_f64(id: &str) -> Option<f64> {
    let input = document()?
        .get_element_by_id(id)?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()?;
    let raw = input.value();
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole-number variant of [`input_f64`], clamped at zero
#[cfg(target_arch = "wasm32")]
pub fn input_u32(id: &str) -> Option<u32> {
    input_f64(id).map(|v| v.max(0.0).round() as u32)
}

/// Write text content into the element with the given id
#[cfg(target_arch = "wasm32")]
pub fn set_text(id: &str, text: &str) {
    if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
        el.set_text_content(Some(text));
    }
}

/// Show a toast notification; errors get the error styling. Auto-hides
/// after [`TOAST_MS`].
#[cfg(target_arch = "wasm32")]
pub fn toast(message: &str, is_error: bool) {
    use wasm_bindgen::prelude::*;

    if is_error {
        log::error!("{message}");
    } else {
        log::info!("{message}");
    }

    let Some(doc) = document() else { return };
    let el = match doc.get_element_by_id("toast") {
        Some(el) => el,
        None => {
            let Ok(el) = doc.create_element("div") else {
                return;
            };
            el.set_id("toast");
            if let Some(body) = doc.body() {
                let _ = body.append_child(&el);
            }
            el
        }
    };
    el.set_text_content(Some(message));
    el.set_class_name(if is_error {
        "toast toast-error show"
    } else {
        "toast show"
    });

    if let Some(window) = web_sys::window() {
        let el = el.clone();
        let hide = Closure::<dyn FnMut()>::new(move || {
            el.set_class_name("toast");
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                hide.as_ref().unchecked_ref(),
                TOAST_MS,
            );
        hide.forget();
    }
}

// Native stubs

#[cfg(not(target_arch = "wasm32"))]
pub fn input_f64(_id: &str) -> Option<f64> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn input_u32(_id: &str) -> Option<u32> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set_text(_id: &str, _text: &str) {}

#[cfg(not(target_arch = "wasm32"))]
pub fn toast(message: &str, is_error: bool) {
    if is_error {
        log::error!("toast: {message}");
    } else {
        log::info!("toast: {message}");
    }
}
