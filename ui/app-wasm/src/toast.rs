//! Toast notifications.
//!
//! Small DOM elements appended to the toast container and auto-dismissed.
//! Success toasts linger 3s, error toasts 4s.

use gloo_timers::callback::Timeout;

use crate::dom::{self, Elements};

const SUCCESS_DISMISS_MS: u32 = 3_000;
const ERROR_DISMISS_MS: u32 = 4_000;

pub fn success(els: &Elements, message: &str) {
    show(els, message, "toast-success", SUCCESS_DISMISS_MS);
}

pub fn error(els: &Elements, message: &str) {
    show(els, message, "toast-error", ERROR_DISMISS_MS);
}

fn show(els: &Elements, message: &str, kind_class: &str, dismiss_ms: u32) {
    let toast = dom::create_element("div");
    dom::add_class(&toast, "toast");
    dom::add_class(&toast, kind_class);
    dom::set_text(&toast, message);
    let _ = els.toast_container.append_child(&toast);

    // Dismissal is fire-and-forget; the handle outlives this call.
    Timeout::new(dismiss_ms, move || toast.remove()).forget();
}
