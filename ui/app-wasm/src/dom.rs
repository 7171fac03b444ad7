//! DOM element bindings.
//!
//! All fields are resolved once at startup. To add new UI elements, add a
//! field here and bind it in `Elements::bind()`.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, Window};

// ── Helpers ──

pub fn window() -> Window {
    web_sys::window().unwrap()
}

fn doc() -> Document {
    window().document().unwrap()
}

pub fn by_id(id: &str) -> Option<Element> {
    doc().get_element_by_id(id)
}

pub fn by_id_typed<T: JsCast>(id: &str) -> Option<T> {
    by_id(id).and_then(|e| e.dyn_into::<T>().ok())
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let nl = doc().query_selector_all(selector).unwrap();
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn set_text(el: &Element, text: &str) {
    el.set_text_content(Some(text));
}

pub fn add_class(el: &Element, cls: &str) {
    let _ = el.class_list().add_1(cls);
}

pub fn remove_class(el: &Element, cls: &str) {
    let _ = el.class_list().remove_1(cls);
}

pub fn create_element(tag: &str) -> Element {
    doc().create_element(tag).unwrap()
}

// ── Element bindings ──

/// Every element the client touches, resolved once at startup.
#[derive(Clone)]
pub struct Elements {
    /// Full-screen splash overlay shown while the entry gate dwells.
    pub splash: Element,
    /// Application shell, hidden until the splash completes or is skipped.
    pub app_root: Element,
    pub header: Element,
    pub user_name: Element,
    pub user_avatar: HtmlImageElement,
    pub logout_btn: HtmlElement,
    pub connect_wallet_btn: HtmlElement,
    pub disconnect_wallet_btn: HtmlElement,
    pub wallet_address: Element,
    pub toast_container: Element,
    /// View sections, one per route, tagged with `data-route`.
    pub views: Vec<Element>,
}

impl Elements {
    pub fn bind() -> Result<Self, JsValue> {
        let get = |id: &str| {
            by_id(id).ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
        };

        Ok(Self {
            splash: get("splash")?,
            app_root: get("appRoot")?,
            header: get("appHeader")?,
            user_name: get("userName")?,
            user_avatar: by_id_typed("userAvatar")
                .ok_or_else(|| JsValue::from_str("missing element #userAvatar"))?,
            logout_btn: by_id_typed("logoutBtn")
                .ok_or_else(|| JsValue::from_str("missing element #logoutBtn"))?,
            connect_wallet_btn: by_id_typed("connectWalletBtn")
                .ok_or_else(|| JsValue::from_str("missing element #connectWalletBtn"))?,
            disconnect_wallet_btn: by_id_typed("disconnectWalletBtn")
                .ok_or_else(|| JsValue::from_str("missing element #disconnectWalletBtn"))?,
            wallet_address: get("walletAddress")?,
            toast_container: get("toastContainer")?,
            views: query_all("[data-route]"),
        })
    }
}
