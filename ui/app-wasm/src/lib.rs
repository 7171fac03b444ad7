//! WorkFox browser client.
//!
//! Session & access gating for the marketplace UI: identity from an
//! externally-issued credential, persistence across page loads, a route
//! guard over every protected view, the one-time entry splash, and a thin
//! adapter over the injected wallet provider. Modularised for
//! extensibility: each concern lives in its own module.

pub mod dom;
pub mod events;
pub mod profile;
pub mod router;
pub mod session_ops;
pub mod splash;
pub mod state;
pub mod storage;
pub mod toast;
pub mod wallet;

use gloo_console as console;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();

    init()
}

/// Main initialisation sequence.
fn init() -> Result<(), JsValue> {
    let els = dom::Elements::bind()?;
    state::set_elements(els.clone());

    // Entry gate first: the splash decision must land before anything
    // else renders.
    splash::run(&els);

    // Restore the session from storage. A failure degrades to logged-out,
    // which the route guard then turns into a login redirect.
    if let Err(err) = state::with_session_mut(|s| s.initialize()) {
        console::error!(format!("session restore failed: {err}"));
    }

    router::render(&els);
    events::bind_events(&els);

    Ok(())
}

/// Entry point for the identity provider's sign-in widget: the host page
/// forwards the issued credential here.
#[wasm_bindgen(js_name = handleCredential)]
pub fn handle_credential(credential: String) {
    if let Some(els) = state::elements() {
        session_ops::on_login(&els, &credential);
    }
}
