//! Login / logout handlers.
//!
//! Each handler drives the session manager, then — only after the call has
//! returned, i.e. state and storage have both settled — toasts and
//! navigates.

use gloo_console as console;
use wf_session_core::LOGIN_PATH;

use crate::dom::{self, Elements};
use crate::router;
use crate::splash;
use crate::state;
use crate::toast;

/// Handle a credential delivered by the identity provider's sign-in widget.
pub fn on_login(els: &Elements, credential: &str) {
    match state::with_session_mut(|s| s.login(credential)) {
        Ok(_) => {
            toast::success(els, "Successfully logged in!");
            router::navigate("/");
        }
        Err(err) => {
            // Degrade to "not logged in": the session was left untouched.
            console::error!(format!("credential rejected: {err}"));
            toast::error(els, "Login failed. Please try again.");
        }
    }
}

pub fn on_logout(els: &Elements) {
    // A dwell timer still pending from this load must not fire after the
    // view goes away.
    splash::cancel_pending();

    match state::with_session_mut(|s| s.logout()) {
        Ok(()) => {
            toast::success(els, "Logged out successfully");
            // Full load: the next page start re-runs the entry gate, which
            // now sees the re-armed reshow state.
            router::navigate(LOGIN_PATH);
        }
        Err(err) => {
            console::error!(format!("logout failed: {err}"));
            toast::error(els, "Logout failed. Please try again.");
        }
    }
}

/// Paint the signed-in user into the header.
pub fn render_identity(els: &Elements) {
    state::with_session(|s| match s.identity() {
        Some(identity) => {
            dom::set_text(&els.user_name, &identity.display_name);
            els.user_avatar.set_src(&identity.avatar_url);
        }
        None => {
            dom::set_text(&els.user_name, "");
            els.user_avatar.set_src("");
        }
    });
}
