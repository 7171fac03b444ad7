//! Navigation and the route guard.
//!
//! Views are sections tagged with `data-route`; the guard decides per
//! navigation whether the requested view renders or the visitor is sent to
//! the login page. Re-run after every session mutation so a logout under a
//! mounted view redirects immediately.

use wf_session_core::{LOGIN_PATH, RouteDecision, guard};

use crate::dom::{self, Elements};
use crate::profile;
use crate::session_ops;
use crate::state;

pub fn current_path() -> String {
    dom::window()
        .location()
        .pathname()
        .unwrap_or_else(|_| "/".to_string())
}

/// Full-page navigation, so the next load re-runs the entry gate.
pub fn navigate(path: &str) {
    let _ = dom::window().location().set_href(path);
}

/// Apply the route guard to the current location and render the outcome.
pub fn render(els: &Elements) {
    let path = current_path();
    let authenticated = state::with_session(|s| s.is_authenticated());

    match guard(&path, authenticated) {
        RouteDecision::RedirectToLogin => navigate(LOGIN_PATH),
        RouteDecision::Render => show_view(els, &path),
    }
}

fn show_view(els: &Elements, path: &str) {
    let route = route_key(path);

    for view in &els.views {
        let matches = view.get_attribute("data-route").as_deref() == Some(route);
        if matches {
            dom::remove_class(view, "hidden");
        } else {
            dom::add_class(view, "hidden");
        }
    }

    // The header is not part of the login page.
    if path == LOGIN_PATH {
        dom::add_class(&els.header, "hidden");
    } else {
        dom::remove_class(&els.header, "hidden");
        session_ops::render_identity(els);
    }

    if route == "/profile" {
        profile::seed_if_absent();
    }
}

/// Canonical `data-route` value for a path; task detail pages share the
/// task board view.
fn route_key(path: &str) -> &str {
    if path.starts_with("/tasks/") { "/tasks" } else { path }
}
