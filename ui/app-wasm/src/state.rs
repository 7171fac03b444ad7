//! Global application state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! The session manager is the single writer of session state; everything
//! else reads through `with_session`.

use std::cell::RefCell;
use wf_session_core::SessionManager;

use crate::dom::Elements;
use crate::storage::{LocalIdentityStore, SessionSplashStore};

pub type BrowserSession = SessionManager<LocalIdentityStore, SessionSplashStore>;

thread_local! {
    static SESSION: RefCell<BrowserSession> =
        RefCell::new(SessionManager::new(LocalIdentityStore, SessionSplashStore));
    static ELEMENTS: RefCell<Option<Elements>> = const { RefCell::new(None) };
}

/// Run a closure with read access to the session.
pub fn with_session<F, R>(f: F) -> R
where
    F: FnOnce(&BrowserSession) -> R,
{
    SESSION.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the session.
pub fn with_session_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut BrowserSession) -> R,
{
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Stash the bound elements for handlers invoked from JS.
pub fn set_elements(els: Elements) {
    ELEMENTS.with(|e| *e.borrow_mut() = Some(els));
}

pub fn elements() -> Option<Elements> {
    ELEMENTS.with(|e| e.borrow().clone())
}
