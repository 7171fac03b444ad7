//! Entry splash sequence.
//!
//! Evaluates the entry gate once at boot: show the splash overlay for the
//! dwell interval, or reveal the app immediately if this session already
//! saw it. The dwell timer is parked in a `thread_local` cell; dropping it
//! (teardown, re-arm) cancels the pending completion so no stale state
//! write lands.

use gloo_console as console;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use wf_session_core::{DWELL_MS, EntryGate, SplashOutcome};

use crate::dom::{self, Elements};
use crate::storage::SessionSplashStore;

thread_local! {
    static DWELL_TIMER: RefCell<Option<Timeout>> = const { RefCell::new(None) };
}

/// Run the gate decision and either dwell on the splash or reveal the app.
pub fn run(els: &Elements) {
    let gate = EntryGate::new(SessionSplashStore);

    let outcome = match gate.evaluate() {
        Ok(outcome) => outcome,
        Err(err) => {
            // Flag storage unavailable: surface it, don't trap the user
            // behind a splash that can never complete.
            console::error!(format!("entry gate unavailable: {err}"));
            SplashOutcome::SkipSplash
        }
    };

    match outcome {
        SplashOutcome::SkipSplash => reveal(els),
        SplashOutcome::ShowSplash => {
            dom::add_class(&els.splash, "visible");
            dom::add_class(&els.app_root, "hidden");

            let els = els.clone();
            let timer = Timeout::new(DWELL_MS, move || {
                DWELL_TIMER.with(|t| t.borrow_mut().take());
                if let Err(err) = gate.dwell_elapsed() {
                    console::error!(format!("failed to record splash completion: {err}"));
                }
                reveal(&els);
            });
            // Replacing an armed timer drops (cancels) it.
            DWELL_TIMER.with(|t| *t.borrow_mut() = Some(timer));
        }
    }
}

/// Drop any pending dwell completion. Call before tearing the view down.
pub fn cancel_pending() {
    DWELL_TIMER.with(|t| t.borrow_mut().take());
}

fn reveal(els: &Elements) {
    dom::remove_class(&els.splash, "visible");
    dom::remove_class(&els.app_root, "hidden");
}
