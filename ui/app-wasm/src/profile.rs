//! Marketplace profile record.
//!
//! Owned by the profile page, not the session: the session only seeds it
//! from the identity record the first time the page is visited.

use gloo_console as console;
use wf_api_types::SessionProfile;

use crate::state;
use crate::storage;

/// Seed `workfox_profile` from the signed-in identity if no profile has
/// been saved yet. A saved profile is never overwritten.
pub fn seed_if_absent() {
    if storage::load_profile().is_some() {
        return;
    }

    let seeded = state::with_session(|s| s.identity().map(SessionProfile::seeded_from));
    if let Some(profile) = seeded {
        if let Err(err) = storage::save_profile(&profile) {
            console::error!(format!("failed to seed profile: {err}"));
        }
    }
}
