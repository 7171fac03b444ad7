//! Browser-backed store implementations.
//!
//! The identity and profile records are JSON objects in localStorage
//! (gloo-storage serializes through serde). The splash flags are plain
//! `"true"` strings in sessionStorage, read and written raw so the wire
//! format stays exactly two string-valued keys.

use anyhow::{Result, anyhow};
use gloo_storage::{LocalStorage, Storage as _, errors::StorageError};
use wf_api_types::{IdentityRecord, SessionProfile};
use wf_storage::{
    IDENTITY_KEY, IdentityStore, PROFILE_KEY, SEEN_LOADING_KEY, SHOW_LOADING_KEY, SplashState,
    SplashStateStore,
};

/// Identity persistence under `workfox_user`. Absence means logged out.
#[derive(Default)]
pub struct LocalIdentityStore;

impl IdentityStore for LocalIdentityStore {
    fn load(&self) -> Result<Option<IdentityRecord>> {
        match LocalStorage::get::<IdentityRecord>(IDENTITY_KEY) {
            Ok(record) => Ok(Some(record)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(err) => Err(anyhow!("localStorage read failed: {err}")),
        }
    }

    fn save(&self, record: &IdentityRecord) -> Result<()> {
        LocalStorage::set(IDENTITY_KEY, record)
            .map_err(|err| anyhow!("localStorage write failed: {err}"))
    }

    fn clear(&self) -> Result<()> {
        LocalStorage::delete(IDENTITY_KEY);
        Ok(())
    }
}

/// Splash state persistence over the two session-scoped flag keys.
///
/// Mapping: `PendingReshow` ⇔ `workfox_show_loading="true"` (wins over the
/// seen flag), `ShownThisSession` ⇔ only `workfox_seen_loading="true"`,
/// `NeverShown` ⇔ neither.
#[derive(Default)]
pub struct SessionSplashStore;

impl SplashStateStore for SessionSplashStore {
    fn load(&self) -> Result<SplashState> {
        Ok(SplashState::from_flags(
            flag_set(SHOW_LOADING_KEY)?,
            flag_set(SEEN_LOADING_KEY)?,
        ))
    }

    fn store(&self, state: SplashState) -> Result<()> {
        let (show, seen) = state.to_flags();
        write_flag(SHOW_LOADING_KEY, show)?;
        write_flag(SEEN_LOADING_KEY, seen)?;
        Ok(())
    }
}

// Raw string access: the flags are `"true"` / absent, not JSON.

fn session_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .ok_or_else(|| anyhow!("sessionStorage unavailable"))
}

fn flag_set(key: &str) -> Result<bool> {
    let value = session_storage()?
        .get_item(key)
        .map_err(|err| anyhow!("sessionStorage read failed: {err:?}"))?;
    Ok(value.as_deref() == Some("true"))
}

fn write_flag(key: &str, on: bool) -> Result<()> {
    let storage = session_storage()?;
    let result = if on {
        storage.set_item(key, "true")
    } else {
        storage.remove_item(key)
    };
    result.map_err(|err| anyhow!("sessionStorage write failed: {err:?}"))
}

// ── Session profile ──

pub fn load_profile() -> Option<SessionProfile> {
    LocalStorage::get::<SessionProfile>(PROFILE_KEY).ok()
}

pub fn save_profile(profile: &SessionProfile) -> Result<()> {
    LocalStorage::set(PROFILE_KEY, profile)
        .map_err(|err| anyhow!("localStorage write failed: {err}"))
}
