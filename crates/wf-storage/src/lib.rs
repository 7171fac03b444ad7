use anyhow::Result;
use std::cell::{Cell, RefCell};
use wf_api_types::IdentityRecord;

/// localStorage key holding the serialized identity record.
/// Absence of the key means "logged out".
pub const IDENTITY_KEY: &str = "workfox_user";
/// sessionStorage key forcing the splash sequence on the next load.
pub const SHOW_LOADING_KEY: &str = "workfox_show_loading";
/// sessionStorage key recording that the splash already ran this session.
pub const SEEN_LOADING_KEY: &str = "workfox_seen_loading";
/// localStorage key holding the marketplace profile record.
pub const PROFILE_KEY: &str = "workfox_profile";

/// Durable persistence of the current identity across browser sessions.
///
/// All operations are synchronous: the backing store is local key-value
/// storage, never the network. A failing store must return `Err` rather
/// than drop the write, so callers can keep memory and storage consistent.
pub trait IdentityStore {
    fn load(&self) -> Result<Option<IdentityRecord>>;
    fn save(&self, record: &IdentityRecord) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Where the entry splash sequence stands for the current browser session.
///
/// Replaces the two independent boolean flags of the wire format with one
/// tagged state, so "both flags meaningful at once" is not representable.
/// `PendingReshow` wins over any earlier `ShownThisSession` and is consumed
/// the moment the splash's dwell interval completes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplashState {
    #[default]
    NeverShown,
    ShownThisSession,
    PendingReshow,
}

impl SplashState {
    /// Decode from the two flag keys. A set show-loading flag wins, so the
    /// legacy "both flags set" combination still reads as a pending reshow.
    pub fn from_flags(show_loading: bool, seen_loading: bool) -> Self {
        if show_loading {
            Self::PendingReshow
        } else if seen_loading {
            Self::ShownThisSession
        } else {
            Self::NeverShown
        }
    }

    /// Encode as `(show_loading, seen_loading)`.
    pub fn to_flags(self) -> (bool, bool) {
        match self {
            Self::NeverShown => (false, false),
            Self::ShownThisSession => (false, true),
            Self::PendingReshow => (true, false),
        }
    }
}

/// Session-scoped persistence of the splash state. Cleared by the browser
/// when the tab's session ends.
pub trait SplashStateStore {
    fn load(&self) -> Result<SplashState>;
    fn store(&self, state: SplashState) -> Result<()>;
}

/// `RefCell`-backed identity store for tests and non-browser hosts.
/// The client model is single-threaded, so no lock is needed.
#[derive(Default)]
pub struct InMemoryIdentityStore {
    record: RefCell<Option<IdentityRecord>>,
}

impl IdentityStore for InMemoryIdentityStore {
    fn load(&self) -> Result<Option<IdentityRecord>> {
        Ok(self.record.borrow().clone())
    }

    fn save(&self, record: &IdentityRecord) -> Result<()> {
        *self.record.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.record.borrow_mut() = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySplashStore {
    state: Cell<SplashState>,
}

impl SplashStateStore for InMemorySplashStore {
    fn load(&self) -> Result<SplashState> {
        Ok(self.state.get())
    }

    fn store(&self, state: SplashState) -> Result<()> {
        self.state.set(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> IdentityRecord {
        IdentityRecord {
            email: "a@b.com".into(),
            display_name: "A".into(),
            avatar_url: "u".into(),
            subject_id: "1".into(),
        }
    }

    #[test]
    fn in_memory_identity_roundtrip() {
        let store = InMemoryIdentityStore::default();
        assert_eq!(store.load().unwrap(), None);

        store.save(&identity()).unwrap();
        assert_eq!(store.load().unwrap(), Some(identity()));

        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let store = InMemoryIdentityStore::default();
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn splash_state_defaults_to_never_shown() {
        let store = InMemorySplashStore::default();
        assert_eq!(store.load().unwrap(), SplashState::NeverShown);

        store.store(SplashState::PendingReshow).unwrap();
        assert_eq!(store.load().unwrap(), SplashState::PendingReshow);
    }

    #[test]
    fn splash_flag_mapping_round_trips() {
        for state in [
            SplashState::NeverShown,
            SplashState::ShownThisSession,
            SplashState::PendingReshow,
        ] {
            let (show, seen) = state.to_flags();
            assert_eq!(SplashState::from_flags(show, seen), state);
        }
    }

    #[test]
    fn show_loading_flag_wins_over_seen() {
        assert_eq!(
            SplashState::from_flags(true, true),
            SplashState::PendingReshow
        );
    }
}
