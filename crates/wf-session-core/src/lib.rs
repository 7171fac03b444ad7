use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;
use wf_api_types::IdentityRecord;
use wf_credential::CredentialError;
use wf_storage::{IdentityStore, SplashState, SplashStateStore};

/// How long the entry splash dwells before the app becomes interactive.
pub const DWELL_MS: u32 = 5_000;

/// The one unprotected path.
pub const LOGIN_PATH: &str = "/login";

/// Every path the route guard protects. Task detail pages (`/tasks/<id>`)
/// are covered by prefix in [`is_protected`].
pub const PROTECTED_PATHS: &[&str] = &[
    "/",
    "/tasks",
    "/create",
    "/dashboard",
    "/developers",
    "/about",
    "/profile",
];

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Credential(#[from] CredentialError),
    #[error("identity storage unavailable: {0}")]
    Storage(anyhow::Error),
}

/// Owner of the in-memory session state.
///
/// `authenticated` is derived from the presence of the identity record, so
/// the two can never disagree. All mutation goes through [`login`] and
/// [`logout`]; consumers read through the accessors. Within either
/// operation the in-memory state settles before the backing store is
/// written, and the call returns only once both have — callers sequence
/// navigation or notifications after the call instead of waiting on a
/// deferred tick.
///
/// [`login`]: SessionManager::login
/// [`logout`]: SessionManager::logout
pub struct SessionManager<I, F> {
    identity_store: I,
    splash_store: F,
    identity: Option<IdentityRecord>,
}

impl<I, F> SessionManager<I, F>
where
    I: IdentityStore,
    F: SplashStateStore,
{
    pub fn new(identity_store: I, splash_store: F) -> Self {
        Self {
            identity_store,
            splash_store,
            identity: None,
        }
    }

    /// Restore the session from the identity store. Run once at startup.
    ///
    /// The stored record is already decoded, so no credential work happens
    /// here; absence of a record leaves the session logged out.
    pub fn initialize(&mut self) -> Result<(), SessionError> {
        self.identity = self.identity_store.load().map_err(SessionError::Storage)?;
        Ok(())
    }

    pub fn identity(&self) -> Option<&IdentityRecord> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Decode `token` and make its identity the current session.
    ///
    /// A decode failure leaves session state and storage untouched; no
    /// partial identity is ever stored. A storage failure rolls the
    /// in-memory state back to its previous value, so memory and storage
    /// never disagree. `Ok` is returned only once both have settled.
    pub fn login(&mut self, token: &str) -> Result<IdentityRecord, SessionError> {
        let record = wf_credential::decode(token)?;

        let previous = self.identity.replace(record.clone());
        if let Err(err) = self.identity_store.save(&record) {
            self.identity = previous;
            return Err(SessionError::Storage(err));
        }

        Ok(record)
    }

    /// Clear the session, delete the stored identity, and re-arm the entry
    /// splash for the next load. Idempotent.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        let previous = self.identity.take();
        if let Err(err) = self.identity_store.clear() {
            self.identity = previous;
            return Err(SessionError::Storage(err));
        }

        self.splash_store
            .store(SplashState::PendingReshow)
            .map_err(SessionError::Storage)?;
        Ok(())
    }
}

// ── Entry-presentation gate ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashOutcome {
    ShowSplash,
    SkipSplash,
}

/// Decides, once per app load, whether the entry splash runs.
///
/// `PendingReshow` (armed by logout) and `NeverShown` (first load of the
/// session) both show the splash; `ShownThisSession` skips it. The dwell
/// timer itself belongs to the view layer and must be dropped if the view
/// is torn down before it fires, so no stale [`dwell_elapsed`] lands.
///
/// [`dwell_elapsed`]: EntryGate::dwell_elapsed
pub struct EntryGate<F> {
    store: F,
}

impl<F: SplashStateStore> EntryGate<F> {
    pub fn new(store: F) -> Self {
        Self { store }
    }

    pub fn evaluate(&self) -> Result<SplashOutcome> {
        let outcome = match self.store.load()? {
            SplashState::ShownThisSession => SplashOutcome::SkipSplash,
            SplashState::NeverShown | SplashState::PendingReshow => SplashOutcome::ShowSplash,
        };
        Ok(outcome)
    }

    /// Record that the splash ran to completion. Consumes a pending reshow.
    pub fn dwell_elapsed(&self) -> Result<()> {
        self.store.store(SplashState::ShownThisSession)
    }
}

// ── Route guard ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
}

pub fn is_protected(path: &str) -> bool {
    PROTECTED_PATHS.contains(&path) || path.starts_with("/tasks/")
}

/// Per-navigation access decision. Reads session state, never mutates it;
/// re-run on every render so a logout under a mounted view redirects
/// immediately.
pub fn guard(path: &str, authenticated: bool) -> RouteDecision {
    if authenticated || !is_protected(path) {
        RouteDecision::Render
    } else {
        RouteDecision::RedirectToLogin
    }
}

// ── Wallet capability ──

/// Capability interface over the externally-owned wallet connection.
///
/// The core reads status and requests connect/disconnect; it never owns
/// the connection state machine, and wallet outcomes never touch session
/// state — a user may be authenticated without a connected wallet and
/// vice versa.
#[async_trait(?Send)]
pub trait WalletCapability {
    fn address(&self) -> Option<String>;
    fn is_connected(&self) -> bool;
    /// Resolves to the connected address.
    async fn connect(&self) -> Result<String>;
    async fn disconnect(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use wf_storage::{InMemoryIdentityStore, InMemorySplashStore};

    fn token(payload: &str) -> String {
        format!("hdr.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    fn valid_token() -> String {
        token(r#"{"email":"a@b.com","name":"A","picture":"u","sub":"1"}"#)
    }

    fn manager() -> SessionManager<InMemoryIdentityStore, InMemorySplashStore> {
        SessionManager::new(
            InMemoryIdentityStore::default(),
            InMemorySplashStore::default(),
        )
    }

    struct FailingIdentityStore;

    impl IdentityStore for FailingIdentityStore {
        fn load(&self) -> Result<Option<IdentityRecord>> {
            Err(anyhow!("storage unavailable"))
        }
        fn save(&self, _record: &IdentityRecord) -> Result<()> {
            Err(anyhow!("storage unavailable"))
        }
        fn clear(&self) -> Result<()> {
            Err(anyhow!("storage unavailable"))
        }
    }

    #[test]
    fn initialize_restores_stored_identity() {
        let store = InMemoryIdentityStore::default();
        let record = wf_credential::decode(&valid_token()).unwrap();
        store.save(&record).unwrap();

        let mut mgr = SessionManager::new(store, InMemorySplashStore::default());
        mgr.initialize().unwrap();
        assert!(mgr.is_authenticated());
        assert_eq!(mgr.identity(), Some(&record));
    }

    #[test]
    fn initialize_without_stored_identity_stays_logged_out() {
        let mut mgr = manager();
        mgr.initialize().unwrap();
        assert!(!mgr.is_authenticated());
        assert_eq!(mgr.identity(), None);
    }

    #[test]
    fn login_sets_state_and_persists_decoded_record() {
        let mut mgr = manager();
        let record = mgr.login(&valid_token()).unwrap();

        assert!(mgr.is_authenticated());
        assert_eq!(mgr.identity(), Some(&record));
        assert_eq!(
            mgr.identity_store.load().unwrap(),
            Some(wf_credential::decode(&valid_token()).unwrap())
        );
    }

    #[test]
    fn login_with_malformed_token_changes_nothing() {
        let mut mgr = manager();
        let err = mgr.login("a.b").unwrap_err();

        assert!(matches!(
            err,
            SessionError::Credential(CredentialError::MalformedToken(2))
        ));
        assert!(!mgr.is_authenticated());
        assert_eq!(mgr.identity_store.load().unwrap(), None);
    }

    #[test]
    fn login_storage_failure_rolls_state_back() {
        let mut mgr =
            SessionManager::new(FailingIdentityStore, InMemorySplashStore::default());
        let err = mgr.login(&valid_token()).unwrap_err();

        assert!(matches!(err, SessionError::Storage(_)));
        assert!(!mgr.is_authenticated());
    }

    #[test]
    fn logout_clears_state_store_and_arms_reshow() {
        let mut mgr = manager();
        mgr.login(&valid_token()).unwrap();
        mgr.logout().unwrap();

        assert!(!mgr.is_authenticated());
        assert_eq!(mgr.identity_store.load().unwrap(), None);
        assert_eq!(
            mgr.splash_store.load().unwrap(),
            SplashState::PendingReshow
        );
    }

    #[test]
    fn logout_is_idempotent() {
        let mut mgr = manager();
        mgr.login(&valid_token()).unwrap();
        mgr.logout().unwrap();
        mgr.logout().unwrap();

        assert!(!mgr.is_authenticated());
        assert_eq!(mgr.identity_store.load().unwrap(), None);
        assert_eq!(
            mgr.splash_store.load().unwrap(),
            SplashState::PendingReshow
        );
    }

    #[test]
    fn fresh_session_shows_splash_once() {
        let gate = EntryGate::new(InMemorySplashStore::default());

        assert_eq!(gate.evaluate().unwrap(), SplashOutcome::ShowSplash);
        gate.dwell_elapsed().unwrap();
        assert_eq!(gate.store.load().unwrap(), SplashState::ShownThisSession);
        assert_eq!(gate.evaluate().unwrap(), SplashOutcome::SkipSplash);
    }

    #[test]
    fn pending_reshow_overrides_shown_this_session() {
        let store = InMemorySplashStore::default();
        store.store(SplashState::ShownThisSession).unwrap();
        store.store(SplashState::PendingReshow).unwrap();

        let gate = EntryGate::new(store);
        assert_eq!(gate.evaluate().unwrap(), SplashOutcome::ShowSplash);
        gate.dwell_elapsed().unwrap();
        // Consumed: the next load skips straight to the app.
        assert_eq!(gate.evaluate().unwrap(), SplashOutcome::SkipSplash);
    }

    #[test]
    fn unauthenticated_protected_paths_redirect() {
        for path in PROTECTED_PATHS {
            assert_eq!(guard(path, false), RouteDecision::RedirectToLogin);
        }
        assert_eq!(guard("/tasks/42", false), RouteDecision::RedirectToLogin);
    }

    #[test]
    fn authenticated_protected_paths_render() {
        for path in PROTECTED_PATHS {
            assert_eq!(guard(path, true), RouteDecision::Render);
        }
        assert_eq!(guard("/tasks/42", true), RouteDecision::Render);
    }

    #[test]
    fn login_path_always_renders() {
        assert_eq!(guard(LOGIN_PATH, false), RouteDecision::Render);
        assert_eq!(guard(LOGIN_PATH, true), RouteDecision::Render);
    }
}
