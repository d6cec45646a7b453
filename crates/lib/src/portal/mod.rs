//! Portal: the top-level handle over one device's directory and session.
//!
//! A [`Portal`] wires the stores, the auth gate and the sync codec to a single
//! backend and clock, and drives the login/logout transitions.

use std::sync::Arc;

use crate::{
    Clock, Result, SystemClock,
    auth::AuthGate,
    backend::KeyValueStore,
    directory::DirectoryService,
    store::{RecordStore, SessionStore},
    sync::SyncCodec,
    user::Session,
};

mod errors;
pub use errors::PortalError;


/// Entry point for front ends.
///
/// # Example
/// ```
/// # use std::sync::Arc;
/// # use portalgate::{Portal, backend::InMemory};
/// # fn main() -> portalgate::Result<()> {
/// let portal = Portal::open(Arc::new(InMemory::new()))?;
///
/// let session = portal.login("joshy", "dani5161")?;
/// let directory = portal.directory(&session)?;
/// assert_eq!(directory.list().len(), 1);
///
/// portal.logout()?;
/// assert!(portal.current_session().is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Portal {
    clock: Arc<dyn Clock>,
    records: RecordStore,
    sessions: SessionStore,
    gate: AuthGate,
}

impl Portal {
    /// Open a portal over `backend`, seeding the directory if it is empty.
    pub fn open(backend: Arc<dyn KeyValueStore>) -> Result<Self> {
        Self::open_impl(backend, Arc::new(SystemClock))
    }

    /// Same as [`Portal::open`] with an injected clock.
    ///
    /// Only available with the `testing` feature or in test builds.
    #[cfg(any(test, feature = "testing"))]
    pub fn open_with_clock(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        Self::open_impl(backend, clock)
    }

    fn open_impl(backend: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Result<Self> {
        let records = RecordStore::new(backend.clone());
        records.seed_if_empty()?;
        Ok(Self {
            sessions: SessionStore::new(backend),
            gate: AuthGate::new(records.clone()),
            records,
            clock,
        })
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    pub fn records(&self) -> &RecordStore {
        &self.records
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Authenticate and persist a new session, replacing any existing one.
    pub fn login(&self, username: &str, password: &str) -> Result<Session> {
        let user = self.gate.authenticate(username, password)?;
        let session = Session::new(user, self.clock.now_millis());
        self.sessions.set(&session)?;
        tracing::info!("'{}' logged in as {}", session.user.username, session.user.role);
        Ok(session)
    }

    /// End the current session. Logging out with no session is a no-op.
    pub fn logout(&self) -> Result<()> {
        if let Some(session) = self.sessions.get() {
            tracing::info!("'{}' logged out", session.user.username);
        }
        self.sessions.clear()
    }

    /// The persisted session, if any.
    pub fn current_session(&self) -> Option<Session> {
        self.sessions.get()
    }

    /// Open the directory for management on behalf of `session`.
    ///
    /// Only admin sessions may manage the directory. The returned service
    /// loads the directory now and works from that copy afterwards.
    pub fn directory(&self, session: &Session) -> Result<DirectoryService> {
        if !session.is_admin() {
            return Err(PortalError::InsufficientPermissions {
                username: session.user.username.clone(),
            }
            .into());
        }
        Ok(DirectoryService::open(self.records.clone(), session.user_id()))
    }

    pub fn sync_codec(&self) -> SyncCodec {
        SyncCodec::new(self.clock.clone())
    }
}
