//! Authenticated session state
//!
//! A [`Session`] is created on a successful login and holds a snapshot of the
//! authenticated record. Edits made to the directory afterwards are not
//! reflected in an existing session.

use serde::{Deserialize, Serialize};

use super::types::UserRecord;
use crate::Clock;

/// The single active authenticated context for this device.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Snapshot of the record that logged in
    pub user: UserRecord,

    /// Login time in milliseconds since Unix epoch
    #[serde(rename = "loginTime")]
    pub login_time: u64,
}

impl Session {
    pub fn new(user: UserRecord, login_time: u64) -> Self {
        Self { user, login_time }
    }

    /// Id of the authenticated record.
    pub fn user_id(&self) -> &str {
        &self.user.id
    }

    pub fn is_admin(&self) -> bool {
        self.user.is_admin()
    }

    /// Whole seconds since login according to `clock`.
    ///
    /// A clock that reads earlier than the login time yields zero.
    pub fn elapsed_secs(&self, clock: &dyn Clock) -> u64 {
        clock.now_millis().saturating_sub(self.login_time) / 1000
    }
}

/// Format a duration in seconds as `mm:ss`.
///
/// Minutes are not wrapped into hours, so long sessions read e.g. `125:07`.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
