//! Wall-clock access
//!
//! Session login times and export file names are the only places portalgate
//! reads the time. Both go through [`Clock`] so tests can pin them.
//!
//! ```
//! use portalgate::{Clock, SystemClock};
//!
//! let today = SystemClock.today();
//! assert!(SystemClock.now_millis() > 0);
//! # let _ = today;
//! ```

use std::fmt::Debug;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, NaiveDate};

#[cfg(any(test, feature = "testing"))]
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of the current time.
pub trait Clock: Send + Sync + Debug {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> u64;

    /// Current UTC calendar date.
    fn today(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_millis() as i64)
            .map(|dt| dt.date_naive())
            .unwrap_or_default()
    }
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // A system clock set before 1970 reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Manually driven clock for tests.
///
/// Time only moves when [`advance`](Self::advance) or [`set`](Self::set) is
/// called, so a login and a later status check see exactly the gap the test
/// put between them.
///
/// ```
/// use portalgate::{Clock, FixedClock};
///
/// let clock = FixedClock::new(60_000);
/// assert_eq!(clock.now_millis(), 60_000);
/// clock.advance(1_500);
/// assert_eq!(clock.now_millis(), 61_500);
/// ```
#[cfg(any(test, feature = "testing"))]
#[derive(Debug)]
pub struct FixedClock {
    millis: AtomicU64,
}

#[cfg(any(test, feature = "testing"))]
impl FixedClock {
    pub fn new(millis: u64) -> Self {
        Self {
            millis: AtomicU64::new(millis),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.millis.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: u64) {
        self.millis.store(ms, Ordering::SeqCst);
    }

    pub fn get(&self) -> u64 {
        self.millis.load(Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "testing"))]
impl Clock for FixedClock {
    fn now_millis(&self) -> u64 {
        self.get()
    }
}

#[cfg(any(test, feature = "testing"))]
impl Default for FixedClock {
    /// 2024-01-01 00:00:00 UTC
    fn default() -> Self {
        Self::new(1_704_067_200_000)
    }
}
