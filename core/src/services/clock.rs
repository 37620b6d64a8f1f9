//! Injectable time source
//!
//! Token expiry and hold staleness both compare against "now"; services
//! take the time source as a trait so tests can pin and advance it.

use chrono::{DateTime, Duration, Utc};
use std::sync::Mutex;

/// Current-time source
pub trait Clock: Send + Sync {
    /// Returns the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Test clock pinned to an explicit instant
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock pinned to the given instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now += by;
    }

    /// Pin the clock to a new instant
    pub fn set(&self, to: DateTime<Utc>) {
        let mut now = self.now.lock().expect("clock lock poisoned");
        *now = to;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().expect("clock lock poisoned")
    }
}
