//! Configuration for the availability ledger

use chrono::Duration;

use cm_shared::config::SchedulingConfig;

/// Configuration for the availability ledger
#[derive(Debug, Clone)]
pub struct AvailabilityConfig {
    /// Lifetime of a hold in seconds; a hold older than this reads as Free
    pub hold_ttl_seconds: i64,
}

impl AvailabilityConfig {
    /// Hold lifetime as a duration
    pub fn hold_ttl(&self) -> Duration {
        Duration::seconds(self.hold_ttl_seconds)
    }
}

impl Default for AvailabilityConfig {
    fn default() -> Self {
        Self {
            hold_ttl_seconds: 120,
        }
    }
}

impl From<&SchedulingConfig> for AvailabilityConfig {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            hold_ttl_seconds: config.hold_ttl_seconds,
        }
    }
}
