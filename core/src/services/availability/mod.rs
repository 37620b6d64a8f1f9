//! Availability ledger module
//!
//! Owns doctor slots and the hold protocol that keeps booking race-free:
//! a slot is reserved with a short-lived hold, then either committed into
//! a booking or released. Abandoned holds expire implicitly, so a crashed
//! booking flow never strands a slot.

mod config;
mod ledger;

#[cfg(test)]
mod tests;

pub use config::AvailabilityConfig;
pub use ledger::AvailabilityLedger;
