//! Bookable time slots owned by the availability ledger.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::ScheduleError;

/// Status of a bookable slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// Open for booking
    Free,
    /// Reserved by an in-flight booking attempt
    Held,
    /// Consumed by a scheduled or completed appointment
    Booked,
}

impl fmt::Display for SlotStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotStatus::Free => write!(f, "free"),
            SlotStatus::Held => write!(f, "held"),
            SlotStatus::Booked => write!(f, "booked"),
        }
    }
}

/// Reservation handle returned by a successful hold
///
/// Commit and rollback require the handle, so only the caller that placed
/// a hold can consume it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotHold {
    /// Doctor whose slot is held
    pub doctor_id: Uuid,
    /// Start time of the held slot
    pub slot_time: DateTime<Utc>,
    /// Unique reservation ID
    pub hold_id: Uuid,
}

/// A bookable time slot for one doctor
///
/// All state transitions are pure functions of the slot and the supplied
/// instant, so the repository can apply them inside its per-slot critical
/// section and staleness is re-verified atomically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Doctor this slot belongs to
    pub doctor_id: Uuid,

    /// Start time of the slot
    pub start_time: DateTime<Utc>,

    /// Current status
    pub status: SlotStatus,

    /// Reservation ID of the active hold, if any
    pub hold_id: Option<Uuid>,

    /// Timestamp when the active hold was placed
    pub held_at: Option<DateTime<Utc>>,
}

impl Slot {
    /// Creates a new Free slot
    pub fn new(doctor_id: Uuid, start_time: DateTime<Utc>) -> Self {
        Self {
            doctor_id,
            start_time,
            status: SlotStatus::Free,
            hold_id: None,
            held_at: None,
        }
    }

    /// Checks whether the active hold has outlived its TTL
    ///
    /// A slot with no hold is never stale.
    pub fn hold_is_stale(&self, now: DateTime<Utc>, hold_ttl: Duration) -> bool {
        match self.held_at {
            Some(held_at) => now - held_at >= hold_ttl,
            None => false,
        }
    }

    /// Checks whether the slot can accept a new hold at the given instant
    ///
    /// Free slots are bookable; Held slots read as Free once their hold is
    /// stale, so an abandoned booking flow cannot starve the slot.
    pub fn is_bookable(&self, now: DateTime<Utc>, hold_ttl: Duration) -> bool {
        match self.status {
            SlotStatus::Free => true,
            SlotStatus::Held => self.hold_is_stale(now, hold_ttl),
            SlotStatus::Booked => false,
        }
    }

    /// Transitions Free (or stale-Held) to Held under the given reservation
    ///
    /// # Errors
    ///
    /// `SlotUnavailable` if the slot is Booked or carries a live hold.
    pub fn try_hold(
        &mut self,
        hold_id: Uuid,
        now: DateTime<Utc>,
        hold_ttl: Duration,
    ) -> Result<(), ScheduleError> {
        if !self.is_bookable(now, hold_ttl) {
            return Err(ScheduleError::SlotUnavailable);
        }
        self.status = SlotStatus::Held;
        self.hold_id = Some(hold_id);
        self.held_at = Some(now);
        Ok(())
    }

    /// Transitions Held to Booked for the matching, unexpired reservation
    ///
    /// # Errors
    ///
    /// `NotHeld` if the slot is not held, is held under a different
    /// reservation, or the reservation has gone stale.
    pub fn try_commit(
        &mut self,
        hold_id: Uuid,
        now: DateTime<Utc>,
        hold_ttl: Duration,
    ) -> Result<(), ScheduleError> {
        if self.status != SlotStatus::Held
            || self.hold_id != Some(hold_id)
            || self.hold_is_stale(now, hold_ttl)
        {
            return Err(ScheduleError::NotHeld);
        }
        self.status = SlotStatus::Booked;
        self.hold_id = None;
        self.held_at = None;
        Ok(())
    }

    /// Transitions Held or Booked back to Free
    ///
    /// Releasing an already-Free slot is a no-op; release is idempotent.
    pub fn release(&mut self) {
        self.status = SlotStatus::Free;
        self.hold_id = None;
        self.held_at = None;
    }
}
