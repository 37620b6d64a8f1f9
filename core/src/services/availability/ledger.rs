//! Availability ledger implementation

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::slot::{Slot, SlotHold, SlotStatus};
use crate::errors::{DomainError, DomainResult, ScheduleError};
use crate::repositories::SlotRepository;
use crate::services::clock::Clock;

use super::config::AvailabilityConfig;

/// Ledger of bookable slots per doctor
///
/// The ledger is the only writer of slot state. Every transition runs
/// inside the repository's per-slot critical section, so two callers
/// racing for the same slot see a strict winner/loser outcome while
/// operations on different slots never contend.
pub struct AvailabilityLedger<S: SlotRepository> {
    /// Slot store
    slots: Arc<S>,
    /// Ledger configuration
    config: AvailabilityConfig,
    /// Clock used for hold staleness checks
    clock: Arc<dyn Clock>,
}

impl<S: SlotRepository> AvailabilityLedger<S> {
    /// Create a new ledger over the given slot store
    pub fn new(slots: Arc<S>, config: AvailabilityConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            slots,
            config,
            clock,
        }
    }

    /// Publish a new Free slot for a doctor
    ///
    /// # Errors
    ///
    /// `SlotUnavailable` if a slot already exists at (doctor, start time).
    pub async fn open_slot(
        &self,
        doctor_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> DomainResult<Slot> {
        let slot = self.slots.insert(Slot::new(doctor_id, start_time)).await?;
        debug!(%doctor_id, %start_time, "slot opened");
        Ok(slot)
    }

    /// List a doctor's bookable slots starting at or after `from`
    ///
    /// Held slots whose hold has gone stale are reported as free; the
    /// listing is a snapshot and carries no reservation.
    pub async fn list_free(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
    ) -> DomainResult<Vec<Slot>> {
        let now = self.clock.now();
        let hold_ttl = self.config.hold_ttl();

        let mut free: Vec<Slot> = self
            .slots
            .list_from(doctor_id, from)
            .await?
            .into_iter()
            .filter(|slot| slot.is_bookable(now, hold_ttl))
            .collect();
        free.sort_by_key(|slot| slot.start_time);
        Ok(free)
    }

    /// Reserve a slot for an in-flight booking
    ///
    /// Succeeds only if the slot is Free or carries a stale hold; the
    /// check and the transition happen atomically, so at most one of any
    /// set of concurrent callers wins.
    ///
    /// # Errors
    ///
    /// * `SlotNotFound` - No slot exists at the key
    /// * `SlotUnavailable` - The slot is Booked or carries a live hold
    pub async fn hold(
        &self,
        doctor_id: Uuid,
        slot_time: DateTime<Utc>,
    ) -> DomainResult<SlotHold> {
        let hold_id = Uuid::new_v4();
        let now = self.clock.now();
        let hold_ttl = self.config.hold_ttl();

        self.slots
            .mutate(
                doctor_id,
                slot_time,
                Box::new(move |slot| {
                    slot.try_hold(hold_id, now, hold_ttl)?;
                    Ok(())
                }),
            )
            .await
            .map_err(|err| {
                debug!(%doctor_id, %slot_time, %err, "hold rejected");
                err
            })?;

        Ok(SlotHold {
            doctor_id,
            slot_time,
            hold_id,
        })
    }

    /// Commit a hold into a booking
    ///
    /// # Errors
    ///
    /// `NotHeld` if the slot is no longer held under this reservation,
    /// including the case where the hold expired and another caller took
    /// the slot over.
    pub async fn commit(&self, hold: &SlotHold) -> DomainResult<()> {
        let hold_id = hold.hold_id;
        let now = self.clock.now();
        let hold_ttl = self.config.hold_ttl();

        self.slots
            .mutate(
                hold.doctor_id,
                hold.slot_time,
                Box::new(move |slot| {
                    slot.try_commit(hold_id, now, hold_ttl)?;
                    Ok(())
                }),
            )
            .await
            .map_err(|err| {
                warn!(doctor_id = %hold.doctor_id, slot_time = %hold.slot_time, %err, "commit rejected");
                err
            })?;
        Ok(())
    }

    /// Roll back a hold, freeing the slot only if it still carries this
    /// reservation
    ///
    /// Safe to call after the hold may have expired: if another caller has
    /// since taken the slot over, their state is left untouched. Missing
    /// slots and already-released holds are ignored.
    pub async fn release_hold(&self, hold: &SlotHold) -> DomainResult<()> {
        let hold_id = hold.hold_id;

        let result = self
            .slots
            .mutate(
                hold.doctor_id,
                hold.slot_time,
                Box::new(move |slot| {
                    if slot.status == SlotStatus::Held && slot.hold_id == Some(hold_id) {
                        slot.release();
                    }
                    Ok(())
                }),
            )
            .await;

        match result {
            Ok(_) => Ok(()),
            // Rollback of a vanished slot is not an error
            Err(DomainError::Schedule(ScheduleError::SlotNotFound)) => Ok(()),
            Err(err) => Err(err),
        }
    }

    /// Free a slot unconditionally
    ///
    /// Used when a booking is cancelled and its slot should reopen.
    ///
    /// # Errors
    ///
    /// `SlotNotFound` if no slot exists at the key.
    pub async fn release(&self, doctor_id: Uuid, slot_time: DateTime<Utc>) -> DomainResult<()> {
        self.slots
            .mutate(
                doctor_id,
                slot_time,
                Box::new(|slot| {
                    slot.release();
                    Ok(())
                }),
            )
            .await?;
        debug!(%doctor_id, %slot_time, "slot released");
        Ok(())
    }
}
