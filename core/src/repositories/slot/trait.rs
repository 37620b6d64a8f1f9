//! Slot repository trait defining the interface for slot persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::slot::Slot;
use crate::errors::DomainError;

/// State transition applied to a slot inside the repository's critical
/// section. If it returns an error, the slot is left unchanged.
pub type SlotMutation = Box<dyn FnOnce(&mut Slot) -> Result<(), DomainError> + Send>;

/// Repository trait for Slot persistence operations
///
/// A slot is keyed by (doctor_id, start_time). `mutate` is the
/// transactional compare-and-set of the scheduling model: implementations
/// must serialize mutations of the same slot while letting operations on
/// different slots proceed independently.
#[async_trait]
pub trait SlotRepository: Send + Sync {
    /// Insert a new slot
    ///
    /// # Returns
    /// * `Ok(Slot)` - The inserted slot
    /// * `Err(DomainError)` - A slot already exists at this key, or a
    ///   store error occurred
    async fn insert(&self, slot: Slot) -> Result<Slot, DomainError>;

    /// Find a slot by its key
    async fn find(
        &self,
        doctor_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> Result<Option<Slot>, DomainError>;

    /// List all of a doctor's slots starting at or after `from`
    ///
    /// Each call reflects the latest state; no cursor is retained.
    async fn list_from(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Slot>, DomainError>;

    /// Atomically apply a state transition to the slot at the given key
    ///
    /// The mutation runs under per-slot mutual exclusion; no other caller
    /// can observe or change the slot between the read and the write. If
    /// the mutation fails, the slot is left unchanged and the error is
    /// returned.
    ///
    /// # Returns
    /// * `Ok(Slot)` - The slot after the mutation
    /// * `Err(DomainError)` - `ScheduleError::SlotNotFound` if no slot
    ///   exists at the key, otherwise the mutation's error
    async fn mutate(
        &self,
        doctor_id: Uuid,
        start_time: DateTime<Utc>,
        mutation: SlotMutation,
    ) -> Result<Slot, DomainError>;
}
