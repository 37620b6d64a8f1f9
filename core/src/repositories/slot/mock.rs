//! In-memory implementation of SlotRepository for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::domain::entities::slot::Slot;
use crate::errors::{DomainError, ScheduleError};

use super::trait_::{SlotMutation, SlotRepository};

type SlotKey = (Uuid, DateTime<Utc>);

/// In-memory slot store with per-slot locking
///
/// The outer map lock is only held long enough to locate a slot; each slot
/// carries its own mutex, so mutations of the same slot serialize while
/// different slots never block each other.
pub struct InMemorySlotRepository {
    slots: RwLock<HashMap<SlotKey, Arc<Mutex<Slot>>>>,
}

impl InMemorySlotRepository {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    async fn entry(&self, doctor_id: Uuid, start_time: DateTime<Utc>) -> Option<Arc<Mutex<Slot>>> {
        let slots = self.slots.read().await;
        slots.get(&(doctor_id, start_time)).cloned()
    }
}

impl Default for InMemorySlotRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlotRepository for InMemorySlotRepository {
    async fn insert(&self, slot: Slot) -> Result<Slot, DomainError> {
        let mut slots = self.slots.write().await;
        let key = (slot.doctor_id, slot.start_time);
        if slots.contains_key(&key) {
            return Err(ScheduleError::SlotUnavailable.into());
        }
        slots.insert(key, Arc::new(Mutex::new(slot.clone())));
        Ok(slot)
    }

    async fn find(
        &self,
        doctor_id: Uuid,
        start_time: DateTime<Utc>,
    ) -> Result<Option<Slot>, DomainError> {
        match self.entry(doctor_id, start_time).await {
            Some(entry) => Ok(Some(entry.lock().await.clone())),
            None => Ok(None),
        }
    }

    async fn list_from(
        &self,
        doctor_id: Uuid,
        from: DateTime<Utc>,
    ) -> Result<Vec<Slot>, DomainError> {
        let entries: Vec<Arc<Mutex<Slot>>> = {
            let slots = self.slots.read().await;
            slots
                .iter()
                .filter(|((doc, start), _)| *doc == doctor_id && *start >= from)
                .map(|(_, entry)| entry.clone())
                .collect()
        };

        let mut result = Vec::with_capacity(entries.len());
        for entry in entries {
            result.push(entry.lock().await.clone());
        }
        Ok(result)
    }

    async fn mutate(
        &self,
        doctor_id: Uuid,
        start_time: DateTime<Utc>,
        mutation: SlotMutation,
    ) -> Result<Slot, DomainError> {
        let entry = self
            .entry(doctor_id, start_time)
            .await
            .ok_or(ScheduleError::SlotNotFound)?;

        let mut guard = entry.lock().await;
        let mut updated = guard.clone();
        mutation(&mut updated)?;
        *guard = updated.clone();
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::slot::SlotStatus;
    use chrono::Duration;

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemorySlotRepository::new();
        let doctor_id = Uuid::new_v4();
        let start = Utc::now();

        repo.insert(Slot::new(doctor_id, start)).await.unwrap();

        let found = repo.find(doctor_id, start).await.unwrap().unwrap();
        assert_eq!(found.status, SlotStatus::Free);
    }

    #[tokio::test]
    async fn test_duplicate_insert_rejected() {
        let repo = InMemorySlotRepository::new();
        let doctor_id = Uuid::new_v4();
        let start = Utc::now();

        repo.insert(Slot::new(doctor_id, start)).await.unwrap();
        let err = repo.insert(Slot::new(doctor_id, start)).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Schedule(ScheduleError::SlotUnavailable)
        ));
    }

    #[tokio::test]
    async fn test_list_from_filters_by_doctor_and_time() {
        let repo = InMemorySlotRepository::new();
        let doctor_id = Uuid::new_v4();
        let other_doctor = Uuid::new_v4();
        let base = Utc::now();

        repo.insert(Slot::new(doctor_id, base)).await.unwrap();
        repo.insert(Slot::new(doctor_id, base + Duration::hours(1)))
            .await
            .unwrap();
        repo.insert(Slot::new(doctor_id, base - Duration::hours(1)))
            .await
            .unwrap();
        repo.insert(Slot::new(other_doctor, base)).await.unwrap();

        let listed = repo.list_from(doctor_id, base).await.unwrap();
        assert_eq!(listed.len(), 2);
        assert!(listed.iter().all(|s| s.doctor_id == doctor_id));
    }

    #[tokio::test]
    async fn test_mutate_missing_slot() {
        let repo = InMemorySlotRepository::new();
        let err = repo
            .mutate(Uuid::new_v4(), Utc::now(), Box::new(|_| Ok(())))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Schedule(ScheduleError::SlotNotFound)
        ));
    }

    #[tokio::test]
    async fn test_failed_mutation_leaves_slot_unchanged() {
        let repo = InMemorySlotRepository::new();
        let doctor_id = Uuid::new_v4();
        let start = Utc::now();
        repo.insert(Slot::new(doctor_id, start)).await.unwrap();

        let err = repo
            .mutate(
                doctor_id,
                start,
                Box::new(|slot| {
                    slot.status = SlotStatus::Booked;
                    Err(ScheduleError::SlotUnavailable.into())
                }),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Schedule(ScheduleError::SlotUnavailable)
        ));

        let found = repo.find(doctor_id, start).await.unwrap().unwrap();
        assert_eq!(found.status, SlotStatus::Free);
    }
}
