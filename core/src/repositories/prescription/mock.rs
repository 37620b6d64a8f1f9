//! In-memory implementation of PrescriptionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::prescription::Prescription;
use crate::errors::{DomainError, ScheduleError};

use super::trait_::PrescriptionRepository;

/// In-memory prescription store keyed by appointment
pub struct InMemoryPrescriptionRepository {
    prescriptions: Arc<RwLock<HashMap<Uuid, Prescription>>>,
}

impl InMemoryPrescriptionRepository {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            prescriptions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryPrescriptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PrescriptionRepository for InMemoryPrescriptionRepository {
    async fn create(&self, prescription: Prescription) -> Result<Prescription, DomainError> {
        let mut prescriptions = self.prescriptions.write().await;
        if prescriptions.contains_key(&prescription.appointment_id) {
            return Err(ScheduleError::AlreadyExists.into());
        }
        prescriptions.insert(prescription.appointment_id, prescription.clone());
        Ok(prescription)
    }

    async fn find_by_appointment(
        &self,
        appointment_id: Uuid,
    ) -> Result<Option<Prescription>, DomainError> {
        let prescriptions = self.prescriptions.read().await;
        Ok(prescriptions.get(&appointment_id).cloned())
    }
}
