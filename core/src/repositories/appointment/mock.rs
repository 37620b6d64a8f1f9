//! In-memory implementation of AppointmentRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::appointment::Appointment;
use crate::errors::{DomainError, ScheduleError};

use super::trait_::AppointmentRepository;

/// In-memory appointment store
pub struct InMemoryAppointmentRepository {
    appointments: Arc<RwLock<HashMap<Uuid, Appointment>>>,
}

impl InMemoryAppointmentRepository {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            appointments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryAppointmentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn create(&self, appointment: Appointment) -> Result<Appointment, DomainError> {
        let mut appointments = self.appointments.write().await;
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        Ok(appointments.get(&id).cloned())
    }

    async fn update(&self, appointment: Appointment) -> Result<Appointment, DomainError> {
        let mut appointments = self.appointments.write().await;
        if !appointments.contains_key(&appointment.id) {
            return Err(ScheduleError::NotFound.into());
        }
        appointments.insert(appointment.id, appointment.clone());
        Ok(appointment)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut appointments = self.appointments.write().await;
        Ok(appointments.remove(&id).is_some())
    }

    async fn find_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        let mut found: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.doctor_id == doctor_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.slot_time);
        Ok(found)
    }

    async fn find_by_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>, DomainError> {
        let appointments = self.appointments.read().await;
        let mut found: Vec<Appointment> = appointments
            .values()
            .filter(|a| a.patient_id == patient_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.slot_time);
        Ok(found)
    }
}
