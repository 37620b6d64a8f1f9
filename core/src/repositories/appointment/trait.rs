//! Appointment repository trait defining the interface for appointment
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::appointment::Appointment;
use crate::errors::DomainError;

/// Repository trait for Appointment entity persistence operations
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// Create a new appointment
    ///
    /// # Returns
    /// * `Ok(Appointment)` - The created appointment
    /// * `Err(DomainError)` - Creation failed
    async fn create(&self, appointment: Appointment) -> Result<Appointment, DomainError>;

    /// Find an appointment by its unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>, DomainError>;

    /// Update an existing appointment
    ///
    /// # Returns
    /// * `Ok(Appointment)` - The updated appointment
    /// * `Err(DomainError)` - Appointment not found or update failed
    async fn update(&self, appointment: Appointment) -> Result<Appointment, DomainError>;

    /// Delete an appointment (rollback path for failed bookings)
    ///
    /// # Returns
    /// * `Ok(true)` - Appointment was deleted
    /// * `Ok(false)` - Appointment not found
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List all appointments assigned to a doctor
    async fn find_by_doctor(&self, doctor_id: Uuid) -> Result<Vec<Appointment>, DomainError>;

    /// List all appointments owned by a patient
    async fn find_by_patient(&self, patient_id: Uuid) -> Result<Vec<Appointment>, DomainError>;
}
