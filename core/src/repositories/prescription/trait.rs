//! Prescription repository trait defining the interface for prescription
//! persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::prescription::Prescription;
use crate::errors::DomainError;

/// Repository trait for Prescription entity persistence operations
///
/// Prescriptions are keyed uniquely by appointment; implementations must
/// enforce at most one prescription per appointment.
#[async_trait]
pub trait PrescriptionRepository: Send + Sync {
    /// Create a new prescription
    ///
    /// # Returns
    /// * `Ok(Prescription)` - The created prescription
    /// * `Err(DomainError)` - `ScheduleError::AlreadyExists` if the
    ///   appointment already carries a prescription
    async fn create(&self, prescription: Prescription) -> Result<Prescription, DomainError>;

    /// Find the prescription attached to an appointment
    async fn find_by_appointment(
        &self,
        appointment_id: Uuid,
    ) -> Result<Option<Prescription>, DomainError>;
}
