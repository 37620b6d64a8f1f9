//! Prescription entity attached to an appointment.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prescription written by the assigned doctor
///
/// Keyed uniquely by appointment (1:1) and immutable after creation in
/// this core; update policy is an external concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    /// Unique identifier for the prescription
    pub id: Uuid,

    /// Appointment this prescription belongs to
    pub appointment_id: Uuid,

    /// Prescription contents (medication, dosage, notes)
    pub content: String,

    /// Timestamp when the prescription was written
    pub created_at: DateTime<Utc>,
}

impl Prescription {
    /// Creates a new prescription for an appointment
    pub fn new(appointment_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            appointment_id,
            content,
            created_at: Utc::now(),
        }
    }
}
