//! Appointment entity linking a patient, a doctor, and a slot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::ScheduleError;

/// Lifecycle status of an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    /// Booked and upcoming; the referenced slot is Booked
    Scheduled,
    /// Visit took place; terminal, the slot stays consumed
    Completed,
    /// Called off; the referenced slot returns to Free
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Scheduled => write!(f, "scheduled"),
            AppointmentStatus::Completed => write!(f, "completed"),
            AppointmentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Appointment entity
///
/// The appointment lifecycle drives slot status: Scheduled keeps the slot
/// Booked, Cancelled frees it, Completed leaves it consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier for the appointment
    pub id: Uuid,

    /// Doctor the appointment is with
    pub doctor_id: Uuid,

    /// Patient the appointment is for
    pub patient_id: Uuid,

    /// Start time of the referenced slot; (doctor_id, slot_time) keys the slot
    pub slot_time: DateTime<Utc>,

    /// Current lifecycle status
    pub status: AppointmentStatus,

    /// Timestamp when the appointment was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the appointment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    /// Creates a new Scheduled appointment
    pub fn new(doctor_id: Uuid, patient_id: Uuid, slot_time: DateTime<Utc>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            doctor_id,
            patient_id,
            slot_time,
            status: AppointmentStatus::Scheduled,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the appointment Cancelled
    ///
    /// # Errors
    ///
    /// `InvalidTransition` if the appointment is Completed (terminal).
    /// Cancelling an already-Cancelled appointment is handled by the
    /// coordinator as an idempotent success and never reaches here.
    pub fn cancel(&mut self) -> Result<(), ScheduleError> {
        match self.status {
            AppointmentStatus::Scheduled | AppointmentStatus::Cancelled => {
                self.status = AppointmentStatus::Cancelled;
                self.updated_at = Utc::now();
                Ok(())
            }
            AppointmentStatus::Completed => Err(ScheduleError::InvalidTransition {
                from: self.status,
                to: AppointmentStatus::Cancelled,
            }),
        }
    }

    /// Marks the appointment Completed
    ///
    /// # Errors
    ///
    /// `InvalidTransition` unless the appointment is currently Scheduled.
    pub fn complete(&mut self) -> Result<(), ScheduleError> {
        match self.status {
            AppointmentStatus::Scheduled => {
                self.status = AppointmentStatus::Completed;
                self.updated_at = Utc::now();
                Ok(())
            }
            _ => Err(ScheduleError::InvalidTransition {
                from: self.status,
                to: AppointmentStatus::Completed,
            }),
        }
    }

    /// Checks whether a prescription may be attached
    ///
    /// Prescriptions may be written during or after the visit.
    pub fn accepts_prescription(&self) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Scheduled | AppointmentStatus::Completed
        )
    }

    /// Checks if the appointment is cancelled
    pub fn is_cancelled(&self) -> bool {
        self.status == AppointmentStatus::Cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_appointment_is_scheduled() {
        let appointment = Appointment::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert!(appointment.accepts_prescription());
    }

    #[test]
    fn test_cancel_scheduled() {
        let mut appointment = Appointment::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        appointment.cancel().unwrap();
        assert!(appointment.is_cancelled());
        assert!(!appointment.accepts_prescription());
    }

    #[test]
    fn test_cancel_completed_rejected() {
        let mut appointment = Appointment::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        appointment.complete().unwrap();

        let err = appointment.cancel().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTransition { .. }));
    }

    #[test]
    fn test_complete_twice_rejected() {
        let mut appointment = Appointment::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        appointment.complete().unwrap();

        let err = appointment.complete().unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidTransition { .. }));
    }

    #[test]
    fn test_completed_accepts_prescription() {
        let mut appointment = Appointment::new(Uuid::new_v4(), Uuid::new_v4(), Utc::now());
        appointment.complete().unwrap();
        assert!(appointment.accepts_prescription());
    }
}
