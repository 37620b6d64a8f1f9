//! Domain-specific error types for authentication, tokens, and scheduling
//!
//! Credential and token failures carry their precise internal reason here;
//! the authorizer recovers them into uniform outward signals so callers
//! cannot enumerate identities or distinguish which credential part was
//! wrong.

use thiserror::Error;

use crate::domain::entities::appointment::AppointmentStatus;
use crate::domain::entities::identity::Role;

/// Authentication and authorization errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No identity matches the login identifier (internal reason, logged only)
    #[error("Unknown identity")]
    UnknownIdentity,

    /// Secret verification failed (internal reason, logged only)
    #[error("Bad credential")]
    BadCredential,

    /// Uniform login failure exposed at the API boundary
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Token could not be parsed or validated
    #[error("Unauthenticated")]
    Unauthenticated,

    /// Token is valid but does not carry the required role
    #[error("Forbidden: requires {required} role")]
    Forbidden { required: Role },
}

/// Token parsing and issuance errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// Token string has the wrong structure
    #[error("Malformed token")]
    MalformedToken,

    /// Signature verification failed (tamper or forgery)
    #[error("Invalid token signature")]
    InvalidSignature,

    /// Token is past its expiry
    #[error("Token expired")]
    Expired,

    /// Token is not yet within its validity window
    #[error("Token not yet valid")]
    NotYetValid,

    /// Token could not be signed
    #[error("Token generation failed")]
    GenerationFailed,
}

/// Scheduling errors for slots, appointments, and prescriptions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// No slot exists at the given (doctor, time) key
    #[error("Slot not found")]
    SlotNotFound,

    /// Slot is already held or booked
    #[error("Slot unavailable")]
    SlotUnavailable,

    /// Slot is not held under the caller's reservation
    #[error("Slot not held by this reservation")]
    NotHeld,

    /// Appointment does not exist
    #[error("Appointment not found")]
    NotFound,

    /// Appointment lifecycle does not permit the requested transition
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },

    /// Prescription writes require a Scheduled or Completed appointment
    #[error("Appointment does not accept prescriptions in status {status}")]
    AppointmentNotCompletable { status: AppointmentStatus },

    /// The appointment already carries a prescription
    #[error("Prescription already exists for this appointment")]
    AlreadyExists,
}
