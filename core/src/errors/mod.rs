//! Domain-specific error types and error handling.

mod types;

pub use types::{AuthError, ScheduleError, TokenError};

use cm_shared::types::response::ErrorResponse;
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

pub type DomainResult<T> = Result<T, DomainError>;

/// Convert a DomainError into the outward error response
///
/// All credential-shaped failures collapse into the single
/// `INVALID_CREDENTIALS` code so the boundary never reveals which part of
/// a login was wrong.
impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let code = match err {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Auth(auth) => match auth {
                AuthError::UnknownIdentity
                | AuthError::BadCredential
                | AuthError::InvalidCredentials => "INVALID_CREDENTIALS",
                AuthError::Unauthenticated => "UNAUTHENTICATED",
                AuthError::Forbidden { .. } => "FORBIDDEN",
            },
            DomainError::Token(token) => match token {
                TokenError::MalformedToken => "MALFORMED_TOKEN",
                TokenError::InvalidSignature => "INVALID_SIGNATURE",
                TokenError::Expired => "TOKEN_EXPIRED",
                TokenError::NotYetValid => "TOKEN_NOT_YET_VALID",
                TokenError::GenerationFailed => "TOKEN_GENERATION_FAILED",
            },
            DomainError::Schedule(schedule) => match schedule {
                ScheduleError::SlotNotFound => "SLOT_NOT_FOUND",
                ScheduleError::SlotUnavailable => "SLOT_UNAVAILABLE",
                ScheduleError::NotHeld => "NOT_HELD",
                ScheduleError::NotFound => "APPOINTMENT_NOT_FOUND",
                ScheduleError::InvalidTransition { .. } => "INVALID_TRANSITION",
                ScheduleError::AppointmentNotCompletable { .. } => "APPOINTMENT_NOT_COMPLETABLE",
                ScheduleError::AlreadyExists => "PRESCRIPTION_ALREADY_EXISTS",
            },
        };

        // Uniform message for credential failures regardless of variant
        let message = match code {
            "INVALID_CREDENTIALS" => "Invalid credentials".to_string(),
            _ => err.to_string(),
        };

        ErrorResponse::new(code, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_are_uniform_outward() {
        let unknown: ErrorResponse = (&DomainError::Auth(AuthError::UnknownIdentity)).into();
        let bad: ErrorResponse = (&DomainError::Auth(AuthError::BadCredential)).into();
        let uniform: ErrorResponse = (&DomainError::Auth(AuthError::InvalidCredentials)).into();

        assert_eq!(unknown.error, "INVALID_CREDENTIALS");
        assert_eq!(bad.error, "INVALID_CREDENTIALS");
        assert_eq!(uniform.error, "INVALID_CREDENTIALS");
        assert_eq!(unknown.message, bad.message);
        assert_eq!(bad.message, uniform.message);
    }

    #[test]
    fn test_schedule_errors_stay_specific() {
        let response: ErrorResponse = (&DomainError::Schedule(ScheduleError::SlotUnavailable)).into();
        assert_eq!(response.error, "SLOT_UNAVAILABLE");
        assert!(response.message.contains("unavailable"));
    }

    #[test]
    fn test_token_error_bridges_into_domain_error() {
        let err: DomainError = TokenError::Expired.into();
        let response: ErrorResponse = (&err).into();
        assert_eq!(response.error, "TOKEN_EXPIRED");
    }
}
