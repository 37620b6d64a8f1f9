//! Domain entities representing core business objects.

pub mod appointment;
pub mod identity;
pub mod prescription;
pub mod slot;
pub mod token;

// Re-export commonly used types
pub use appointment::{Appointment, AppointmentStatus};
pub use identity::{Identity, Role};
pub use prescription::Prescription;
pub use slot::{Slot, SlotHold, SlotStatus};
pub use token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
