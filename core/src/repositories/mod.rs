//! Repository interfaces abstracting persistence as capability traits
//!
//! The core depends only on these traits; any conforming adapter (the
//! in-memory implementations here for tests, a real store in production)
//! can be substituted.

pub mod appointment;
pub mod credential;
pub mod prescription;
pub mod slot;

pub use appointment::{AppointmentRepository, InMemoryAppointmentRepository};
pub use credential::{CredentialStore, InMemoryCredentialStore};
pub use prescription::{InMemoryPrescriptionRepository, PrescriptionRepository};
pub use slot::{InMemorySlotRepository, SlotMutation, SlotRepository};
