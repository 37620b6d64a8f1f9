//! Scheduling coordinator module
//!
//! Orchestrates bookings end to end: authorization, slot reservation,
//! appointment lifecycle, and prescriptions. The coordinator never leaves
//! a slot held on a failure path; a booking either lands fully or the
//! slot returns to the state a competing caller would expect.

mod service;

#[cfg(test)]
mod tests;

pub use service::SchedulingService;
