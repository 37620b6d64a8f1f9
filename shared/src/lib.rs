//! Shared utilities and common types for the ClinicManager server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response structures for the API boundary
//! - Utility functions (identifier validation, etc.)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{JwtConfig, SchedulingConfig};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
