//! Type definitions shared across server modules
//!
//! - `response` - API response wrappers consumed by the controller layer

pub mod response;

pub use response::{ApiResponse, ErrorResponse};
