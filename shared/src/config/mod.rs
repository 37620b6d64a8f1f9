//! Configuration module with business-specific sub-modules
//!
//! - `auth` - Token signing and scheduling configuration

pub mod auth;

pub use auth::{JwtConfig, SchedulingConfig};
