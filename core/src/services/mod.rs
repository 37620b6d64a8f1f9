//! Business services containing domain logic and use cases.

pub mod auth;
pub mod availability;
pub mod clock;
pub mod scheduling;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use availability::{AvailabilityConfig, AvailabilityLedger};
pub use clock::{Clock, FixedClock, SystemClock};
pub use scheduling::SchedulingService;
pub use token::{TokenCodec, TokenConfig};
