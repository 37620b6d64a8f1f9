//! Authentication and scheduling configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("your-secret-key-change-in-production"),
            access_token_expiry: 900, // 15 minutes
            issuer: String::from("clinic-manager"),
            audience: String::from("clinic-manager-api"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == "your-secret-key-change-in-production"
    }
}

/// Scheduling configuration for the availability ledger
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulingConfig {
    /// How long a slot hold stays valid before it is treated as stale,
    /// in seconds
    pub hold_ttl_seconds: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            hold_ttl_seconds: 120, // 2 minutes
        }
    }
}

impl SchedulingConfig {
    /// Set the hold TTL in seconds
    pub fn with_hold_ttl_seconds(mut self, seconds: i64) -> Self {
        self.hold_ttl_seconds = seconds;
        self
    }
}
