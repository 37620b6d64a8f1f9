//! Configuration for the token codec

use chrono::Duration;
use cm_shared::config::JwtConfig;

/// Configuration for the token codec
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// JWT signing secret
    pub secret: String,
    /// Access token lifetime in seconds
    pub token_ttl_seconds: i64,
}

impl TokenConfig {
    /// Access token lifetime as a duration
    pub fn token_ttl(&self) -> Duration {
        Duration::seconds(self.token_ttl_seconds)
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            secret: "development-secret-please-change-in-production".to_string(),
            token_ttl_seconds: 900,
        }
    }
}

impl From<&JwtConfig> for TokenConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            secret: config.secret.clone(),
            token_ttl_seconds: config.access_token_expiry,
        }
    }
}
