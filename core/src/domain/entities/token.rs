//! Token claims for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::Role;

/// JWT issuer
pub const JWT_ISSUER: &str = "clinic-manager";

/// JWT audience
pub const JWT_AUDIENCE: &str = "clinic-manager-api";

/// Claims structure for the JWT payload
///
/// Tokens are stateless and self-contained; nothing about them is stored
/// server-side. A token is never mutated, only reissued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (identity ID)
    pub sub: String,

    /// Role the subject acts under
    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// # Arguments
    ///
    /// * `subject` - The identity's UUID
    /// * `role` - The role the token is bound to
    /// * `now` - Issue time
    /// * `ttl` - Token lifetime
    pub fn new(subject: Uuid, role: Role, now: DateTime<Utc>, ttl: Duration) -> Self {
        let expiry = now + ttl;

        Self {
            sub: subject.to_string(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired at the given instant
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp() >= self.exp
    }

    /// Checks if the claims are valid at the given instant
    /// (after nbf and before exp)
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        let ts = now.timestamp();
        ts >= self.nbf && ts < self.exp
    }

    /// Gets the subject ID from the claims
    pub fn subject(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}
