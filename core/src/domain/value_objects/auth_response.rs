//! Login response value object for API responses.

use serde::{Deserialize, Serialize};

use crate::domain::entities::identity::Role;

/// Response returned after a successful login
///
/// Contains the opaque token string, its lifetime, and the role the token
/// is bound to. The token's internal structure is not exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Signed access token for subsequent privileged calls
    pub token: String,

    /// Token expiration time in seconds
    pub expires_in: i64,

    /// Role the token is bound to
    pub role: Role,
}

impl LoginResponse {
    /// Creates a new login response
    pub fn new(token: String, expires_in: i64, role: Role) -> Self {
        Self {
            token,
            expires_in,
            role,
        }
    }
}
