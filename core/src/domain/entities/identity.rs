//! Identity entity representing a registered account in the clinic system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Role attached to an identity
///
/// Roles are a flat enumeration compared with exact-match equality. An
/// Admin token never satisfies a Doctor-only check; there is no implicit
/// privilege hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Clinic administrator (username login)
    Admin,
    /// Practicing doctor (email login)
    Doctor,
    /// Registered patient (email login)
    Patient,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Doctor => write!(f, "doctor"),
            Role::Patient => write!(f, "patient"),
        }
    }
}

/// Identity entity representing a login-capable account
///
/// Immutable once issued; secret rotation is handled by the credential
/// store, not by this core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Role this identity acts under
    pub role: Role,

    /// Login identifier (email for Doctor/Patient, username for Admin)
    pub identifier: String,

    /// Hashed login secret; the hashing scheme belongs to the credential store
    pub secret_hash: String,

    /// Timestamp when the identity was created
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Creates a new Identity instance
    pub fn new(role: Role, identifier: String, secret_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            identifier,
            secret_hash,
            created_at: Utc::now(),
        }
    }

    /// Checks if the identity holds the given role
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_identity() {
        let identity = Identity::new(
            Role::Doctor,
            "who@clinic.example.com".to_string(),
            "hash".to_string(),
        );

        assert_eq!(identity.role, Role::Doctor);
        assert_eq!(identity.identifier, "who@clinic.example.com");
        assert!(identity.has_role(Role::Doctor));
        assert!(!identity.has_role(Role::Admin));
    }

    #[test]
    fn test_role_exact_match() {
        let admin = Identity::new(Role::Admin, "admin".to_string(), "hash".to_string());

        // Admin does not implicitly satisfy other role checks
        assert!(!admin.has_role(Role::Doctor));
        assert!(!admin.has_role(Role::Patient));
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::Patient).unwrap();
        assert_eq!(json, "\"patient\"");

        let role: Role = serde_json::from_str("\"doctor\"").unwrap();
        assert_eq!(role, Role::Doctor);
    }
}
