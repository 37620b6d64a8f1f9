//! In-memory implementation of CredentialStore for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::identity::{Identity, Role};
use crate::errors::DomainError;

use super::trait_::CredentialStore;

// Low bcrypt cost keeps test registration fast; production stores pick
// their own scheme behind the trait.
const MOCK_BCRYPT_COST: u32 = 4;

/// In-memory credential store backed by bcrypt hashes
pub struct InMemoryCredentialStore {
    identities: Arc<RwLock<HashMap<String, Identity>>>,
}

impl InMemoryCredentialStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register an identity with a plaintext secret, returning it
    pub async fn register(
        &self,
        role: Role,
        identifier: &str,
        secret: &str,
    ) -> Result<Identity, DomainError> {
        let secret_hash =
            bcrypt::hash(secret, MOCK_BCRYPT_COST).map_err(|e| DomainError::Internal {
                message: format!("Failed to hash secret: {}", e),
            })?;

        let identity = Identity::new(role, identifier.to_string(), secret_hash);

        let mut identities = self.identities.write().await;
        if identities.contains_key(identifier) {
            return Err(DomainError::Validation {
                message: "Identifier already registered".to_string(),
            });
        }
        identities.insert(identifier.to_string(), identity.clone());
        Ok(identity)
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn find_by_identifier(
        &self,
        identifier: &str,
    ) -> Result<Option<Identity>, DomainError> {
        let identities = self.identities.read().await;
        Ok(identities.get(identifier).cloned())
    }

    async fn verify_secret(
        &self,
        identity: &Identity,
        secret: &str,
    ) -> Result<bool, DomainError> {
        bcrypt::verify(secret, &identity.secret_hash).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify secret: {}", e),
        })
    }
}
