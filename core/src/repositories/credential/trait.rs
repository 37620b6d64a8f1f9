//! Credential store trait defining the identity lookup/verify capability.

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::errors::DomainError;

/// Capability trait for identity lookup and secret verification
///
/// The hashing scheme is an implementation detail of the store; the core
/// only consumes lookup-by-identifier and secret-verify. Implementations
/// should verify in a way that does not reveal whether the identifier or
/// the secret was wrong.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find an identity by its login identifier
    ///
    /// # Returns
    /// * `Ok(Some(Identity))` - Identity found
    /// * `Ok(None)` - No identity registered under the identifier
    /// * `Err(DomainError)` - Store error occurred
    async fn find_by_identifier(&self, identifier: &str)
        -> Result<Option<Identity>, DomainError>;

    /// Verify a plaintext secret against the identity's stored hash
    ///
    /// # Returns
    /// * `Ok(true)` - Secret matches
    /// * `Ok(false)` - Secret does not match
    /// * `Err(DomainError)` - Verification could not be performed
    async fn verify_secret(&self, identity: &Identity, secret: &str)
        -> Result<bool, DomainError>;
}
