//! Main authorization service implementation

use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use cm_shared::utils::validation;

use crate::domain::entities::identity::Role;
use crate::domain::value_objects::LoginResponse;
use crate::errors::{AuthError, DomainError, DomainResult};
use crate::repositories::CredentialStore;
use crate::services::token::TokenCodec;

use super::config::AuthServiceConfig;

/// Authorization service gating every privileged operation
///
/// Logins mint role-bound tokens via the token codec; every subsequent
/// privileged call validates its token here. Role checks are exact-match:
/// an Admin token never satisfies a Doctor-only check.
pub struct AuthService<C: CredentialStore> {
    /// Credential store for identity lookup and secret verification
    credentials: Arc<C>,
    /// Codec for token issuance and parsing
    codec: Arc<TokenCodec>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<C: CredentialStore> AuthService<C> {
    /// Create a new authorization service
    pub fn new(credentials: Arc<C>, codec: Arc<TokenCodec>, config: AuthServiceConfig) -> Self {
        Self {
            credentials,
            codec,
            config,
        }
    }

    /// Authenticate a caller and mint a role-bound token
    ///
    /// Looks up the identity, verifies the secret, and issues a token
    /// bound to the identity's role. Every failure (unknown identifier,
    /// wrong secret, role mismatch) surfaces as the same
    /// `InvalidCredentials` error; the specific reason is only logged.
    ///
    /// # Arguments
    ///
    /// * `identifier` - Email (Doctor/Patient) or username (Admin)
    /// * `secret` - Plaintext login secret
    /// * `expected_role` - Role the caller claims to log in as
    pub async fn login(
        &self,
        identifier: &str,
        secret: &str,
        expected_role: Role,
    ) -> DomainResult<LoginResponse> {
        match self.check_credentials(identifier, secret, expected_role).await {
            Ok(response) => {
                debug!(role = %expected_role, "login succeeded");
                Ok(response)
            }
            Err(reason) => {
                // Uniform outward failure; the reason stays in the log
                warn!(role = %expected_role, %reason, "login rejected");
                Err(DomainError::Auth(AuthError::InvalidCredentials))
            }
        }
    }

    async fn check_credentials(
        &self,
        identifier: &str,
        secret: &str,
        expected_role: Role,
    ) -> Result<LoginResponse, DomainError> {
        if !validation::not_empty(identifier)
            || !validation::length_between(identifier, 1, self.config.max_identifier_length)
        {
            return Err(AuthError::UnknownIdentity.into());
        }

        let identity = self
            .credentials
            .find_by_identifier(identifier)
            .await?
            .ok_or(AuthError::UnknownIdentity)?;

        // An identifier registered under another role is indistinguishable
        // from an unknown identifier at the boundary
        if identity.role != expected_role {
            return Err(AuthError::UnknownIdentity.into());
        }

        if !self.credentials.verify_secret(&identity, secret).await? {
            return Err(AuthError::BadCredential.into());
        }

        let ttl = self.codec.token_ttl();
        let token = self.codec.issue(&identity, ttl)?;
        Ok(LoginResponse::new(token, ttl.num_seconds(), identity.role))
    }

    /// Validate a token against a required role
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - Subject id carried by the token
    /// * `Err(Unauthenticated)` - Token failed to parse (any reason)
    /// * `Err(Forbidden)` - Token is valid but carries another role
    pub fn authorize(&self, token: &str, required_role: Role) -> DomainResult<Uuid> {
        let (subject, role) = self.parse_subject(token)?;
        if role != required_role {
            return Err(DomainError::Auth(AuthError::Forbidden {
                required: required_role,
            }));
        }
        Ok(subject)
    }

    /// Validate a token against a set of acceptable roles
    ///
    /// Used by operations open to more than one role (e.g. cancellation).
    /// Returns the subject id and the role the token actually carries.
    pub fn authorize_any(&self, token: &str, roles: &[Role]) -> DomainResult<(Uuid, Role)> {
        let (subject, role) = self.parse_subject(token)?;
        if !roles.contains(&role) {
            return Err(DomainError::Auth(AuthError::Forbidden {
                required: roles[0],
            }));
        }
        Ok((subject, role))
    }

    fn parse_subject(&self, token: &str) -> DomainResult<(Uuid, Role)> {
        let claims = self.codec.parse(token).map_err(|reason| {
            // All parse failures collapse into Unauthenticated outward
            warn!(%reason, "token rejected");
            DomainError::Auth(AuthError::Unauthenticated)
        })?;

        let subject = claims.subject().map_err(|_| {
            warn!("token subject is not a valid id");
            DomainError::Auth(AuthError::Unauthenticated)
        })?;

        Ok((subject, claims.role))
    }
}
