//! Token codec implementation

use chrono::Duration;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use std::sync::Arc;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{Claims, JWT_AUDIENCE, JWT_ISSUER};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::Clock;

use super::config::TokenConfig;

/// Codec for signed, time-bounded access tokens
///
/// Issuing and parsing are pure computations over the signing key and the
/// injected clock; the codec holds no mutable state. The signing key is
/// explicit configuration, not ambient global state.
pub struct TokenCodec {
    config: TokenConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    clock: Arc<dyn Clock>,
}

impl TokenCodec {
    /// Creates a new token codec
    pub fn new(config: TokenConfig, clock: Arc<dyn Clock>) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        // exp and nbf are checked against the injected clock below, so the
        // expiry boundary is deterministic under test (the library would
        // check against the ambient system clock with 60s leeway).
        validation.validate_exp = false;
        validation.validate_nbf = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            clock,
        }
    }

    /// Configured token lifetime
    pub fn token_ttl(&self) -> Duration {
        self.config.token_ttl()
    }

    /// Issues a signed token for an identity
    ///
    /// The token carries the subject id, role, and expiry, and is opaque
    /// to callers. Pure computation; nothing is stored.
    pub fn issue(&self, identity: &Identity, ttl: Duration) -> Result<String, DomainError> {
        let claims = Claims::new(identity.id, identity.role, self.clock.now(), ttl);
        self.encode(&claims)
    }

    /// Encodes claims into a signed token string
    pub(crate) fn encode(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::GenerationFailed))
    }

    /// Parses a token string back into its claims
    ///
    /// # Errors
    ///
    /// * `MalformedToken` - wrong structure or unexpected claims
    /// * `InvalidSignature` - signature does not verify (tamper/forgery)
    /// * `Expired` - past the expiry at the codec's clock
    /// * `NotYetValid` - before the nbf instant
    pub fn parse(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    DomainError::Token(TokenError::InvalidSignature)
                }
                _ => DomainError::Token(TokenError::MalformedToken),
            })?;

        let claims = token_data.claims;
        let now = self.clock.now();
        if claims.is_expired_at(now) {
            return Err(DomainError::Token(TokenError::Expired));
        }
        if now.timestamp() < claims.nbf {
            return Err(DomainError::Token(TokenError::NotYetValid));
        }

        Ok(claims)
    }
}
