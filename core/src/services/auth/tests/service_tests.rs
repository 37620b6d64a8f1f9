//! Unit tests for the authorization service

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::identity::Role;
use crate::errors::{AuthError, DomainError};
use crate::repositories::InMemoryCredentialStore;
use crate::services::auth::{AuthService, AuthServiceConfig};
use crate::services::clock::FixedClock;
use crate::services::token::{TokenCodec, TokenConfig};

struct Harness {
    store: Arc<InMemoryCredentialStore>,
    clock: Arc<FixedClock>,
    auth: AuthService<InMemoryCredentialStore>,
}

fn harness() -> Harness {
    let store = Arc::new(InMemoryCredentialStore::new());
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = Arc::new(TokenCodec::new(
        TokenConfig {
            secret: "test-signing-key".to_string(),
            ..Default::default()
        },
        clock.clone(),
    ));
    let auth = AuthService::new(store.clone(), codec, AuthServiceConfig::default());
    Harness { store, clock, auth }
}

fn assert_invalid_credentials(err: DomainError) {
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::InvalidCredentials)
    ));
}

#[tokio::test]
async fn test_login_then_authorize_returns_subject() {
    let h = harness();
    let identity = h
        .store
        .register(Role::Patient, "pat@clinic.example.com", "s3cret")
        .await
        .unwrap();

    let response = h
        .auth
        .login("pat@clinic.example.com", "s3cret", Role::Patient)
        .await
        .unwrap();
    assert_eq!(response.role, Role::Patient);
    assert_eq!(response.expires_in, 900);

    let subject = h.auth.authorize(&response.token, Role::Patient).unwrap();
    assert_eq!(subject, identity.id);
}

#[tokio::test]
async fn test_login_failure_reason_is_uniform() {
    let h = harness();
    h.store
        .register(Role::Doctor, "doc@clinic.example.com", "s3cret")
        .await
        .unwrap();

    // Unknown identifier
    let unknown = h
        .auth
        .login("ghost@clinic.example.com", "s3cret", Role::Doctor)
        .await
        .unwrap_err();
    // Wrong secret
    let bad_secret = h
        .auth
        .login("doc@clinic.example.com", "wrong", Role::Doctor)
        .await
        .unwrap_err();
    // Right identity, wrong role claim
    let wrong_role = h
        .auth
        .login("doc@clinic.example.com", "s3cret", Role::Admin)
        .await
        .unwrap_err();

    assert_invalid_credentials(unknown);
    assert_invalid_credentials(bad_secret);
    assert_invalid_credentials(wrong_role);
}

#[tokio::test]
async fn test_empty_identifier_is_uniform_failure() {
    let h = harness();
    let err = h.auth.login("  ", "s3cret", Role::Admin).await.unwrap_err();
    assert_invalid_credentials(err);
}

#[tokio::test]
async fn test_authorize_rejects_role_mismatch() {
    let h = harness();
    h.store
        .register(Role::Admin, "frontdesk", "s3cret")
        .await
        .unwrap();

    let response = h
        .auth
        .login("frontdesk", "s3cret", Role::Admin)
        .await
        .unwrap();

    // Admin does not implicitly satisfy a Doctor-only check
    let err = h.auth.authorize(&response.token, Role::Doctor).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::Forbidden {
            required: Role::Doctor
        })
    ));
}

#[tokio::test]
async fn test_authorize_rejects_expired_token() {
    let h = harness();
    h.store
        .register(Role::Patient, "pat@clinic.example.com", "s3cret")
        .await
        .unwrap();

    let response = h
        .auth
        .login("pat@clinic.example.com", "s3cret", Role::Patient)
        .await
        .unwrap();

    h.clock.advance(Duration::minutes(16));
    let err = h.auth.authorize(&response.token, Role::Patient).unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthenticated)));
}

#[tokio::test]
async fn test_authorize_rejects_garbage_token() {
    let h = harness();
    let err = h.auth.authorize("garbage", Role::Patient).unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Unauthenticated)));
}

#[tokio::test]
async fn test_authorize_any_accepts_listed_roles() {
    let h = harness();
    let identity = h
        .store
        .register(Role::Doctor, "doc@clinic.example.com", "s3cret")
        .await
        .unwrap();

    let response = h
        .auth
        .login("doc@clinic.example.com", "s3cret", Role::Doctor)
        .await
        .unwrap();

    let (subject, role) = h
        .auth
        .authorize_any(&response.token, &[Role::Admin, Role::Doctor])
        .unwrap();
    assert_eq!(subject, identity.id);
    assert_eq!(role, Role::Doctor);

    let err = h
        .auth
        .authorize_any(&response.token, &[Role::Patient])
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::Forbidden { .. })));
}
