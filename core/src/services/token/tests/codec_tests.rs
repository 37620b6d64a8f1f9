//! Unit tests for the token codec

use chrono::{Duration, Utc};
use std::sync::Arc;

use crate::domain::entities::identity::{Identity, Role};
use crate::errors::{DomainError, TokenError};
use crate::services::clock::FixedClock;
use crate::services::token::{TokenCodec, TokenConfig};

fn test_identity(role: Role) -> Identity {
    Identity::new(role, "subject@clinic.example.com".to_string(), "hash".to_string())
}

fn codec_with_clock(clock: Arc<FixedClock>) -> TokenCodec {
    let config = TokenConfig {
        secret: "test-signing-key".to_string(),
        ..Default::default()
    };
    TokenCodec::new(config, clock)
}

#[test]
fn test_issue_parse_round_trip() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock);
    let identity = test_identity(Role::Patient);

    let token = codec.issue(&identity, Duration::minutes(15)).unwrap();
    let claims = codec.parse(&token).unwrap();

    assert_eq!(claims.subject().unwrap(), identity.id);
    assert_eq!(claims.role, Role::Patient);
}

#[test]
fn test_expired_token_rejected() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock.clone());
    let identity = test_identity(Role::Doctor);

    let token = codec.issue(&identity, Duration::minutes(15)).unwrap();

    clock.advance(Duration::minutes(16));
    let err = codec.parse(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::Expired)));
}

#[test]
fn test_token_valid_until_expiry() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock.clone());
    let identity = test_identity(Role::Admin);

    let token = codec.issue(&identity, Duration::minutes(15)).unwrap();

    clock.advance(Duration::minutes(14));
    assert!(codec.parse(&token).is_ok());
}

#[test]
fn test_foreign_signature_rejected() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let issuing = codec_with_clock(clock.clone());
    let verifying = TokenCodec::new(
        TokenConfig {
            secret: "a-different-signing-key".to_string(),
            ..Default::default()
        },
        clock,
    );
    let identity = test_identity(Role::Doctor);

    let token = issuing.issue(&identity, Duration::minutes(15)).unwrap();
    let err = verifying.parse(&token).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::InvalidSignature)
    ));
}

#[test]
fn test_tampered_token_rejected() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock);
    let identity = test_identity(Role::Patient);

    let token = codec.issue(&identity, Duration::minutes(15)).unwrap();

    // Flip a character in the payload segment
    let mut parts: Vec<String> = token.split('.').map(String::from).collect();
    assert_eq!(parts.len(), 3);
    let mut payload: Vec<u8> = parts[1].clone().into_bytes();
    payload[0] = if payload[0] == b'A' { b'B' } else { b'A' };
    parts[1] = String::from_utf8(payload).unwrap();
    let tampered = parts.join(".");

    assert!(codec.parse(&tampered).is_err());
}

#[test]
fn test_garbage_token_is_malformed() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock);

    let err = codec.parse("not-a-token-at-all").unwrap_err();
    assert!(matches!(
        err,
        DomainError::Token(TokenError::MalformedToken)
    ));
}

#[test]
fn test_not_yet_valid_token_rejected() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock.clone());
    let identity = test_identity(Role::Doctor);

    let token = codec.issue(&identity, Duration::minutes(15)).unwrap();

    // Wind the clock backwards past the nbf instant
    clock.advance(Duration::minutes(-5));
    let err = codec.parse(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::NotYetValid)));
}

#[test]
fn test_tokens_are_unique_per_issue() {
    let clock = Arc::new(FixedClock::new(Utc::now()));
    let codec = codec_with_clock(clock);
    let identity = test_identity(Role::Patient);

    let first = codec.issue(&identity, Duration::minutes(15)).unwrap();
    let second = codec.issue(&identity, Duration::minutes(15)).unwrap();

    // jti differs between issues even for the same subject
    assert_ne!(first, second);
}

#[test]
fn test_issue_at_fixed_instant() {
    let now = Utc::now();
    let clock = Arc::new(FixedClock::new(now));
    let codec = codec_with_clock(clock);
    let identity = test_identity(Role::Admin);

    let token = codec.issue(&identity, Duration::minutes(30)).unwrap();
    let claims = codec.parse(&token).unwrap();

    assert_eq!(claims.iat, now.timestamp());
    assert_eq!(claims.exp, (now + Duration::minutes(30)).timestamp());
}
