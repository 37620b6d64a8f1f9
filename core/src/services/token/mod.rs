//! Token codec module for JWT management
//!
//! This module handles all token-related operations:
//! - Signed access token issuance
//! - Token parsing with signature, expiry, and validity-window checks
//!
//! Tokens are stateless and self-contained; nothing is stored server-side,
//! so validation needs no session store and scales horizontally.

mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenConfig;
