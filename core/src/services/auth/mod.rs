//! Authorization service module
//!
//! Gates every privileged operation: issues role-bound tokens at login and
//! validates them against the required role. Credential and token failure
//! reasons are logged here and recovered into uniform outward signals so
//! the boundary never leaks which part of a login was wrong.

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use service::AuthService;
