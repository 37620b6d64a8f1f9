//! Configuration for the authorization service

/// Configuration for the authorization service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Maximum accepted identifier length
    pub max_identifier_length: usize,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            max_identifier_length: 254,
        }
    }
}
