//! Configuration module
//!
//! Handles CLI configuration including the API base URL and token.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote image-generation API
    pub api_base: String,
    /// Bearer token for the remote API
    pub token: String,
}
