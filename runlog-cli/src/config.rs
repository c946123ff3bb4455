//! Configuration module
//!
//! Handles CLI configuration including router URL and credentials.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the router serving the log endpoints
    pub router_url: String,
    /// Optional access token for authenticated deployments
    pub auth_token: Option<String>,
}
