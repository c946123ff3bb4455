//! Runlog HTTP Client
//!
//! A type-safe HTTP client for retrieving program execution logs from the
//! application-fabric router.
//!
//! Every operation is a stateless GET against a parametrized run path; the
//! client holds no cursor state, so callers carry offsets between pagination
//! calls themselves.
//!
//! # Example
//!
//! ```no_run
//! use runlog_client::LogsClient;
//! use runlog_core::domain::program::{ProgramRunRef, ProgramType};
//! use runlog_core::dto::log::LogWindow;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = LogsClient::new("http://localhost:11015");
//!
//!     let run = ProgramRunRef::new(
//!         "default",
//!         "Purchase",
//!         ProgramType::Flows,
//!         "PurchaseFlow",
//!         Uuid::new_v4(),
//!     );
//!
//!     for entry in client.get_logs_json(&run, &LogWindow::all()).await? {
//!         println!("{}", entry.message);
//!     }
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
mod logs;

// Re-export commonly used types
pub use auth::AccessToken;
pub use error::{ClientError, Result};
pub use runlog_core::domain::log::LogEntry;
pub use runlog_core::domain::run::RunRecord;

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the program-log endpoints
///
/// Operations come in three shapes:
/// - full-range fetches (`get_logs`, `get_logs_json`, `get_logs_start`)
/// - page fetches (`next_logs*`, `prev_logs*`)
/// - run metadata (`get_logs_metadata`)
#[derive(Debug, Clone)]
pub struct LogsClient {
    /// Base URL of the router (e.g., "http://localhost:11015")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Optional credential attached to every request
    token: Option<AccessToken>,
}

impl LogsClient {
    /// Create a new logs client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the router (e.g., "http://localhost:11015")
    ///
    /// # Example
    /// ```
    /// use runlog_client::LogsClient;
    ///
    /// let client = LogsClient::new("http://localhost:11015");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            token: None,
        }
    }

    /// Create a new logs client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use runlog_client::LogsClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = LogsClient::with_client("http://localhost:11015", http_client);
    /// ```
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            token: None,
        }
    }

    /// Attach an access token, sent as a Bearer `Authorization` header
    pub fn with_auth_token(mut self, token: impl Into<AccessToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the base URL of the router
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Request Plumbing
    // =============================================================================

    /// Absolute URL for a router path
    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a GET for `path` with the given query pairs
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response> {
        let url = self.url_for(path);
        tracing::debug!("GET {} query={:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token.header_value());
        }

        Ok(request.send().await?)
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is raw log text
    async fn handle_text_response(&self, response: reqwest::Response) -> Result<String> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = LogsClient::new("http://localhost:11015");
        assert_eq!(client.base_url(), "http://localhost:11015");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = LogsClient::new("http://localhost:11015/");
        assert_eq!(client.base_url(), "http://localhost:11015");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = LogsClient::with_client("http://localhost:11015", http_client);
        assert_eq!(client.base_url(), "http://localhost:11015");
    }

    #[test]
    fn test_url_for_joins_base_and_path() {
        let client = LogsClient::new("http://localhost:11015/");
        assert_eq!(
            client.url_for("/v3/namespaces/default"),
            "http://localhost:11015/v3/namespaces/default"
        );
    }

    #[test]
    fn test_with_auth_token_stores_credential() {
        let client = LogsClient::new("http://localhost:11015").with_auth_token("abc123");
        assert_eq!(
            client.token.as_ref().map(|t| t.header_value()),
            Some("Bearer abc123".to_string())
        );
    }
}
