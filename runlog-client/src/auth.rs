//! Request credential helper
//!
//! The client does not obtain or refresh credentials; it only attaches an
//! already-issued access token to outgoing requests.

/// Bearer access token for the log service router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Value for the `Authorization` header
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_uses_bearer_scheme() {
        let token = AccessToken::new("abc123");
        assert_eq!(token.header_value(), "Bearer abc123");
    }
}
