//! Transport trait.

use async_trait::async_trait;

use crate::Result;

/// Ordered `application/x-www-form-urlencoded` parameters.
pub type FormParams = Vec<(String, String)>;

/// A raw HTTP response as the decoder sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body, decoded as UTF-8 text.
    pub body: String,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests to a FileCloud server.
///
/// One call is one attempt. Implementations own connection, cookie and
/// session-token state; the decoder never sees any of it.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &str) -> Result<HttpResponse>;

    /// Issue a form-encoded POST request.
    async fn post(&self, url: &str, form: &[(String, String)]) -> Result<HttpResponse>;

    /// Drop session state the transport holds itself, such as an
    /// anti-forgery token. Server-side session invalidation is up to the
    /// caller.
    fn clear_session(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
