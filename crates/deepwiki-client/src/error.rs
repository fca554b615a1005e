//! Error types for DeepWiki calls.

use std::time::Duration;

use thiserror::Error;

/// Result type for DeepWiki operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for DeepWiki operations.
///
/// Transport failures (`Http`, `Timeout`, `Connection`), protocol failures
/// and application failures keep distinct messages even though callers
/// usually report them the same way.
#[derive(Debug, Error)]
pub enum Error {
    /// Server answered with a non-2xx status.
    #[error("DeepWiki server returned {status}: {status_text}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status.
        status_text: String,
    },

    /// No response within the deadline.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The request never produced an HTTP response.
    #[error("failed to reach DeepWiki server: {0}")]
    Connection(#[from] reqwest::Error),

    /// Response body could not be decoded into a JSON-RPC envelope.
    #[error("{0}")]
    Protocol(String),

    /// Server or tool reported a failure.
    #[error("{0}")]
    Application(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Endpoint URL parsing failed.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Invalid client configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a protocol error.
    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::Protocol(msg.into())
    }

    /// Create an application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Check if this is a transport-level failure.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http { .. } | Error::Timeout(_) | Error::Connection(_)
        )
    }

    /// Check if the deadline elapsed.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout(_))
    }

    /// Check if the body was undecodable.
    pub fn is_protocol(&self) -> bool {
        matches!(self, Error::Protocol(_))
    }

    /// Check if the server or tool declared a failure.
    pub fn is_application(&self) -> bool {
        matches!(self, Error::Application(_))
    }

    /// HTTP status, when the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_display() {
        let err = Error::Http {
            status: 503,
            status_text: "Service Unavailable".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "DeepWiki server returned 503: Service Unavailable"
        );
        assert!(err.is_transport());
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_timeout_display() {
        let err = Error::Timeout(Duration::from_secs(60));
        assert!(err.to_string().contains("60s"));
        assert!(err.is_timeout());
        assert!(err.is_transport());
    }

    #[test]
    fn test_sub_second_timeout_display() {
        let err = Error::Timeout(Duration::from_millis(100));
        assert_eq!(err.to_string(), "request timed out after 100ms");
    }

    #[test]
    fn test_protocol_and_application_are_verbatim() {
        let err = Error::protocol("No data in SSE response");
        assert_eq!(err.to_string(), "No data in SSE response");
        assert!(err.is_protocol());
        assert!(!err.is_transport());

        let err = Error::application("repo not found");
        assert_eq!(err.to_string(), "repo not found");
        assert!(err.is_application());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_url_error_conversion() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::InvalidUrl(_)));
        assert!(err.to_string().contains("invalid endpoint URL"));
    }
}
