//! Error types for the core library.

use thiserror::Error;

/// Errors that can occur in core operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: connection, TLS, timeout or reading the body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Service returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body as text (may be empty).
        body: String,
    },

    /// The configured API base URL could not be parsed.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// The response body was not the expected JSON.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    /// Whether the request failed before a usable response arrived.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Status code of a non-success response, if that is what failed.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_accessors() {
        let err = Error::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "Service returned status 404: not found");
    }

    #[test]
    fn test_invalid_url_has_no_status() {
        let err = Error::InvalidUrl("nope".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_transport());
    }

    #[test]
    fn test_decode_error_is_not_transport() {
        let err: Error = serde_json::from_str::<u8>("\"x\"").unwrap_err().into();
        assert!(matches!(err, Error::Serde(_)));
        assert!(!err.is_transport());
        assert_eq!(err.status(), None);
    }
}
