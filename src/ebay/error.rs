//! Errors returned by the Finding service client.

use crate::ebay::models::ApiError;
use thiserror::Error;

/// Boxed error used for transport-level failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Transport(#[source] BoxError),

    #[error("failed to read response body: {0}")]
    Body(#[source] BoxError),

    #[error("failed to decode response: {0}")]
    Decode(#[from] quick_xml::DeError),

    /// The service answered with an `errorMessage` payload. Displays the
    /// service message verbatim.
    #[error("{}", .0.message)]
    Api(ApiError),
}

impl Error {
    /// Returns the decoded service error, if this is one.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_message_only() {
        let err = Error::Api(ApiError {
            error_id: "18".to_string(),
            domain: "Marketplace".to_string(),
            severity: "Error".to_string(),
            category: "Request".to_string(),
            message: "Invalid value for header \"X-EBAY-SOA-SECURITY-APPNAME\".".to_string(),
            subdomain: "Search".to_string(),
        });

        assert_eq!(err.to_string(), "Invalid value for header \"X-EBAY-SOA-SECURITY-APPNAME\".");
        assert_eq!(err.api_error().map(|e| e.error_id.as_str()), Some("18"));
    }

    #[test]
    fn test_url_error_from() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Url(_)));
        assert!(err.to_string().contains("invalid endpoint URL"));
        assert!(err.api_error().is_none());
    }

    #[test]
    fn test_transport_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        let err = Error::Transport(Box::new(io));
        assert!(err.to_string().contains("connection refused"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
