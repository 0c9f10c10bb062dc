//! Error types for the Spore REST client

use thiserror::Error;

/// Error types for REST API operations
#[derive(Error, Debug)]
pub enum Error {
    /// Failure building or driving the underlying HTTP client
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// The request did not complete with a successful response
    #[error("server returned status {} for URL {}", status_label(.status), .url)]
    RequestFailed {
        /// HTTP status observed, if the transport produced one
        status: Option<u16>,
        /// The URL that was attempted
        url: String,
    },

    /// Response body was not well-formed XML
    #[error("XML conversion error: {0}")]
    Xml(#[from] spore_xml::Error),

    /// Asset identifier contains path-breaking or non-printable characters
    #[error("invalid asset id: {id:?}")]
    InvalidAssetId {
        /// The rejected identifier
        id: String,
    },

    /// Username contains path-breaking or non-printable characters
    #[error("invalid username: {username:?}")]
    InvalidUsername {
        /// The rejected username
        username: String,
    },
}

/// Result type for REST API operations
pub type Result<T> = std::result::Result<T, Error>;

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

// Helper methods for common error construction
impl Error {
    /// Create a request failure from an observed status and URL
    pub fn request_failed(status: Option<u16>, url: impl Into<String>) -> Self {
        Self::RequestFailed {
            status,
            url: url.into(),
        }
    }

    /// Create an invalid asset id error
    pub fn invalid_asset_id(id: impl Into<String>) -> Self {
        Self::InvalidAssetId { id: id.into() }
    }

    /// Create an invalid username error
    pub fn invalid_username(username: impl Into<String>) -> Self {
        Self::InvalidUsername {
            username: username.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failed_message_includes_status_and_url() {
        let err = Error::request_failed(Some(404), "http://spore.com/rest/user/nobody");
        let message = err.to_string();
        assert!(message.contains("404"));
        assert!(message.contains("http://spore.com/rest/user/nobody"));
    }

    #[test]
    fn test_request_failed_without_status_reads_unknown() {
        let err = Error::request_failed(None, "http://spore.com/rest/stats");
        assert!(err.to_string().contains("unknown"));
    }
}
