//! Error types for the Sporepedia client

use thiserror::Error;

/// Error types for Sporepedia operations
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

    /// Unknown API namespace tag
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    /// Unknown static data kind
    #[error("invalid data type: {0}")]
    InvalidDataType(String),

    /// Unknown browse view tag
    #[error("invalid view type: {0}")]
    InvalidViewType(String),

    /// Asset identifier too short to map onto the static storage tree
    #[error("asset id {id:?} is too short for a static lookup (need at least 9 characters)")]
    AssetIdTooShort {
        /// The rejected identifier
        id: String,
    },
}

/// Result type for Sporepedia operations
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

    /// Create an asset id too short error
    pub fn asset_id_too_short(id: impl Into<String>) -> Self {
        Self::AssetIdTooShort { id: id.into() }
    }
}
