//! Error types for compact XML conversion

use thiserror::Error;

/// Error types for XML-to-object conversion
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying XML syntax error
    #[error("XML syntax error: {0}")]
    Syntax(#[from] quick_xml::Error),

    /// Content that could not be decoded or unescaped
    #[error("invalid XML content: {reason}")]
    InvalidContent {
        /// Why the content was rejected
        reason: String,
    },

    /// End tag with no matching start tag
    #[error("unexpected end tag </{tag}>")]
    UnexpectedEndTag {
        /// Name of the offending end tag
        tag: String,
    },

    /// Start tags left open at end of input
    #[error("unclosed element <{tag}>")]
    UnclosedElement {
        /// Name of the element still open at EOF
        tag: String,
    },
}

/// Result type for XML conversion
pub type Result<T> = std::result::Result<T, Error>;

// Helper methods for common error construction
impl Error {
    /// Create an invalid content error
    pub fn invalid_content(reason: impl Into<String>) -> Self {
        Self::InvalidContent {
            reason: reason.into(),
        }
    }

    /// Create an unexpected end tag error
    pub fn unexpected_end_tag(tag: impl Into<String>) -> Self {
        Self::UnexpectedEndTag { tag: tag.into() }
    }

    /// Create an unclosed element error
    pub fn unclosed_element(tag: impl Into<String>) -> Self {
        Self::UnclosedElement { tag: tag.into() }
    }
}
