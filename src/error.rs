/// Custom error type for the bookstash library
///
/// Using `thiserror` crate for automatic `Error` trait implementation and `From` conversions.
///
/// The two bookmark-file failure tiers are deliberately separate variants:
/// `InvalidFormat` fires before any markup parsing (the content does not
/// look like a bookmark export at all), `NoBookmarkStructure` fires during
/// parsing (the marker was present but no root container could be located).
/// Malformed individual entries never surface through either variant; they
/// are skipped inside the parser.
#[derive(Debug, thiserror::Error)]
pub enum BookstashError {
    /// Content lacks the Netscape bookmark export marker
    #[error("Invalid bookmark file format: {0}")]
    InvalidFormat(String),

    /// Content has the marker but no root bookmark container
    #[error("Bookmark structure error: {0}")]
    NoBookmarkStructure(String),

    /// Invalid input or arguments (bad extension, oversized upload)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Stored file not found
    #[error("File with ID {0} not found")]
    FileNotFound(String),

    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing/serialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// JSON errors
    #[error("JSON error: {0}")]
    Json(String),
}

/// Result type alias using BookstashError
pub type Result<T> = std::result::Result<T, BookstashError>;

impl From<serde_yaml::Error> for BookstashError {
    fn from(err: serde_yaml::Error) -> Self {
        BookstashError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for BookstashError {
    fn from(err: serde_json::Error) -> Self {
        BookstashError::Json(err.to_string())
    }
}
