use std::fmt;
use thiserror::Error;

/// The error type for presign operations
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// The kind of error that occurred
///
/// Every kind is detected synchronously and never retried internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required field is missing or empty, or a value is out of range
    InvalidInput,

    /// No access key id or secret access key available for signing
    MissingCredential,

    /// The canonical resource exceeds its size ceiling
    ResourceTooLong,

    /// The canonical query string exceeds its size ceiling
    QueryTooLong,

    /// The string to sign exceeds its size ceiling
    StringToSignTooLong,

    /// The keyed hash or its encoding could not be produced
    SigningFailure,

    /// The final URL exceeds its size ceiling
    UrlTooLong,

    /// Configuration error (missing fields, invalid values)
    ConfigInvalid,

    /// Unexpected errors (credential providers, formatting, etc.)
    Unexpected,
}

impl Error {
    /// Create a new error with the given kind and message
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the descriptive message without the kind prefix
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this error is caused by missing credentials
    pub fn is_credential_error(&self) -> bool {
        self.kind == ErrorKind::MissingCredential
    }

    /// Check if this error is one of the size ceiling violations
    pub fn is_too_long(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ResourceTooLong
                | ErrorKind::QueryTooLong
                | ErrorKind::StringToSignTooLong
                | ErrorKind::UrlTooLong
        )
    }
}

// Convenience constructors
impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Create a missing credential error
    pub fn missing_credential(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MissingCredential, message)
    }

    /// Create a resource too long error
    pub fn resource_too_long(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ResourceTooLong, message)
    }

    /// Create a query too long error
    pub fn query_too_long(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::QueryTooLong, message)
    }

    /// Create a string to sign too long error
    pub fn string_to_sign_too_long(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::StringToSignTooLong, message)
    }

    /// Create a signing failure error
    pub fn signing_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::SigningFailure, message)
    }

    /// Create a url too long error
    pub fn url_too_long(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::UrlTooLong, message)
    }

    /// Create a config invalid error
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Create an unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidInput => write!(f, "invalid input"),
            ErrorKind::MissingCredential => write!(f, "missing credential"),
            ErrorKind::ResourceTooLong => write!(f, "resource too long"),
            ErrorKind::QueryTooLong => write!(f, "query too long"),
            ErrorKind::StringToSignTooLong => write!(f, "string to sign too long"),
            ErrorKind::SigningFailure => write!(f, "signing failure"),
            ErrorKind::UrlTooLong => write!(f, "uri too long"),
            ErrorKind::ConfigInvalid => write!(f, "invalid configuration"),
            ErrorKind::Unexpected => write!(f, "unexpected error"),
        }
    }
}

/// Convenience type alias for Results
pub type Result<T> = std::result::Result<T, Error>;

// Common From implementations
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

impl From<std::fmt::Error> for Error {
    fn from(err: std::fmt::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

impl From<http::uri::InvalidUri> for Error {
    fn from(err: http::uri::InvalidUri) -> Self {
        Self::invalid_input(err.to_string()).with_source(anyhow::Error::from(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ErrorKind::ResourceTooLong, true; "resource")]
    #[test_case(ErrorKind::QueryTooLong, true; "query")]
    #[test_case(ErrorKind::StringToSignTooLong, true; "string to sign")]
    #[test_case(ErrorKind::UrlTooLong, true; "url")]
    #[test_case(ErrorKind::InvalidInput, false; "invalid input")]
    #[test_case(ErrorKind::SigningFailure, false; "signing failure")]
    fn test_is_too_long(kind: ErrorKind, expected: bool) {
        assert_eq!(Error::new(kind, "x").is_too_long(), expected);
    }

    #[test]
    fn test_display_carries_kind_and_message() {
        let err = Error::missing_credential("secret access key is required");
        assert_eq!(
            err.to_string(),
            "missing credential: secret access key is required"
        );
        assert_eq!(err.message(), "secret access key is required");
        assert!(err.is_credential_error());
    }

    #[test]
    fn test_from_fmt_error() {
        let err: Error = std::fmt::Error.into();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(std::error::Error::source(&err).is_some());
    }
}
