//! Error types for acroscan.
//!
//! Provides [`FormError`], the fatal error returned when a PDF cannot be
//! opened or its form structure cannot be read.

use std::fmt;

/// Fatal error types for form extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum FormError {
    /// Error parsing PDF structure or syntax.
    ParseError(String),
    /// I/O error reading PDF data.
    IoError(String),
    /// The PDF is encrypted and requires a password to open.
    PasswordRequired,
    /// The supplied password is incorrect for this encrypted PDF.
    InvalidPassword,
    /// Any other error not covered by specific variants.
    Other(String),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::ParseError(msg) => write!(f, "parse error: {msg}"),
            FormError::IoError(msg) => write!(f, "I/O error: {msg}"),
            FormError::PasswordRequired => write!(f, "PDF is encrypted and requires a password"),
            FormError::InvalidPassword => write!(f, "the supplied password is incorrect"),
            FormError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<std::io::Error> for FormError {
    fn from(err: std::io::Error) -> Self {
        FormError::IoError(err.to_string())
    }
}
