//! Error types for the parsing layer.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides [`BackendError`]
//! that wraps backend-specific errors and converts them to [`FormError`].

use acroscan_core::FormError;
use thiserror::Error;

/// Error type for PDF parsing backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Error from PDF parsing (structure, syntax, object resolution).
    #[error("PDF parse error: {0}")]
    Parse(String),

    /// Error reading PDF data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A core library error.
    #[error(transparent)]
    Core(#[from] FormError),
}

impl From<BackendError> for FormError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Parse(msg) => FormError::ParseError(msg),
            BackendError::Io(e) => FormError::IoError(e.to_string()),
            BackendError::Core(e) => e,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_error_parse() {
        let err = BackendError::Parse("invalid xref table".to_string());
        assert_eq!(err.to_string(), "PDF parse error: invalid xref table");
    }

    #[test]
    fn backend_error_io_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BackendError = io_err.into();
        assert!(matches!(err, BackendError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn backend_error_core_is_transparent() {
        let err = BackendError::Core(FormError::PasswordRequired);
        assert_eq!(err.to_string(), "PDF is encrypted and requires a password");
    }

    #[test]
    fn to_form_error_parse() {
        let backend = BackendError::Parse("bad syntax".to_string());
        let err: FormError = backend.into();
        assert_eq!(err, FormError::ParseError("bad syntax".to_string()));
    }

    #[test]
    fn to_form_error_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FormError = BackendError::Io(io_err).into();
        assert!(matches!(err, FormError::IoError(_)));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn to_form_error_core_passthrough() {
        let err: FormError = BackendError::Core(FormError::InvalidPassword).into();
        assert_eq!(err, FormError::InvalidPassword);
    }
}
