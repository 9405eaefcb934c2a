//! File-level entry point: read a PDF from disk into a [`FormFieldSet`].

use std::path::Path;

use acroscan_core::{FieldSetOptions, FormError, FormFieldSet};

use crate::backend::FormBackend;
use crate::lopdf_backend::LopdfBackend;

/// Options for [`read_form_field_set`].
#[derive(Debug, Clone, Default)]
pub struct ReadOptions {
    /// Naming and type filter for the resulting set.
    pub field_set: FieldSetOptions,
    /// Password for encrypted PDFs.
    pub password: Option<String>,
}

/// Read `path` and extract its form fields with the default lopdf backend.
///
/// # Errors
///
/// Returns [`FormError`] if the file cannot be read or is not a PDF the
/// backend can open. A valid PDF without a form is not an error; it yields
/// an empty set.
pub fn read_form_field_set(path: &Path, options: &ReadOptions) -> Result<FormFieldSet, FormError> {
    read_form_field_set_with::<LopdfBackend>(path, options)
}

/// Like [`read_form_field_set`], with an explicit backend.
pub fn read_form_field_set_with<B: FormBackend>(
    path: &Path,
    options: &ReadOptions,
) -> Result<FormFieldSet, FormError> {
    let bytes = std::fs::read(path)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "read PDF");

    let doc = match &options.password {
        Some(pw) => B::open_with_password(&bytes, pw.as_bytes()),
        None => B::open(&bytes),
    }
    .map_err(Into::<FormError>::into)?;

    let fields = B::form_fields(&doc).map_err(Into::<FormError>::into)?;
    let set = FormFieldSet::from_fields(&fields, &options.field_set);

    #[cfg(feature = "tracing")]
    tracing::info!(
        terminal_fields = fields.len(),
        selected = set.len(),
        "extracted form fields"
    );

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use acroscan_core::{FieldType, FormField};
    use std::io::Write;

    /// Serves two fixed text fields for anything starting with `%PDF`.
    struct FixedBackend;

    #[derive(Debug)]
    struct FixedError;

    impl std::fmt::Display for FixedError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "fixed failure")
        }
    }

    impl std::error::Error for FixedError {}

    impl From<FixedError> for FormError {
        fn from(_: FixedError) -> Self {
            FormError::Other("fixed failure".to_string())
        }
    }

    impl FormBackend for FixedBackend {
        type Document = Vec<FormField>;
        type Error = FixedError;

        fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
            if bytes.starts_with(b"%PDF") {
                Ok(vec![
                    FormField {
                        name: "Name".to_string(),
                        partial_name: "Name".to_string(),
                        field_type: FieldType::Text,
                        value: None,
                        default_value: None,
                        flags: 0,
                        page_index: None,
                    },
                    FormField {
                        name: "Date".to_string(),
                        partial_name: "Date".to_string(),
                        field_type: FieldType::Text,
                        value: Some("2024-01-01".to_string()),
                        default_value: None,
                        flags: 0,
                        page_index: None,
                    },
                ])
            } else {
                Err(FixedError)
            }
        }

        fn open_with_password(bytes: &[u8], _password: &[u8]) -> Result<Self::Document, Self::Error> {
            Self::open(bytes)
        }

        fn form_fields(doc: &Self::Document) -> Result<Vec<FormField>, Self::Error> {
            Ok(doc.clone())
        }
    }

    fn temp_file(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        f.write_all(bytes).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn reads_through_backend() {
        let file = temp_file(b"%PDF-1.7 stub");
        let set = read_form_field_set_with::<FixedBackend>(file.path(), &ReadOptions::default())
            .unwrap();
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("Name", None), ("Date", Some("2024-01-01"))]);
    }

    #[test]
    fn backend_error_becomes_form_error() {
        let file = temp_file(b"garbage");
        let err = read_form_field_set_with::<FixedBackend>(file.path(), &ReadOptions::default())
            .unwrap_err();
        assert_eq!(err, FormError::Other("fixed failure".to_string()));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_form_field_set(Path::new("/nonexistent/form.pdf"), &ReadOptions::default())
            .unwrap_err();
        assert!(matches!(err, FormError::IoError(_)));
    }

    #[test]
    fn directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_form_field_set(dir.path(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, FormError::IoError(_)));
    }

    #[test]
    fn non_pdf_bytes_are_parse_error() {
        let file = temp_file(b"hello, not a pdf");
        let err = read_form_field_set(file.path(), &ReadOptions::default()).unwrap_err();
        assert!(matches!(err, FormError::ParseError(_)));
        assert!(err.to_string().contains("failed to parse PDF"));
    }
}
