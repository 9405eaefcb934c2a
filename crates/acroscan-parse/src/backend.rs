//! PDF parsing backend trait.
//!
//! Defines the [`FormBackend`] trait that abstracts the two operations a form
//! scan needs from a PDF library: opening a document and listing its
//! AcroForm fields.

use acroscan_core::{FormError, FormField};

/// Trait abstracting PDF form reading.
///
/// ```ignore
/// let doc = MyBackend::open(pdf_bytes)?;
/// let fields = MyBackend::form_fields(&doc)?;
/// ```
pub trait FormBackend {
    /// The parsed PDF document type.
    type Document;

    /// Backend-specific error type, convertible to [`FormError`].
    type Error: std::error::Error + Into<FormError>;

    /// Parse PDF bytes into a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF, or if the PDF is
    /// encrypted.
    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error>;

    /// Parse PDF bytes, decrypting with `password` if the PDF is encrypted.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid PDF or the password is
    /// wrong.
    fn open_with_password(bytes: &[u8], password: &[u8]) -> Result<Self::Document, Self::Error>;

    /// List the terminal form fields of the document in AcroForm order.
    ///
    /// A document without an `/AcroForm` yields an empty list.
    fn form_fields(doc: &Self::Document) -> Result<Vec<FormField>, Self::Error>;
}
