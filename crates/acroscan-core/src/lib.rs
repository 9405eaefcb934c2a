//! acroscan-core: Backend-independent form field types.
//!
//! This crate provides the data model shared by the parsing backend and the
//! command-line tool: [`FormField`] for a single AcroForm field,
//! [`FormFieldSet`] for the ordered name → value mapping produced by one
//! scan, and [`FormError`] for fatal read failures.

pub mod error;
pub mod field_set;
pub mod form_field;

pub use error::FormError;
pub use field_set::{FieldSetOptions, FormFieldSet};
pub use form_field::{FieldNaming, FieldSelection, FieldType, FormField};
