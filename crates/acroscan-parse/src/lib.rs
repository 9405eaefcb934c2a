//! acroscan-parse: PDF parsing backend for AcroForm field extraction.
//!
//! Opens PDF documents through a pluggable [`FormBackend`] (lopdf by
//! default) and walks the `/AcroForm` field tree into
//! [`acroscan_core::FormField`] values. [`read_form_field_set`] is the
//! file-level entry point used by the command-line tool.

pub mod backend;
pub mod error;
pub mod lopdf_backend;
pub mod reader;

pub use acroscan_core;
pub use backend::FormBackend;
pub use error::BackendError;
pub use lopdf_backend::{LopdfBackend, LopdfDocument};
pub use reader::{ReadOptions, read_form_field_set, read_form_field_set_with};
