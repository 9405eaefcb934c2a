//! lopdf-based PDF parsing backend.
//!
//! Implements [`FormBackend`] using the [lopdf](https://crates.io/crates/lopdf)
//! crate for PDF document parsing.

use std::collections::{BTreeMap, HashSet};

use acroscan_core::{FieldType, FormError, FormField};

use crate::backend::FormBackend;
use crate::error::BackendError;

/// Field trees deeper than this are cut off.
const MAX_FIELD_DEPTH: usize = 64;

/// A parsed PDF document backed by lopdf.
pub struct LopdfDocument {
    inner: lopdf::Document,
}

impl std::fmt::Debug for LopdfDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LopdfDocument")
            .field("version", &self.inner.version)
            .field("objects", &self.inner.objects.len())
            .finish_non_exhaustive()
    }
}

/// The lopdf-based PDF backend.
///
/// # Example
///
/// ```ignore
/// use acroscan_parse::{FormBackend, LopdfBackend};
///
/// let doc = LopdfBackend::open(pdf_bytes)?;
/// let fields = LopdfBackend::form_fields(&doc)?;
/// ```
pub struct LopdfBackend;

fn load(bytes: &[u8]) -> Result<lopdf::Document, BackendError> {
    lopdf::Document::load_mem(bytes)
        .map_err(|e| BackendError::Parse(format!("failed to parse PDF: {e}")))
}

impl FormBackend for LopdfBackend {
    type Document = LopdfDocument;
    type Error = BackendError;

    fn open(bytes: &[u8]) -> Result<Self::Document, Self::Error> {
        // lopdf tries the empty user password while loading; a document that
        // is still encrypted afterwards needs a real one.
        let inner = load(bytes)?;

        if inner.is_encrypted() {
            return Err(BackendError::Core(FormError::PasswordRequired));
        }

        Ok(LopdfDocument { inner })
    }

    fn open_with_password(bytes: &[u8], password: &[u8]) -> Result<Self::Document, Self::Error> {
        let inner = load(bytes)?;

        // A password on an unencrypted file is ignored.
        if !inner.is_encrypted() {
            return Ok(LopdfDocument { inner });
        }

        // The bytes already parsed once, so any failure from here on is the
        // password's.
        let password = std::str::from_utf8(password)
            .map_err(|_| BackendError::Core(FormError::InvalidPassword))?;
        let inner = lopdf::Document::load_mem_with_password(bytes, password).map_err(|_e| {
            #[cfg(feature = "tracing")]
            tracing::debug!(error = %_e, "decryption with supplied password failed");
            BackendError::Core(FormError::InvalidPassword)
        })?;

        if inner.is_encrypted() {
            return Err(BackendError::Core(FormError::InvalidPassword));
        }

        Ok(LopdfDocument { inner })
    }

    fn form_fields(doc: &Self::Document) -> Result<Vec<FormField>, Self::Error> {
        Ok(extract_document_form_fields(&doc.inner))
    }
}

/// Follow an indirect reference, returning direct objects unchanged.
fn resolve<'a>(doc: &'a lopdf::Document, obj: &'a lopdf::Object) -> Option<&'a lopdf::Object> {
    match obj {
        lopdf::Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    }
}

fn resolve_dict<'a>(
    doc: &'a lopdf::Document,
    obj: &'a lopdf::Object,
) -> Option<&'a lopdf::Dictionary> {
    resolve(doc, obj)?.as_dict().ok()
}

/// Locate the `/AcroForm /Fields` array through the trailer's `/Root`.
///
/// Any missing or malformed link means the document has no form.
fn acroform_fields(doc: &lopdf::Document) -> Option<&Vec<lopdf::Object>> {
    let catalog = resolve_dict(doc, doc.trailer.get(b"Root").ok()?)?;
    let acroform = resolve_dict(doc, catalog.get(b"AcroForm").ok()?)?;
    resolve(doc, acroform.get(b"Fields").ok()?)?.as_array().ok()
}

/// Extract form fields from the document catalog's /AcroForm dictionary.
///
/// Walks the `/Fields` array depth-first (following `/Kids` for hierarchical
/// fields) and returns each terminal field in the order it is reached. Each
/// indirect field object is walked at most once.
fn extract_document_form_fields(doc: &lopdf::Document) -> Vec<FormField> {
    let Some(fields_array) = acroform_fields(doc) else {
        #[cfg(feature = "tracing")]
        tracing::debug!("document has no /AcroForm /Fields array");
        return Vec::new();
    };

    let pages_map = doc.get_pages();
    let mut walker = FieldWalker {
        doc,
        pages_map: &pages_map,
        visited: HashSet::new(),
        fields: Vec::new(),
    };

    for entry in fields_array {
        walker.walk(entry, &Inherited::default(), 0);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = walker.fields.len(), "extracted terminal form fields");

    walker.fields
}

/// Entries a field node passes down to its children.
#[derive(Default)]
struct Inherited<'a> {
    full_name: Option<&'a str>,
    partial_name: Option<&'a str>,
    field_type: Option<FieldType>,
    value: Option<&'a str>,
}

struct FieldWalker<'a> {
    doc: &'a lopdf::Document,
    pages_map: &'a BTreeMap<u32, lopdf::ObjectId>,
    /// Indirect field objects already entered. A field has one parent, so a
    /// second visit means a cycle or a shared kid.
    visited: HashSet<lopdf::ObjectId>,
    fields: Vec<FormField>,
}

impl<'a> FieldWalker<'a> {
    fn walk(&mut self, node: &'a lopdf::Object, inherited: &Inherited<'_>, depth: usize) {
        if depth >= MAX_FIELD_DEPTH {
            #[cfg(feature = "tracing")]
            tracing::warn!(depth, "form field tree too deep, skipping subtree");
            return;
        }

        if let lopdf::Object::Reference(id) = node {
            if !self.visited.insert(*id) {
                #[cfg(feature = "tracing")]
                tracing::warn!(object = ?id, "form field object reached twice, skipping");
                return;
            }
        }

        let Some(dict) = resolve_dict(self.doc, node) else {
            return;
        };

        let own_name = extract_text(self.doc, dict, b"T");
        let full_name = match (inherited.full_name, own_name.as_deref()) {
            (Some(parent), Some(name)) => format!("{parent}.{name}"),
            (Some(parent), None) => parent.to_string(),
            (None, Some(name)) => name.to_string(),
            (None, None) => String::new(),
        };
        let partial_name = own_name
            .as_deref()
            .or(inherited.partial_name)
            .unwrap_or_default()
            .to_string();

        let field_type = match dict.get(b"FT") {
            Ok(lopdf::Object::Name(name)) => {
                FieldType::from_pdf_name(&String::from_utf8_lossy(name))
            }
            _ => inherited.field_type,
        };
        let value = extract_field_value(self.doc, dict, b"V");
        let value = value.as_deref().or(inherited.value);

        if let Some(kids) = self.child_fields(dict) {
            let next = Inherited {
                full_name: Some(&full_name),
                partial_name: Some(&partial_name),
                field_type,
                value,
            };
            for kid in kids {
                self.walk(kid, &next, depth + 1);
            }
            return;
        }

        let Some(field_type) = field_type else {
            #[cfg(feature = "tracing")]
            tracing::debug!(name = %full_name, "skipping field without /FT");
            return;
        };

        let flags = match dict.get(b"Ff") {
            Ok(lopdf::Object::Integer(n)) => *n as u32,
            _ => 0,
        };

        #[cfg(feature = "tracing")]
        tracing::trace!(name = %full_name, field_type = %field_type, "terminal field");

        self.fields.push(FormField {
            name: full_name,
            partial_name,
            field_type,
            value: value.map(str::to_string),
            default_value: extract_field_value(self.doc, dict, b"DV"),
            flags,
            page_index: self.resolve_field_page(dict),
        });
    }

    /// Return `/Kids` if it holds child fields rather than only widgets.
    ///
    /// A kid carrying `/T` is a child field; kids without it are widget
    /// annotations of this (terminal) field.
    fn child_fields(&self, dict: &'a lopdf::Dictionary) -> Option<&'a Vec<lopdf::Object>> {
        let doc = self.doc;
        let kids = resolve(doc, dict.get(b"Kids").ok()?)?.as_array().ok()?;
        let has_child_fields = kids
            .iter()
            .any(|kid| resolve_dict(doc, kid).is_some_and(|d| d.get(b"T").is_ok()));
        has_child_fields.then_some(kids)
    }

    /// Resolve a field's 0-based page index from its /P reference.
    fn resolve_field_page(&self, dict: &lopdf::Dictionary) -> Option<usize> {
        let page_ref = match dict.get(b"P") {
            Ok(lopdf::Object::Reference(id)) => *id,
            _ => return None,
        };

        self.pages_map
            .iter()
            .find_map(|(&page_num, &page_id)| (page_id == page_ref).then(|| (page_num - 1) as usize))
    }
}

/// Extract a string or name entry from a dictionary.
fn extract_text(doc: &lopdf::Document, dict: &lopdf::Dictionary, key: &[u8]) -> Option<String> {
    match resolve(doc, dict.get(key).ok()?)? {
        lopdf::Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        _ => None,
    }
}

/// Extract a field value from a /V or /DV entry.
///
/// Handles strings, names, and arrays of strings (multi-select choices are
/// joined with `", "`).
fn extract_field_value(
    doc: &lopdf::Document,
    dict: &lopdf::Dictionary,
    key: &[u8],
) -> Option<String> {
    match resolve(doc, dict.get(key).ok()?)? {
        lopdf::Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
        lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
        lopdf::Object::Array(arr) => {
            let vals: Vec<String> = arr
                .iter()
                .filter_map(|item| match item {
                    lopdf::Object::String(bytes, _) => Some(decode_pdf_string(bytes)),
                    lopdf::Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
                    _ => None,
                })
                .collect();
            if vals.is_empty() {
                None
            } else {
                Some(vals.join(", "))
            }
        }
        _ => None,
    }
}

/// Decode a PDF text string.
///
/// A `FE FF` prefix marks UTF-16BE and `EF BB BF` marks UTF-8; anything
/// else is PDFDocEncoding.
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(rest) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = rest
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        String::from_utf16_lossy(&units)
    } else if let Some(rest) = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]) {
        String::from_utf8_lossy(rest).into_owned()
    } else {
        bytes.iter().map(|&b| pdf_doc_char(b)).collect()
    }
}

/// Map one PDFDocEncoding byte to its character (ISO 32000-1, Annex D.2).
///
/// The encoding matches Latin-1 apart from `0x18..=0x1F` and `0x7F..=0xA0`.
/// Undefined codes become U+FFFD.
fn pdf_doc_char(code: u8) -> char {
    match code {
        0x18 => '\u{02D8}', // breve
        0x19 => '\u{02C7}', // caron
        0x1A => '\u{02C6}', // circumflex
        0x1B => '\u{02D9}', // dotaccent
        0x1C => '\u{02DD}', // hungarumlaut
        0x1D => '\u{02DB}', // ogonek
        0x1E => '\u{02DA}', // ring
        0x1F => '\u{02DC}', // tilde
        0x80 => '\u{2022}', // bullet
        0x81 => '\u{2020}', // dagger
        0x82 => '\u{2021}', // daggerdbl
        0x83 => '\u{2026}', // ellipsis
        0x84 => '\u{2014}', // emdash
        0x85 => '\u{2013}', // endash
        0x86 => '\u{0192}', // florin
        0x87 => '\u{2044}', // fraction
        0x88 => '\u{2039}', // guilsinglleft
        0x89 => '\u{203A}', // guilsinglright
        0x8A => '\u{2212}', // minus
        0x8B => '\u{2030}', // perthousand
        0x8C => '\u{201E}', // quotedblbase
        0x8D => '\u{201C}', // quotedblleft
        0x8E => '\u{201D}', // quotedblright
        0x8F => '\u{2018}', // quoteleft
        0x90 => '\u{2019}', // quoteright
        0x91 => '\u{201A}', // quotesinglbase
        0x92 => '\u{2122}', // trademark
        0x93 => '\u{FB01}', // fi
        0x94 => '\u{FB02}', // fl
        0x95 => '\u{0141}', // Lslash
        0x96 => '\u{0152}', // OE
        0x97 => '\u{0160}', // Scaron
        0x98 => '\u{0178}', // Ydieresis
        0x99 => '\u{017D}', // Zcaron
        0x9A => '\u{0131}', // dotlessi
        0x9B => '\u{0142}', // lslash
        0x9C => '\u{0153}', // oe
        0x9D => '\u{0161}', // scaron
        0x9E => '\u{017E}', // zcaron
        0xA0 => '\u{20AC}', // Euro
        0x7F | 0x9F => char::REPLACEMENT_CHARACTER,
        _ => char::from(code),
    }
}
