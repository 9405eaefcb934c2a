//! PDF form field types for AcroForm extraction.
//!
//! Provides [`FormField`] and [`FieldType`] for representing PDF interactive
//! form fields (AcroForms) such as text inputs, checkboxes, dropdowns, and
//! signature fields, plus the [`FieldNaming`] and [`FieldSelection`] knobs
//! that decide how fields are keyed and filtered into a
//! [`FormFieldSet`](crate::FormFieldSet).

/// The type of a PDF form field.
///
/// Corresponds to the `/FT` entry in a field dictionary (PDF 1.7 Table 220).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    /// Text field (`/FT /Tx`) — accepts text input.
    Text,
    /// Button field (`/FT /Btn`) — checkboxes, radio buttons, push buttons.
    Button,
    /// Choice field (`/FT /Ch`) — dropdowns, list boxes.
    Choice,
    /// Signature field (`/FT /Sig`) — digital signature.
    Signature,
}

impl FieldType {
    /// Parse a field type from its PDF name string.
    ///
    /// Returns `None` if the string is not a recognized field type.
    pub fn from_pdf_name(name: &str) -> Option<Self> {
        match name {
            "Tx" => Some(Self::Text),
            "Btn" => Some(Self::Button),
            "Ch" => Some(Self::Choice),
            "Sig" => Some(Self::Signature),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "Text"),
            Self::Button => write!(f, "Button"),
            Self::Choice => write!(f, "Choice"),
            Self::Signature => write!(f, "Signature"),
        }
    }
}

/// How a field is keyed in a [`FormFieldSet`](crate::FormFieldSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldNaming {
    /// The field's own `/T` entry (or its nearest named ancestor's).
    #[default]
    Partial,
    /// All `/T` entries from the root of the field tree, joined with `.`.
    FullyQualified,
}

/// Which field types make it into a [`FormFieldSet`](crate::FormFieldSet).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldSelection {
    /// Only text fields (`/FT /Tx`).
    #[default]
    TextOnly,
    /// Every typed terminal field.
    All,
}

impl FieldSelection {
    /// Whether a field of `field_type` passes this selection.
    pub fn accepts(&self, field_type: FieldType) -> bool {
        match self {
            Self::TextOnly => field_type == FieldType::Text,
            Self::All => true,
        }
    }
}

/// A PDF form field extracted from the document's AcroForm dictionary.
///
/// Only terminal fields are represented; intermediate nodes of a
/// hierarchical field tree contribute their names to [`name`](Self::name)
/// and their inheritable entries (`/FT`, `/V`) to their descendants.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormField {
    /// Fully-qualified name. Hierarchical fields join names with `.`.
    pub name: String,
    /// Partial name from this field's `/T`, falling back to the nearest
    /// ancestor that has one.
    pub partial_name: String,
    /// Field type from `/FT`, possibly inherited.
    pub field_type: FieldType,
    /// Current value from `/V`, possibly inherited.
    pub value: Option<String>,
    /// Default value from `/DV`.
    pub default_value: Option<String>,
    /// Field flags from `/Ff` (bitmask).
    pub flags: u32,
    /// The 0-based page index this field belongs to, if determinable.
    pub page_index: Option<usize>,
}

impl FormField {
    /// The key this field is stored under for the given naming mode.
    pub fn key(&self, naming: FieldNaming) -> &str {
        match naming {
            FieldNaming::Partial => &self.partial_name,
            FieldNaming::FullyQualified => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, partial: &str, field_type: FieldType) -> FormField {
        FormField {
            name: name.to_string(),
            partial_name: partial.to_string(),
            field_type,
            value: None,
            default_value: None,
            flags: 0,
            page_index: None,
        }
    }

    #[test]
    fn field_type_from_pdf_name() {
        assert_eq!(FieldType::from_pdf_name("Tx"), Some(FieldType::Text));
        assert_eq!(FieldType::from_pdf_name("Btn"), Some(FieldType::Button));
        assert_eq!(FieldType::from_pdf_name("Ch"), Some(FieldType::Choice));
        assert_eq!(FieldType::from_pdf_name("Sig"), Some(FieldType::Signature));
    }

    #[test]
    fn field_type_from_pdf_name_unknown() {
        assert_eq!(FieldType::from_pdf_name("Unknown"), None);
        assert_eq!(FieldType::from_pdf_name("tx"), None);
    }

    #[test]
    fn field_type_display() {
        assert_eq!(format!("{}", FieldType::Text), "Text");
        assert_eq!(format!("{}", FieldType::Signature), "Signature");
    }

    #[test]
    fn selection_text_only_rejects_buttons() {
        assert!(FieldSelection::TextOnly.accepts(FieldType::Text));
        assert!(!FieldSelection::TextOnly.accepts(FieldType::Button));
        assert!(!FieldSelection::TextOnly.accepts(FieldType::Choice));
        assert!(!FieldSelection::TextOnly.accepts(FieldType::Signature));
    }

    #[test]
    fn selection_all_accepts_everything() {
        for ft in [
            FieldType::Text,
            FieldType::Button,
            FieldType::Choice,
            FieldType::Signature,
        ] {
            assert!(FieldSelection::All.accepts(ft));
        }
    }

    #[test]
    fn defaults_match_text_field_scan() {
        assert_eq!(FieldNaming::default(), FieldNaming::Partial);
        assert_eq!(FieldSelection::default(), FieldSelection::TextOnly);
    }

    #[test]
    fn key_follows_naming_mode() {
        let f = field("applicant.name", "name", FieldType::Text);
        assert_eq!(f.key(FieldNaming::Partial), "name");
        assert_eq!(f.key(FieldNaming::FullyQualified), "applicant.name");
    }
}
