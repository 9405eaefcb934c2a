//! The ordered field-name → value mapping produced by one scan.

use indexmap::IndexMap;

use crate::form_field::{FieldNaming, FieldSelection, FormField};

/// Options controlling how extracted fields become a [`FormFieldSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSetOptions {
    /// How each field is keyed.
    pub naming: FieldNaming,
    /// Which field types are kept.
    pub selection: FieldSelection,
}

/// Mapping from field name to current value for one PDF.
///
/// Keys are unique and iterate in the order their fields appear in the
/// AcroForm tree. If two fields share a key, the first position is kept and
/// the later value replaces the earlier one.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct FormFieldSet {
    entries: IndexMap<String, Option<String>>,
}

impl FormFieldSet {
    /// Build a set from terminal fields in document order.
    pub fn from_fields<'a, I>(fields: I, options: &FieldSetOptions) -> Self
    where
        I: IntoIterator<Item = &'a FormField>,
    {
        let entries = fields
            .into_iter()
            .filter(|f| options.selection.accepts(f.field_type))
            .map(|f| (f.key(options.naming).to_string(), f.value.clone()))
            .collect();
        Self { entries }
    }

    /// Number of distinct field names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no fields were found.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in extraction order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate `(name, value)` pairs in extraction order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldType;

    fn field(name: &str, partial: &str, field_type: FieldType, value: Option<&str>) -> FormField {
        FormField {
            name: name.to_string(),
            partial_name: partial.to_string(),
            field_type,
            value: value.map(str::to_string),
            default_value: None,
            flags: 0,
            page_index: Some(0),
        }
    }

    fn sample() -> Vec<FormField> {
        vec![
            field("Name", "Name", FieldType::Text, Some("Juan")),
            field("Agree", "Agree", FieldType::Button, Some("Yes")),
            field("Date", "Date", FieldType::Text, None),
        ]
    }

    #[test]
    fn default_options_keep_text_fields_in_order() {
        let set = FormFieldSet::from_fields(&sample(), &FieldSetOptions::default());
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("Name", Some("Juan")), ("Date", None)]);
    }

    #[test]
    fn all_selection_keeps_every_type() {
        let options = FieldSetOptions {
            selection: FieldSelection::All,
            ..Default::default()
        };
        let set = FormFieldSet::from_fields(&sample(), &options);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["Name", "Agree", "Date"]);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        let set = FormFieldSet::from_fields(&Vec::<FormField>::new(), &FieldSetOptions::default());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn only_non_text_fields_is_empty_by_default() {
        let fields = vec![field("Agree", "Agree", FieldType::Button, Some("Yes"))];
        let set = FormFieldSet::from_fields(&fields, &FieldSetOptions::default());
        assert!(set.is_empty());
    }

    #[test]
    fn duplicate_keys_keep_first_position_and_last_value() {
        let fields = vec![
            field("a.city", "city", FieldType::Text, Some("Manila")),
            field("Zip", "Zip", FieldType::Text, None),
            field("b.city", "city", FieldType::Text, Some("Cebu")),
        ];
        let set = FormFieldSet::from_fields(&fields, &FieldSetOptions::default());
        let pairs: Vec<_> = set.iter().collect();
        assert_eq!(pairs, vec![("city", Some("Cebu")), ("Zip", None)]);
    }

    #[test]
    fn fully_qualified_naming_keeps_both_duplicates() {
        let fields = vec![
            field("a.city", "city", FieldType::Text, Some("Manila")),
            field("b.city", "city", FieldType::Text, Some("Cebu")),
        ];
        let options = FieldSetOptions {
            naming: FieldNaming::FullyQualified,
            ..Default::default()
        };
        let set = FormFieldSet::from_fields(&fields, &options);
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a.city", "b.city"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_ordered_object() {
        let set = FormFieldSet::from_fields(&sample(), &FieldSetOptions::default());
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"Name":"Juan","Date":null}"#);
    }
}
