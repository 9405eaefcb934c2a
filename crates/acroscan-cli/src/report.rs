//! Rendering of a [`FormFieldSet`] for the terminal.

use std::io::{self, Write};
use std::path::Path;

use acroscan_core::FormFieldSet;

const BANNER: &str = "--- FORM FIELD DIAGNOSTIC RESULTS ---";
const COPY_HINT: &str = "🚨🚨 COPY THE FIELD NAMES BELOW AND PASTE THEM INTO server.js 🚨🚨";
const NO_FIELDS_WARNING: &str = "🛑 CRITICAL WARNING: No standard form fields were detected.";
const NO_FIELDS_ADVICE: &str = "This PDF may need to be re-created using a proper PDF editor \
     (like Adobe Acrobat Pro) to ensure fillable fields are present.";
const FOUND_HEADER: &str = "✅ Found the following form field names:";
const FOOTER: &str = "-----------------------------------";

/// Write the banner, then either the no-fields warning or the name list.
///
/// Field values are never written.
pub fn write_text<W: Write>(set: &FormFieldSet, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{COPY_HINT}")?;

    writeln!(out)?;
    if set.is_empty() {
        writeln!(out, "{NO_FIELDS_WARNING}")?;
        writeln!(out, "{NO_FIELDS_ADVICE}")?;
    } else {
        writeln!(out, "{FOUND_HEADER}")?;
        writeln!(out, "{}", list_literal(set.names()))?;
    }

    writeln!(out, "{FOOTER}")
}

/// Write `{"file": ..., "count": N, "fields": [...]}` on one line.
///
/// With `with_values`, a `"values"` object maps each name to its value or
/// `null`, in the same order.
pub fn write_json<W: Write>(
    file: &Path,
    set: &FormFieldSet,
    with_values: bool,
    out: &mut W,
) -> io::Result<()> {
    let names: Vec<&str> = set.names().collect();
    let mut value = serde_json::json!({
        "file": file.display().to_string(),
        "count": names.len(),
        "fields": names,
    });
    if with_values {
        let values: serde_json::Map<String, serde_json::Value> = set
            .iter()
            .map(|(name, v)| (name.to_string(), v.into()))
            .collect();
        value["values"] = serde_json::Value::Object(values);
    }
    writeln!(out, "{value}")
}

/// Format names as a list literal: `['Name', 'Date']`.
pub fn list_literal<'a, I>(names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let items: Vec<String> = names.into_iter().map(quote).collect();
    format!("[{}]", items.join(", "))
}

/// Quote one name for [`list_literal`].
///
/// Single quotes unless the text contains `'` and no `"`. The chosen quote,
/// backslashes and non-printable characters are escaped.
fn quote(text: &str) -> String {
    let q = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut s = String::with_capacity(text.len() + 2);
    s.push(q);
    for c in text.chars() {
        match c {
            '\\' => s.push_str("\\\\"),
            '\n' => s.push_str("\\n"),
            '\r' => s.push_str("\\r"),
            '\t' => s.push_str("\\t"),
            c if c == q => {
                s.push('\\');
                s.push(c);
            }
            c if !is_printable(c) => {
                let code = c as u32;
                if code < 0x100 {
                    s.push_str(&format!("\\x{code:02x}"));
                } else if code < 0x10000 {
                    s.push_str(&format!("\\u{code:04x}"));
                } else {
                    s.push_str(&format!("\\U{code:08x}"));
                }
            }
            c => s.push(c),
        }
    }
    s.push(q);
    s
}

/// Whether `c` prints as itself in a list literal.
///
/// Control and format characters, separators other than the ASCII space,
/// private-use code points and noncharacters are escaped. Unassigned code
/// points are not detected.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() {
        return false;
    }
    let code = c as u32;
    !matches!(
        code,
        // Separators: spaces, line and paragraph.
        0x00A0 | 0x1680 | 0x2000..=0x200A | 0x2028 | 0x2029 | 0x202F | 0x205F | 0x3000
        // Format characters.
        | 0x00AD | 0x0600..=0x0605 | 0x061C | 0x06DD | 0x070F | 0x0890 | 0x0891 | 0x08E2
        | 0x180E | 0x200B..=0x200F | 0x202A..=0x202E | 0x2060..=0x2064 | 0x2066..=0x206F
        | 0xFEFF | 0xFFF9..=0xFFFB | 0x110BD | 0x110CD | 0x13430..=0x1343F
        | 0x1BCA0..=0x1BCA3 | 0x1D173..=0x1D17A | 0xE0001 | 0xE0020..=0xE007F
        // Private use.
        | 0xE000..=0xF8FF | 0xF0000..=0xFFFFD | 0x100000..=0x10FFFD
        // Noncharacters.
        | 0xFDD0..=0xFDEF
    ) && code & 0xFFFE != 0xFFFE
}
