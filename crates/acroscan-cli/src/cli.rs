use std::path::PathBuf;

use acroscan_core::{FieldNaming, FieldSelection, FieldSetOptions};
use acroscan_parse::ReadOptions;
use clap::{ArgAction, Parser, ValueEnum};

/// PDF template scanned when no path is given.
pub const DEFAULT_PDF_PATH: &str = "forms/barangay-clearance (1).pdf";

/// List the fillable form-field names of a PDF template.
#[derive(Debug, Parser)]
#[command(name = "acroscan", about, version)]
pub struct Cli {
    /// Path to the PDF template, relative to the working directory
    #[arg(value_name = "FILE", env = "ACROSCAN_PDF", default_value = DEFAULT_PDF_PATH)]
    pub file: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Use fully-qualified dotted names for hierarchical fields
    #[arg(long)]
    pub full_names: bool,

    /// Include checkbox, choice and signature fields, not only text fields
    #[arg(long)]
    pub all_fields: bool,

    /// Include each field's current value (JSON output only)
    #[arg(long)]
    pub values: bool,

    /// Password for encrypted PDFs
    #[arg(long)]
    pub password: Option<String>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Reader options derived from the command-line flags.
    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            field_set: FieldSetOptions {
                naming: if self.full_names {
                    FieldNaming::FullyQualified
                } else {
                    FieldNaming::Partial
                },
                selection: if self.all_fields {
                    FieldSelection::All
                } else {
                    FieldSelection::TextOnly
                },
            },
            password: self.password.clone(),
        }
    }
}

/// Output format for the field report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable banner and name list
    Text,
    /// A single JSON object
    Json,
}
