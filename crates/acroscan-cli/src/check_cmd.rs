use std::io::{self, Write};
use std::path::Path;

use acroscan_parse::{ReadOptions, read_form_field_set};

use crate::cli::{Cli, OutputFormat};
use crate::report;

/// Check the configured PDF and print its form-field names to stdout.
///
/// A missing file is fatal (`Err(1)`). A file that exists but cannot be read
/// as a PDF is reported and the run still ends with status 0.
pub fn run(cli: &Cli) -> Result<(), i32> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    check(&cli.file, &cli.read_options(), cli.format, cli.values, &mut out)
}

/// `with_values` adds field values to JSON output; text output never
/// shows them.
pub fn check<W: Write>(
    file: &Path,
    options: &ReadOptions,
    format: OutputFormat,
    with_values: bool,
    out: &mut W,
) -> Result<(), i32> {
    if !file.exists() {
        tracing::debug!(path = %file.display(), "PDF template missing");
        writeln!(
            out,
            "Error: PDF template not found at {}. Check your folder structure.",
            file.display()
        )
        .map_err(write_failed)?;
        return Err(1);
    }

    match read_form_field_set(file, options) {
        Ok(set) => {
            tracing::info!(path = %file.display(), fields = set.len(), "scan complete");
            let written = match format {
                OutputFormat::Text => report::write_text(&set, out),
                OutputFormat::Json => report::write_json(file, &set, with_values, out),
            };
            written.map_err(write_failed)
        }
        Err(e) => {
            tracing::debug!(path = %file.display(), error = %e, "PDF read failed");
            writeln!(out, "An unexpected error occurred during PDF reading: {e}")
                .map_err(write_failed)
        }
    }
}

fn write_failed(e: io::Error) -> i32 {
    eprintln!("Error: failed to write output: {e}");
    1
}
