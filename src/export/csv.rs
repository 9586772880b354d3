//! CSV export of a missing-data report.
//!
//! Output is UTF-8 with a byte-order mark so spreadsheet applications pick the
//! right encoding, then a header line and one line per [`ReportRow`].

use csv::Writer;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::row::report_rows;
use crate::compare::MissingDataReport;
use crate::config::{REPORT_CSV_HEADERS, UTF8_BOM};
use crate::error_handling::ExportError;

/// Writes `report` as CSV to `writer`.
///
/// # Returns
///
/// The number of data rows written (the header is not counted).
///
/// # Errors
///
/// Returns an `ExportError` if rendering an example or writing fails.
pub fn write_report_csv<W: Write>(
    report: &MissingDataReport,
    mut writer: W,
) -> Result<usize, ExportError> {
    let rows = report_rows(report)?;

    writer.write_all(UTF8_BOM.as_bytes())?;
    let mut writer = Writer::from_writer(writer);
    writer.write_record(REPORT_CSV_HEADERS)?;

    for row in &rows {
        writer.write_record(row.as_record())?;
    }

    writer.flush()?;
    Ok(rows.len())
}

/// Exports `report` to `output`, or to stdout if `output` is `None`.
///
/// # Returns
///
/// Returns the number of rows exported, or an error if export fails.
pub fn export_csv(report: &MissingDataReport, output: Option<&Path>) -> Result<usize, ExportError> {
    // Trait object to handle both File and Stdout
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout()),
    };

    let count = write_report_csv(report, writer)?;
    match output {
        Some(path) => log::info!("Exported {} row(s) to {}", count, path.display()),
        None => log::debug!("Exported {} row(s) to stdout", count),
    }
    Ok(count)
}
