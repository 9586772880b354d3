//! Export of missing-data reports.
//!
//! Reports flatten into [`ReportRow`]s, which the CSV exporter writes out.

mod csv;
mod row;

pub use self::csv::{export_csv, write_report_csv};
pub use row::{report_rows, ReportRow};
