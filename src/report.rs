//! Plain-text rendering of maintenance records.
//!
//! A report is [`HEADER`], one [`RecordLine`] per record in date order, then [`FOOTER`]. It is
//! written to any [`fmt::Write`] sink; [`export`](crate::export) builds on it for files.

use core::fmt;

use crate::{MaintenanceIndex, Record};

pub const HEADER: &str = "=== Maintenance Records (by Date) ===";
pub const FOOTER: &str = "======================================";
/// Shown instead of a report when a model has no records.
pub const EMPTY: &str = "No maintenance records found.";

/// Displays a record as `Date: <date> | Description: <description> | Cost: $<cost>`.
///
/// # Examples
///
/// ```
/// use maintenance_index::Record;
/// use maintenance_index::report::RecordLine;
///
/// let record = Record::new("2024-01-10", "Oil change", 49.99);
/// assert_eq!(
///     RecordLine(&record).to_string(),
///     "Date: 2024-01-10 | Description: Oil change | Cost: $49.99"
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RecordLine<'a>(pub &'a Record);

impl fmt::Display for RecordLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0;
        write!(
            f,
            "Date: {} | Description: {} | Cost: ${}",
            record.date(),
            record.description(),
            record.cost()
        )
    }
}

/// Writes the full report for `index` and returns how many records it contains.
///
/// The header and footer are written even when the index is empty.
///
/// # Errors
///
/// Returns any error reported by `out`.
pub fn write_report<W: fmt::Write + ?Sized>(index: &MaintenanceIndex, out: &mut W) -> Result<usize, fmt::Error> {
    writeln!(out, "{HEADER}")?;
    let mut written = 0;
    for record in index {
        writeln!(out, "{}", RecordLine(record))?;
        written += 1;
    }
    writeln!(out, "{FOOTER}")?;
    Ok(written)
}
