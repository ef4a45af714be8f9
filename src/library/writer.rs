//! CSV table writer.
//!
//! Serialises the ordered row sequence as comma-delimited text: the fixed
//! 15-column header first, then one record per row in generation order.
//! The destination is caller-provided; selection of a file versus stdout
//! is an external concern.

use std::fs::File;
use std::path::Path;

use crate::library::error::{LibraryError, LibraryResult};
use crate::library::row::LibraryRow;

/// Column headers of the component database table, in output order.
///
/// Must stay in sync with the serde renames on [`LibraryRow`].
pub const HEADER: [&str; 15] = [
    "Part",
    "Description",
    "Value",
    "Case",
    "Tol",
    "Power",
    "Manufacturer",
    "Manufacturer P/N",
    "Supplier 1",
    "Supplier Part Number 1",
    "Library Path",
    "Library Ref",
    "Footprint Path",
    "Footprint Ref",
    "Company",
];

/// Writes the header and all rows to the given sink.
///
/// The header is emitted even for an empty row set, so the output is
/// always a well-formed table. The sink is flushed before returning.
///
/// # Errors
///
/// Returns [`LibraryError::TableWrite`] when serialisation or the
/// underlying sink fails.
pub fn write_table<W: std::io::Write>(rows: &[LibraryRow], sink: W) -> LibraryResult<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(sink);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Creates the file at `path` and writes the table into it.
///
/// # Errors
///
/// Returns [`LibraryError::FileCreate`] when the destination cannot be
/// opened, or [`LibraryError::TableWrite`] when writing fails.
pub fn write_table_to_path(rows: &[LibraryRow], path: &Path) -> LibraryResult<()> {
    let file = File::create(path).map_err(|e| LibraryError::file_create(path, e))?;
    write_table(rows, file)
}
