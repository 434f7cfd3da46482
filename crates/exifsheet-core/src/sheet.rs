use std::path::Path;

use csv::WriterBuilder;

use crate::errors::SheetError;
use crate::model::ImageRecord;

/// Spreadsheet column order. Matches the field order of [`ImageRecord`].
pub const SHEET_COLUMNS: [&str; 6] = [
    "filename",
    "path",
    "latitude",
    "longitude",
    "date",
    "device",
];

/// Serializes the record sequence to a CSV spreadsheet at `output`,
/// overwriting any existing file. The header row is written even when the
/// record sequence is empty; absent values become empty cells.
pub fn write_sheet(records: &[ImageRecord], output: &Path) -> Result<(), SheetError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(output)?;
    writer.write_record(SHEET_COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
