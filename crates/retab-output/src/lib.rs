//! CSV export for processed datasets.
//!
//! Serializes the headers and formatted rows of a
//! [`retab_model::ProcessedDataset`]. The declared column types are not part
//! of the serialized output; they are presentation metadata for display
//! collaborators.

use std::io::Write;
use std::path::Path;

use thiserror::Error;

use retab_model::ProcessedDataset;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes a dataset as CSV: one header row, then the data rows in order.
///
/// # Errors
///
/// Fails when the file cannot be created or a record cannot be written.
pub fn write_csv(dataset: &ProcessedDataset, path: &Path) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(dataset, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes a dataset as CSV to any writer.
pub fn write_csv_to<W: Write>(dataset: &ProcessedDataset, target: W) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_writer(target);
    write_records(dataset, &mut writer)?;
    writer.flush()?;
    Ok(())
}

fn write_records<W: Write>(
    dataset: &ProcessedDataset,
    writer: &mut csv::Writer<W>,
) -> Result<(), OutputError> {
    writer.write_record(&dataset.headers)?;
    for row in &dataset.rows {
        writer.write_record(row)?;
    }
    Ok(())
}
