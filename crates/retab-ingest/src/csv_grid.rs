//! CSV to [`RawGrid`] materialization.
//!
//! The reader makes no assumption about a header row; the template's
//! `header_row` offset decides where data starts. Rows are right-padded with
//! empty cells to the widest row so downstream consumers see a rectangular
//! grid, and fully empty rows are dropped.

use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use retab_model::{Cell, RawGrid};

use crate::error::IngestError;

/// Reads a delimited-text file into a rectangular cell grid.
///
/// # Errors
///
/// Fails when the file cannot be opened or a record cannot be parsed.
pub fn read_csv_grid(path: &Path) -> Result<RawGrid, IngestError> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    let grid = collect_grid(reader)?;
    debug!(
        rows = grid.row_count(),
        width = grid.width(),
        path = %path.display(),
        "read csv grid"
    );
    Ok(grid)
}

/// Reads delimited text from any reader into a rectangular cell grid.
pub fn read_csv_grid_from_reader<R: Read>(source: R) -> Result<RawGrid, IngestError> {
    let reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(source);
    collect_grid(reader)
}

fn collect_grid<R: Read>(mut reader: csv::Reader<R>) -> Result<RawGrid, IngestError> {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    let mut width = 0usize;
    for record in reader.records() {
        let record = record?;
        let row: Vec<Cell> = record.iter().map(parse_cell).collect();
        if row.iter().all(Cell::is_empty) {
            continue;
        }
        width = width.max(row.len());
        rows.push(row);
    }
    for row in &mut rows {
        row.resize(width, Cell::Empty);
    }
    Ok(RawGrid::from_rows(rows))
}

fn parse_cell(raw: &str) -> Cell {
    let value = raw.trim().trim_matches('\u{feff}');
    if value.is_empty() {
        Cell::Empty
    } else if let Ok(number) = value.parse::<f64>() {
        // Delimited text has no native numeric cells; parseable numbers stand
        // in for what a binary spreadsheet decoder would hand over as numbers.
        Cell::Number(number)
    } else {
        Cell::Text(value.to_string())
    }
}
