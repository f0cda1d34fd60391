//! The row-mapping pipeline.

use retab_model::{Cell, ProcessedDataset, RawGrid, Template, ValueType};
use tracing::debug;

use crate::coerce::format_value;
use crate::column::column_index;
use crate::error::TransformError;

/// Re-projects a grid through a template into a typed, formatted dataset.
///
/// Headers and types follow the template's mapping declaration order. Data
/// rows run from `template.header_row` to the end of the grid, preserving
/// input order; an offset at or past the end yields zero rows. Missing cells
/// (ragged rows, columns past the grid edge) read as empty. Per-cell coercion
/// never fails the call.
///
/// The transform is pure: identical inputs always produce identical output.
///
/// # Errors
///
/// Returns [`TransformError::InvalidColumnLabel`] when a mapping's source
/// column label is malformed. Labels are resolved up front, so a bad label
/// fails the call before any row is processed.
pub fn process_template(
    grid: &RawGrid,
    template: &Template,
) -> Result<ProcessedDataset, TransformError> {
    let headers: Vec<String> = template
        .mappings
        .iter()
        .map(|mapping| mapping.output_name.clone())
        .collect();
    let types: Vec<ValueType> = template
        .mappings
        .iter()
        .map(|mapping| mapping.value_type)
        .collect();
    let columns: Vec<usize> = template
        .mappings
        .iter()
        .map(|mapping| column_index(&mapping.source_column))
        .collect::<Result<_, _>>()?;

    let mut rows = Vec::with_capacity(grid.row_count().saturating_sub(template.header_row));
    for row in grid.rows.iter().skip(template.header_row) {
        let mut output = Vec::with_capacity(columns.len());
        for (&column, mapping) in columns.iter().zip(&template.mappings) {
            output.push(format_value(
                row.get(column).unwrap_or(&Cell::Empty),
                mapping.value_type,
            ));
        }
        rows.push(output);
    }

    debug!(
        template = %template.name,
        rows = rows.len(),
        columns = headers.len(),
        "processed grid"
    );

    Ok(ProcessedDataset {
        headers,
        types,
        rows,
    })
}
