//! CSV ingestion: materializes a [`retab_model::RawGrid`] from delimited
//! text.

mod csv_grid;
mod error;

pub use csv_grid::{read_csv_grid, read_csv_grid_from_reader};
pub use error::IngestError;
