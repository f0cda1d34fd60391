//! Template-driven transformation engine.
//!
//! Re-projects an ingested [`retab_model::RawGrid`] into a normalized, typed
//! [`retab_model::ProcessedDataset`] according to a named column-mapping
//! template: spreadsheet-style column addressing, type-aware value coercion
//! (date-serial decoding included), and the row-mapping pipeline that ties
//! them together.

pub mod coerce;
pub mod column;
pub mod datetime;
pub mod error;
pub mod pipeline;
pub mod serial;

pub use coerce::{ParseFailed, coerce_value, format_value};
pub use column::{column_index, column_label};
pub use error::TransformError;
pub use pipeline::process_template;
pub use serial::serial_to_date;
