pub mod cell;
pub mod dataset;
pub mod grid;
pub mod template;

pub use cell::Cell;
pub use dataset::ProcessedDataset;
pub use grid::RawGrid;
pub use template::{ColumnMapping, Template, ValueType};
