use serde::{Deserialize, Serialize};

use crate::ValueType;

/// Output of the transform pipeline.
///
/// Invariants: `headers`, `types` and every row all have the same length,
/// and all three follow the template's mapping declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessedDataset {
    pub headers: Vec<String>,
    pub types: Vec<ValueType>,
    pub rows: Vec<Vec<String>>,
}

impl ProcessedDataset {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
