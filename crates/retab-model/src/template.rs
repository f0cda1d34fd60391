use std::fmt;

use serde::{Deserialize, Serialize};

/// Declared output type of a mapped column.
///
/// Types are always declared by the template; they are never inferred from
/// the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    String,
    Number,
    Date,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One output column: where it comes from and how its values are typed.
///
/// External field names (`name`, `value`, `type`) match the template
/// configuration format. `source_column` is a spreadsheet-style label
/// (`A`..`Z`, `AA`..); it is validated when resolved, not at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMapping {
    #[serde(rename = "name")]
    pub output_name: String,
    #[serde(rename = "value")]
    pub source_column: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
}

/// A named, ordered set of column mappings. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Zero-based row offset of the source header; data rows start here.
    /// Authoritative and independent of whatever header the grid itself has.
    #[serde(rename = "headerRow")]
    pub header_row: usize,
    #[serde(rename = "data")]
    pub mappings: Vec<ColumnMapping>,
}

impl Template {
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }
}
