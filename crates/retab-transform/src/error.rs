use thiserror::Error;

/// Fatal transform errors.
///
/// Per-cell coercion failures are not errors at this level; they fall back to
/// the raw cell text. Only a structurally invalid template surfaces here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("invalid column label {label:?}: labels use letters A-Z only")]
    InvalidColumnLabel { label: String },
}
