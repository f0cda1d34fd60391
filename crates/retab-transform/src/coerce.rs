//! Type-aware cell coercion.
//!
//! [`coerce_value`] is the explicit fallible layer: a cell that cannot be
//! interpreted as the declared type is a [`ParseFailed`]. [`format_value`]
//! maps that failure deterministically to the raw cell text, so one malformed
//! cell stays visible in the output instead of aborting the whole transform.

use retab_model::{Cell, ValueType};
use thiserror::Error;

use crate::datetime::{matches_date_pattern, parse_date_fallback, parse_date_string};
use crate::serial::serial_to_date;

const DATE_DISPLAY_FORMAT: &str = "%m/%d/%Y";

/// A cell that could not be interpreted as its declared type.
///
/// Carries the raw display text so callers can fall back to it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot interpret {raw:?} as {value_type}")]
pub struct ParseFailed {
    pub raw: String,
    pub value_type: ValueType,
}

/// Coerces a cell to the declared type's display form.
///
/// # Errors
///
/// Returns [`ParseFailed`] when the cell cannot be read as the declared type.
pub fn coerce_value(cell: &Cell, value_type: ValueType) -> Result<String, ParseFailed> {
    if is_blank(cell) {
        return Ok(String::new());
    }
    match value_type {
        ValueType::String => Ok(cell.display_text()),
        ValueType::Number => coerce_number(cell),
        ValueType::Date => coerce_date(cell),
    }
}

/// Infallible variant of [`coerce_value`]: parse failures come back as the
/// raw cell text unchanged.
pub fn format_value(cell: &Cell, value_type: ValueType) -> String {
    coerce_value(cell, value_type).unwrap_or_else(|failed| failed.raw)
}

fn is_blank(cell: &Cell) -> bool {
    match cell {
        Cell::Empty => true,
        Cell::Text(text) => text.is_empty(),
        Cell::Number(_) => false,
    }
}

fn coerce_number(cell: &Cell) -> Result<String, ParseFailed> {
    let value = match cell {
        Cell::Number(value) => *value,
        Cell::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| parse_failed(cell, ValueType::Number))?,
        Cell::Empty => return Ok(String::new()),
    };
    Ok(format!("{value:.2}"))
}

fn coerce_date(cell: &Cell) -> Result<String, ParseFailed> {
    let date = match cell {
        Cell::Number(serial) => serial_to_date(*serial),
        Cell::Text(text) => {
            if matches_date_pattern(text) {
                parse_date_string(text)
            } else if let Ok(serial) = text.trim().parse::<f64>() {
                // Numeric text outside the recognized patterns is a raw
                // serial, same as a native numeric cell.
                serial_to_date(serial)
            } else {
                parse_date_fallback(text)
            }
        }
        Cell::Empty => return Ok(String::new()),
    };
    date.map(|date| date.format(DATE_DISPLAY_FORMAT).to_string())
        .ok_or_else(|| parse_failed(cell, ValueType::Date))
}

fn parse_failed(cell: &Cell, value_type: ValueType) -> ParseFailed {
    ParseFailed {
        raw: cell.display_text(),
        value_type,
    }
}
