//! Tests for the type coercion engine.

use retab_model::{Cell, ValueType};
use retab_transform::{coerce_value, format_value};

fn text(value: &str) -> Cell {
    Cell::Text(value.to_string())
}

#[test]
fn string_passthrough() {
    assert_eq!(format_value(&text("hello"), ValueType::String), "hello");
    assert_eq!(format_value(&Cell::Empty, ValueType::String), "");
    assert_eq!(format_value(&text(""), ValueType::String), "");
}

#[test]
fn string_renders_numbers_textually() {
    assert_eq!(format_value(&Cell::Number(3.0), ValueType::String), "3");
    assert_eq!(format_value(&Cell::Number(2.5), ValueType::String), "2.5");
}

#[test]
fn number_renders_two_decimals() {
    assert_eq!(format_value(&text("3.14159"), ValueType::Number), "3.14");
    assert_eq!(format_value(&text("7"), ValueType::Number), "7.00");
    assert_eq!(format_value(&text(" 2.5 "), ValueType::Number), "2.50");
    assert_eq!(format_value(&Cell::Number(12.5), ValueType::Number), "12.50");
    assert_eq!(format_value(&Cell::Number(-4.0), ValueType::Number), "-4.00");
}

#[test]
fn number_empty_is_empty() {
    assert_eq!(format_value(&Cell::Empty, ValueType::Number), "");
    assert_eq!(format_value(&text(""), ValueType::Number), "");
}

#[test]
fn number_failure_keeps_raw_text() {
    assert_eq!(format_value(&text("abc"), ValueType::Number), "abc");
    let failed = coerce_value(&text("abc"), ValueType::Number).expect_err("should not parse");
    assert_eq!(failed.raw, "abc");
    assert_eq!(failed.value_type, ValueType::Number);
}

#[test]
fn date_from_serial_number() {
    assert_eq!(format_value(&Cell::Number(58.0), ValueType::Date), "02/28/1900");
    // Leap-bug boundary: 59 uncompensated, 60 shifted back one day.
    assert_eq!(format_value(&Cell::Number(59.0), ValueType::Date), "03/01/1900");
    assert_eq!(format_value(&Cell::Number(60.0), ValueType::Date), "03/01/1900");
    assert_eq!(format_value(&Cell::Number(61.0), ValueType::Date), "03/02/1900");
}

#[test]
fn date_from_numeric_text_is_a_serial() {
    assert_eq!(format_value(&text("60"), ValueType::Date), "03/01/1900");
}

#[test]
fn date_from_recognized_strings() {
    assert_eq!(format_value(&text("2023-05-01"), ValueType::Date), "05/01/2023");
    assert_eq!(format_value(&text("5/1/23"), ValueType::Date), "05/01/2023");
    assert_eq!(format_value(&text("05/01/2023"), ValueType::Date), "05/01/2023");
    assert_eq!(format_value(&text("1-2-23"), ValueType::Date), "02/01/2023");
    assert_eq!(format_value(&text("15.3.2024"), ValueType::Date), "03/15/2024");
    assert_eq!(format_value(&text("15.3.24"), ValueType::Date), "03/15/2024");
}

#[test]
fn date_from_fallback_formats() {
    assert_eq!(format_value(&text("May 1, 2023"), ValueType::Date), "05/01/2023");
    assert_eq!(format_value(&text("2023/05/01"), ValueType::Date), "05/01/2023");
    assert_eq!(
        format_value(&text("2023-05-01T08:30:00"), ValueType::Date),
        "05/01/2023"
    );
}

#[test]
fn date_empty_is_empty() {
    assert_eq!(format_value(&Cell::Empty, ValueType::Date), "");
    assert_eq!(format_value(&text(""), ValueType::Date), "");
}

#[test]
fn date_failure_keeps_raw_text() {
    assert_eq!(format_value(&text("hello"), ValueType::Date), "hello");
    // Pattern-shaped but not on the calendar: failure, not rollover.
    assert_eq!(format_value(&text("99/99/99"), ValueType::Date), "99/99/99");
    let failed = coerce_value(&text("hello"), ValueType::Date).expect_err("should not parse");
    assert_eq!(failed.raw, "hello");
    assert_eq!(failed.value_type, ValueType::Date);
}
