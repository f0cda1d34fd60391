//! Spreadsheet date-serial decoding.
//!
//! Spreadsheet files store dates as a day count from a 1900-01-01 epoch and
//! retain the historical phantom leap day 1900-02-29 at serial 60. Serials
//! past that point are shifted back one day before conversion so they land on
//! the real calendar. Files using the alternate 1904 date system are not
//! handled.

use chrono::{Duration, NaiveDate};

/// Serials at or below this value predate the phantom leap day and need no
/// compensation.
const LEAP_BUG_THRESHOLD: f64 = 59.0;

/// Decodes a date serial into a calendar date.
///
/// Fractional serials carry a time-of-day component; only the date part is
/// kept. Returns `None` for non-finite input or values outside the supported
/// calendar range.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let adjusted = if serial > LEAP_BUG_THRESHOLD {
        serial - 1.0
    } else {
        serial
    };
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    epoch.checked_add_signed(Duration::try_days(adjusted.floor() as i64)?)
}
