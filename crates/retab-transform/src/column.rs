//! Spreadsheet-style column addressing.
//!
//! Column labels are a bijective base-26 encoding with no zero digit:
//! `A`..`Z` cover indices 0..=25, then `AA`, `AB`, ... The place values have
//! digits 1-26, so label length grows exactly at 25 -> 26 (`Z` -> `AA`) and
//! 701 -> 702 (`ZZ` -> `AAA`).

use crate::error::TransformError;

/// Converts a zero-based column index to its spreadsheet label.
pub fn column_label(index: usize) -> String {
    let mut digits = Vec::new();
    let mut n = index;
    loop {
        digits.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    digits.iter().rev().map(|b| *b as char).collect()
}

/// Converts a spreadsheet label back to its zero-based column index.
///
/// # Errors
///
/// Returns [`TransformError::InvalidColumnLabel`] if the label is empty or
/// contains any character outside `A-Z`.
pub fn column_index(label: &str) -> Result<usize, TransformError> {
    if label.is_empty() {
        return Err(TransformError::InvalidColumnLabel {
            label: label.to_string(),
        });
    }
    let mut index = 0usize;
    for ch in label.chars() {
        if !ch.is_ascii_uppercase() {
            return Err(TransformError::InvalidColumnLabel {
                label: label.to_string(),
            });
        }
        index = index * 26 + (ch as usize - 'A' as usize + 1);
    }
    Ok(index - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels() {
        assert_eq!(column_label(0), "A");
        assert_eq!(column_label(25), "Z");
        assert_eq!(column_label(26), "AA");
        assert_eq!(column_label(51), "AZ");
        assert_eq!(column_label(701), "ZZ");
        assert_eq!(column_label(702), "AAA");
    }

    #[test]
    fn known_indices() {
        assert_eq!(column_index("A"), Ok(0));
        assert_eq!(column_index("Z"), Ok(25));
        assert_eq!(column_index("AA"), Ok(26));
        assert_eq!(column_index("AZ"), Ok(51));
        assert_eq!(column_index("ZZ"), Ok(701));
        assert_eq!(column_index("AAA"), Ok(702));
    }

    #[test]
    fn round_trip_first_thousand() {
        for index in 0..=1000 {
            let label = column_label(index);
            assert!(label.chars().all(|ch| ch.is_ascii_uppercase()));
            assert_eq!(column_index(&label), Ok(index), "index {index} -> {label}");
        }
    }

    #[test]
    fn length_grows_at_boundaries() {
        assert_eq!(column_label(24).len(), 1);
        assert_eq!(column_label(25).len(), 1);
        assert_eq!(column_label(26).len(), 2);
        assert_eq!(column_label(701).len(), 2);
        assert_eq!(column_label(702).len(), 3);
    }

    #[test]
    fn invalid_labels_rejected() {
        for label in ["", "a", "A1", "A B", "Ä", "-A"] {
            assert_eq!(
                column_index(label),
                Err(TransformError::InvalidColumnLabel {
                    label: label.to_string()
                })
            );
        }
    }
}
