//! Cell coercion helpers
//!
//! Spreadsheet cells arrive as loosely typed values. Depths and coordinates
//! are coerced to numbers the way a lenient numeric conversion would: a
//! value that cannot be read as a finite number is treated as missing and
//! the row is dropped by the caller.

use crate::constants::DEFAULT_NA_VALUES;
use calamine::Data;

/// Coerce a cell to a finite number
pub fn to_numeric(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    value.is_finite().then_some(value)
}

/// Coerce a cell to free text, `None` for empty cells
pub fn to_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) if s.is_empty() => None,
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) if f.is_finite() => Some(format!("{:?}", f)),
        Data::Float(_) => None,
        Data::Bool(true) => Some("True".to_string()),
        Data::Bool(false) => Some("False".to_string()),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        _ => None,
    }
}

/// True when a text cell holds a missing-value marker
///
/// `extra` adds site-specific markers on top of [`DEFAULT_NA_VALUES`].
pub fn is_na_marker(cell: &Data, extra: &[&str]) -> bool {
    match cell {
        Data::String(s) => DEFAULT_NA_VALUES.contains(&s.as_str()) || extra.contains(&s.as_str()),
        _ => false,
    }
}

/// Free text of a cell, with missing-value markers read as `None`
pub fn to_text_or_na(cell: &Data) -> Option<String> {
    if is_na_marker(cell, &[]) {
        None
    } else {
        to_text(cell)
    }
}

/// True when the cell holds nothing at all
pub fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.is_empty(),
        Data::Float(f) => f.is_nan(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_numeric_accepts_numbers_and_numeric_text() {
        assert_eq!(to_numeric(&Data::Float(87.5)), Some(87.5));
        assert_eq!(to_numeric(&Data::Int(102)), Some(102.0));
        assert_eq!(to_numeric(&Data::String("95".into())), Some(95.0));
        assert_eq!(to_numeric(&Data::String(" 95.5 ".into())), Some(95.5));
        assert_eq!(to_numeric(&Data::String("-116.2".into())), Some(-116.2));
    }

    #[test]
    fn test_to_numeric_rejects_everything_else() {
        assert_eq!(to_numeric(&Data::Empty), None);
        assert_eq!(to_numeric(&Data::String(String::new())), None);
        assert_eq!(to_numeric(&Data::String("NR".into())), None);
        assert_eq!(to_numeric(&Data::String("90+".into())), None);
        assert_eq!(to_numeric(&Data::String("nan".into())), None);
        assert_eq!(to_numeric(&Data::String("inf".into())), None);
        assert_eq!(to_numeric(&Data::Float(f64::NAN)), None);
        assert_eq!(to_numeric(&Data::Bool(true)), None);
    }

    #[test]
    fn test_to_text() {
        assert_eq!(to_text(&Data::String("probe".into())), Some("probe".into()));
        assert_eq!(to_text(&Data::String(String::new())), None);
        assert_eq!(to_text(&Data::Int(3)), Some("3".into()));
        assert_eq!(to_text(&Data::Float(2.0)), Some("2.0".into()));
        assert_eq!(to_text(&Data::Float(0.25)), Some("0.25".into()));
        assert_eq!(to_text(&Data::Bool(false)), Some("False".into()));
        assert_eq!(to_text(&Data::Empty), None);
    }

    #[test]
    fn test_na_markers() {
        for marker in ["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "#N/A", "<NA>"] {
            assert!(is_na_marker(&Data::String(marker.into()), &[]), "{}", marker);
            assert_eq!(to_text_or_na(&Data::String(marker.into())), None);
        }
        assert!(!is_na_marker(&Data::String("NR".into()), &[]));
        assert!(is_na_marker(&Data::String("NR".into()), &["NR"]));
        assert!(!is_na_marker(&Data::String("na".into()), &[]));
        assert!(!is_na_marker(&Data::Float(1.0), &[]));
        assert_eq!(to_text_or_na(&Data::String("A. Skier".into())), Some("A. Skier".into()));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&Data::Empty));
        assert!(is_blank(&Data::String(String::new())));
        assert!(!is_blank(&Data::String("WP".into())));
        assert!(!is_blank(&Data::Int(0)));
    }
}
