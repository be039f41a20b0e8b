//! Numeric ordering over display-string fields.
//!
//! Ids and display orders arrive as display strings. They are parsed as
//! numbers before comparing; values that do not parse (or are not finite)
//! sort after every numeric value and keep their input order.

use std::cmp::Ordering;

use tracing::warn;

use crate::data::Record;

/// Parse a display value as a sort number.
pub fn numeric_key(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Compare two parsed keys: numbers ascending, non-numbers last.
pub fn compare_keys(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable ascending sort of records by the numeric value of `field`.
pub fn sort_by_numeric_field(records: &mut [Record], field: &str) {
    for record in records.iter() {
        let value = record.value(field);
        if numeric_key(value).is_none() {
            warn!(field, value, "non-numeric sort key, ordering it last");
        }
    }
    records.sort_by(|a, b| compare_keys(numeric_key(a.value(field)), numeric_key(b.value(field))));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(field: &str, values: &[&str]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Record::from_pairs([(field.to_string(), v.to_string()), ("pos".to_string(), i.to_string())]))
            .collect()
    }

    fn column<'a>(records: &'a [Record], field: &str) -> Vec<&'a str> {
        records.iter().map(|r| r.value(field)).collect()
    }

    #[test]
    fn test_numeric_key() {
        assert_eq!(numeric_key("12"), Some(12.0));
        assert_eq!(numeric_key(" 3.5 "), Some(3.5));
        assert_eq!(numeric_key(""), None);
        assert_eq!(numeric_key("abc"), None);
        assert_eq!(numeric_key("NaN"), None);
        assert_eq!(numeric_key("inf"), None);
    }

    #[test]
    fn test_display_order_sorts_ascending() {
        let mut files = records("displayOrder", &["2", "1", "3"]);
        sort_by_numeric_field(&mut files, "displayOrder");
        assert_eq!(column(&files, "displayOrder"), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_numeric_not_lexicographic() {
        let mut races = records("id", &["10", "9", "100"]);
        sort_by_numeric_field(&mut races, "id");
        assert_eq!(column(&races, "id"), vec!["9", "10", "100"]);
    }

    #[test]
    fn test_non_numeric_last_and_stable() {
        let mut files = records("displayOrder", &["b", "2", "", "1", "a"]);
        sort_by_numeric_field(&mut files, "displayOrder");
        assert_eq!(column(&files, "displayOrder"), vec!["1", "2", "b", "", "a"]);
    }

    #[test]
    fn test_equal_keys_keep_input_order() {
        let mut files = records("displayOrder", &["1", "1", "0"]);
        sort_by_numeric_field(&mut files, "displayOrder");
        assert_eq!(column(&files, "pos"), vec!["2", "0", "1"]);
    }

    #[test]
    fn test_missing_field_sorts_last() {
        let mut items = vec![
            Record::from_pairs([("title", "no order")]),
            Record::from_pairs([("displayOrder", "4")]),
        ];
        sort_by_numeric_field(&mut items, "displayOrder");
        assert_eq!(items[0].value("displayOrder"), "4");
    }
}
