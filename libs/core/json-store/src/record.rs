use serde::{de::DeserializeOwned, Serialize};

/// An entity stored in a collection document, identified by a numeric id
pub trait Record: Serialize + DeserializeOwned + Send + Sync + 'static {
    fn id(&self) -> u64;
}

/// Next free id for a collection: one past the largest id present, or 1.
///
/// Computed over the whole slice so ids are never reused after deletions
/// in the middle of the collection. Returns `None` once the largest id is
/// `u64::MAX`.
pub fn next_id<T: Record>(records: &[T]) -> Option<u64> {
    match records.iter().map(Record::id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// Parse a record id from a path or query parameter.
///
/// Accepts non-negative integers with optional surrounding whitespace.
pub fn parse_id(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize)]
    struct Row(u64);

    impl Record for Row {
        fn id(&self) -> u64 {
            self.0
        }
    }

    #[test]
    fn test_next_id_empty_collection_starts_at_one() {
        let rows: Vec<Row> = vec![];
        assert_eq!(next_id(&rows), Some(1));
    }

    #[test]
    fn test_next_id_uses_maximum_not_last_element() {
        let rows = vec![Row(1), Row(7), Row(3)];
        assert_eq!(next_id(&rows), Some(8));
    }

    #[test]
    fn test_next_id_exhausted_at_max() {
        let rows = vec![Row(3), Row(u64::MAX)];
        assert_eq!(next_id(&rows), None);
    }

    #[test]
    fn test_parse_id_valid() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id(" 12 "), Some(12));
    }

    #[test]
    fn test_parse_id_invalid() {
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("1.5"), None);
    }
}
