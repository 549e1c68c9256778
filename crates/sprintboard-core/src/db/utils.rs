//! Row conversion and identifier helpers shared by the query modules.

use jiff::Timestamp;
use rusqlite::{types::Type, Row};
use uuid::Uuid;

/// Prefix of generated project identifiers.
pub const PROJECT_ID_PREFIX: &str = "project";

/// Prefix of generated sprint identifiers.
pub const SPRINT_ID_PREFIX: &str = "sprint";

/// Generates a new random identifier such as `sprint-6f1c...`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

/// Reads an RFC 3339 timestamp column.
pub(super) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a JSON text column into any deserializable type.
pub(super) fn json_column<T: serde::de::DeserializeOwned>(
    row: &Row<'_>,
    idx: usize,
) -> rusqlite::Result<T> {
    let text: String = row.get(idx)?;
    serde_json::from_str(&text)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_id_is_prefixed_and_unique() {
        let first = new_id(SPRINT_ID_PREFIX);
        let second = new_id(SPRINT_ID_PREFIX);
        assert!(first.starts_with("sprint-"));
        assert_eq!(first.len(), "sprint-".len() + 36);
        assert_ne!(first, second);
    }
}
