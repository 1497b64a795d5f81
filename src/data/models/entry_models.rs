use diesel::prelude::*;
use serde::Serialize;

use crate::schema::api_kbbi_iv;

/// One dictionary record as stored in `api_kbbi_IV`.
///
/// The JSON field names follow the public API (`arti`, `type`), not the
/// Rust field names.
#[derive(Debug, Clone, PartialEq, Eq, Queryable, Selectable, Serialize)]
#[diesel(table_name = api_kbbi_iv)]
#[cfg_attr(not(feature = "mysql"), diesel(check_for_backend(diesel::sqlite::Sqlite)))]
#[cfg_attr(feature = "mysql", diesel(check_for_backend(diesel::mysql::Mysql)))]
pub struct Entry {
    pub word: String,
    #[diesel(column_name = arti)]
    #[serde(rename = "arti")]
    pub definition: String,
    #[serde(rename = "type")]
    pub word_type: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_serializes_with_public_field_names() {
        let entry = Entry {
            word: "kucing".to_string(),
            definition: "hewan mamalia".to_string(),
            word_type: 1,
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"word": "kucing", "arti": "hewan mamalia", "type": 1})
        );
    }
}
