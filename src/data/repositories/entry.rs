use diesel::dsl::{exists, sql};
use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::Entry;
use crate::data::store::DbConnection;
use crate::features::search::SearchEngine;
use crate::schema::api_kbbi_iv;

#[cfg(not(feature = "mysql"))]
const RANDOM_ORDER: &str = "RANDOM()";
#[cfg(feature = "mysql")]
const RANDOM_ORDER: &str = "RAND()";

#[cfg(not(feature = "mysql"))]
const WORD_LENGTH: &str = "LENGTH(word)";
#[cfg(feature = "mysql")]
const WORD_LENGTH: &str = "CHAR_LENGTH(word)";

/// Substring candidates fetched per search, shortest words first.
pub const SEARCH_CANDIDATE_LIMIT: i64 = 100;

pub struct EntryRepository;

impl EntryRepository {
    /// Whether the table holds at least one row. Errors when it cannot be queried.
    pub fn has_entries(conn: &mut DbConnection) -> QueryResult<bool> {
        diesel::select(exists(api_kbbi_iv::table.select(api_kbbi_iv::word))).get_result(conn)
    }

    /// First `limit` rows in whatever order the database returns them.
    pub fn list(conn: &mut DbConnection, limit: i64) -> QueryResult<Vec<Entry>> {
        api_kbbi_iv::table
            .select(Entry::as_select())
            .limit(limit)
            .load(conn)
    }

    /// Uniform sample drawn by the database itself.
    pub fn random_sample(conn: &mut DbConnection, limit: i64) -> QueryResult<Vec<Entry>> {
        api_kbbi_iv::table
            .select(Entry::as_select())
            .order(sql::<Integer>(RANDOM_ORDER))
            .limit(limit)
            .load(conn)
    }

    pub fn find_exact(conn: &mut DbConnection, word: &str) -> QueryResult<Option<Entry>> {
        api_kbbi_iv::table
            .filter(api_kbbi_iv::word.eq(word))
            .select(Entry::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_containing(
        conn: &mut DbConnection,
        fragment: &str,
        limit: i64,
    ) -> QueryResult<Vec<Entry>> {
        let pattern = format!("%{}%", escape_like(fragment));

        api_kbbi_iv::table
            .filter(api_kbbi_iv::word.like(pattern).escape('\\'))
            .select(Entry::as_select())
            .order(sql::<Integer>(WORD_LENGTH))
            .limit(limit)
            .load(conn)
    }

    /// Exact match if one exists, otherwise the best ranked substring match.
    pub fn search(conn: &mut DbConnection, word: &str) -> QueryResult<Option<Entry>> {
        if let Some(entry) = Self::find_exact(conn, word)? {
            return Ok(Some(entry));
        }

        let candidates = Self::find_containing(conn, word, SEARCH_CANDIDATE_LIMIT)?;
        Ok(SearchEngine::best_match(word, candidates))
    }
}

// `%` and `_` in user input must match literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
