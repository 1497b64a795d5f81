use axum::{
    Json,
    extract::{Path, Query, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    data::{
        EntryStore,
        models::{ApiError, Entry, SearchParams},
    },
    features::params::normalize_word,
};

// GET /search?word=...
pub async fn search_word(
    State(store): State<EntryStore>,
    WithRejection(Query(params), _): WithRejection<Query<SearchParams>, ApiError>,
) -> Result<Json<Entry>, ApiError> {
    lookup(&store, params.word.as_deref()).await
}

// GET /search/{word}
pub async fn search_word_path(
    State(store): State<EntryStore>,
    WithRejection(Path(word), _): WithRejection<Path<String>, ApiError>,
) -> Result<Json<Entry>, ApiError> {
    lookup(&store, Some(&word)).await
}

async fn lookup(store: &EntryStore, raw: Option<&str>) -> Result<Json<Entry>, ApiError> {
    let word = normalize_word(raw)?;

    match store.search(word.clone()).await? {
        Some(entry) => Ok(Json(entry)),
        None => {
            log::debug!("No entry matches {:?}", word);
            Err(ApiError::NotFound)
        }
    }
}
