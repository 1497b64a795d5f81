use axum::{
    Json,
    extract::{Query, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    data::{
        EntryStore,
        models::{ApiError, Entry, LimitParams},
    },
    features::params::{LIST_LIMIT, RANDOM_LIMIT},
};

pub async fn list_words(
    State(store): State<EntryStore>,
    WithRejection(Query(params), _): WithRejection<Query<LimitParams>, ApiError>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let limit = LIST_LIMIT.resolve(params.limit.as_deref())?;
    let entries = store.list(limit).await?;
    log::debug!("Listed {} entries (limit {})", entries.len(), limit);
    Ok(Json(entries))
}

pub async fn random_words(
    State(store): State<EntryStore>,
    WithRejection(Query(params), _): WithRejection<Query<LimitParams>, ApiError>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    let limit = RANDOM_LIMIT.resolve(params.limit.as_deref())?;
    let entries = store.random_sample(limit).await?;
    log::debug!("Sampled {} entries (limit {})", entries.len(), limit);
    Ok(Json(entries))
}
