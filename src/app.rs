use axum::{Router, http::Method, routing::get};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{data::EntryStore, features::errors::panic_response, handlers};

pub fn build_router(store: EntryStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/", get(handlers::info))
        .route("/words", get(handlers::list_words))
        .route("/randomwords", get(handlers::random_words))
        .route("/search", get(handlers::search_word))
        // an empty path word is the query form without `word`
        .route("/search/", get(handlers::search_word))
        .route("/search/{word}", get(handlers::search_word_path))
        .fallback(handlers::unknown_endpoint)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .with_state(store)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
