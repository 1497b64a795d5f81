pub mod info;
pub mod search;
pub mod words;

pub use info::info;
pub use search::{search_word, search_word_path};
pub use words::{list_words, random_words};

use crate::data::models::ApiError;

pub async fn unknown_endpoint() -> ApiError {
    ApiError::UnknownEndpoint
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
