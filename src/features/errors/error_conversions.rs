use axum::extract::rejection::{PathRejection, QueryRejection};
use diesel::result::Error as DieselError;

use crate::data::models::{ApiError, StoreError};

impl From<DieselError> for StoreError {
    fn from(err: DieselError) -> Self {
        match err {
            DieselError::DeserializationError(_) => StoreError::Decode(err),
            _ => StoreError::Query(err),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Decode(_) => ApiError::DataCorruption(err),
            _ => ApiError::StorageUnavailable(err),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedRequest(rejection.body_text())
    }
}
