pub mod entry_models;
pub mod error_models;
pub mod search_models;

pub use entry_models::Entry;
pub use error_models::{ApiError, StartupError, StoreError};
pub use search_models::{LimitParams, SearchParams};
