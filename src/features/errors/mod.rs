pub mod error_conversions;
pub mod error_responses;

pub use error_responses::panic_response;
