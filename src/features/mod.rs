pub mod errors;
pub mod params;
pub mod search;
