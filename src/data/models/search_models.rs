use serde::Deserialize;

// Query values stay as raw strings so that malformed input is reported with
// our own error body instead of axum's rejection text.

#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub word: Option<String>,
}
