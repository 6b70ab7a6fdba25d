//! Error types for the registration flow

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Non-2xx reply from the postal lookup service
    #[error("Pincode lookup failed: {0}")]
    Lookup(String),

    /// Non-2xx reply from the registration table store
    #[error("Registration insert failed: {0}")]
    Store(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
