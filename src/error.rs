//! Error types for the edges of the game
//!
//! The simulation tick itself never fails. Errors only come from loading
//! tuning documents and talking to the record store.

/// Record store failures
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("record storage unavailable: {0}")]
    Unavailable(String),

    #[error("stored record {raw:?} is not a distance")]
    Malformed { raw: String },

    #[error("failed to write record: {0}")]
    Write(String),
}

/// Tuning document failures
#[derive(thiserror::Error, Debug)]
pub enum TuningError {
    #[error("tuning JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("tuning value `{field}` out of range: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}
