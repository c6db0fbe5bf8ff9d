//! FILENAME: core/totals-engine/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TotalsError {
    #[error("Unknown total type: {0}")]
    UnknownTotalType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TotalsError>;
