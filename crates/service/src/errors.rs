use std::fmt::Display;

use thiserror::Error;

/// Caller-facing errors. `Internal` never carries storage detail; that only
/// goes to the logs.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("Unexpected error, check server logs")]
    Internal,
}

impl ServiceError {
    pub fn not_found(what: impl Display) -> Self { Self::NotFound(format!("Product with {} not found", what)) }

    /// HTTP status an outer layer should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ServiceError::Validation(_) => 400,
            ServiceError::Conflict(_) => 400,
            ServiceError::NotFound(_) => 404,
            ServiceError::Internal => 500,
        }
    }
}
