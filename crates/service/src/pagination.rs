//! Pagination utilities for service layer
//!
//! Offset/limit paging with the catalog defaults (`limit = 10`, `offset = 0`).

use serde::Deserialize;

use crate::errors::ServiceError;

pub const DEFAULT_LIMIT: u64 = 10;

/// Pagination parameters as received from a caller; absent values take defaults.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
pub struct Pagination {
    pub limit: Option<u64>,
    pub offset: Option<u64>,
}

impl Pagination {
    pub fn new(limit: u64, offset: u64) -> Self { Self { limit: Some(limit), offset: Some(offset) } }

    /// Resolve defaults; returns `(limit, offset)`.
    pub fn normalize(self) -> Result<(u64, u64), ServiceError> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(ServiceError::Validation("limit must be a positive integer".into()));
        }
        Ok((limit, self.offset.unwrap_or(0)))
    }
}
