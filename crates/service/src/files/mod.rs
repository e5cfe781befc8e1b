//! Upload helpers: the media-type gate and the stored-name generator.
//! Neither touches the filesystem.

mod filter;
mod namer;

pub use filter::{file_filter, VALID_EXTENSIONS};
pub use namer::file_namer;

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Metadata of an incoming upload as declared by the client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub original_name: String,
    pub mime_type: String,
    pub size: u64,
}

impl UploadedFile {
    pub fn new(original_name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self { original_name: original_name.into(), mime_type: mime_type.into(), size }
    }

    /// Media subtype, e.g. `png` for `image/png`.
    pub fn subtype(&self) -> Option<&str> {
        self.mime_type.split('/').nth(1).filter(|s| !s.is_empty())
    }
}

pub(crate) fn require(file: Option<&UploadedFile>) -> Result<&UploadedFile, ServiceError> {
    file.ok_or_else(|| ServiceError::Validation("File is empty".into()))
}
