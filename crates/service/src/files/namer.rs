use uuid::Uuid;

use super::{require, UploadedFile};
use crate::errors::ServiceError;

/// `<uuid>.<subtype>` for an accepted upload.
pub fn file_namer(file: Option<&UploadedFile>) -> Result<String, ServiceError> {
    let file = require(file)?;
    let ext = file
        .subtype()
        .ok_or_else(|| ServiceError::Validation(format!("media type '{}' has no subtype", file.mime_type)))?;
    Ok(format!("{}.{}", Uuid::new_v4(), ext))
}
