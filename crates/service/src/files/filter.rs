use tracing::debug;

use super::{require, UploadedFile};
use crate::errors::ServiceError;

/// Accepted image subtypes. `jepg` is kept as listed.
pub const VALID_EXTENSIONS: [&str; 4] = ["jpg", "jepg", "png", "gif"];

/// Decide whether an upload may be stored.
///
/// A missing file is an error; an unsupported type is `Ok(false)`.
pub fn file_filter(file: Option<&UploadedFile>) -> Result<bool, ServiceError> {
    let file = require(file)?;
    let accepted = file.subtype().is_some_and(|ext| VALID_EXTENSIONS.contains(&ext));
    if !accepted {
        debug!(mime_type = %file.mime_type, name = %file.original_name, "upload rejected by type");
    }
    Ok(accepted)
}
