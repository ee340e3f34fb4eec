use std::path::Path;

use crate::error::RequestError;

/// Resolves the request body. A body file, when given, replaces the literal
/// body entirely.
///
/// # Errors
///
/// Returns [`RequestError::ReadBodyFile`] when the body file cannot be read.
pub fn resolve_body(literal: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>, RequestError> {
    if let Some(path) = file {
        return std::fs::read(path).map_err(|err| RequestError::ReadBodyFile {
            path: path.to_path_buf(),
            source: err,
        });
    }
    Ok(literal.map(|body| body.as_bytes().to_vec()).unwrap_or_default())
}
