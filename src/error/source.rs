//! Collection source errors

use std::path::Path;

use super::DevStudioError;

/// Creates a source-not-found error
pub fn not_found(path: &Path) -> DevStudioError {
    DevStudioError::SourceNotFound {
        path: path.display().to_string(),
    }
}

/// Creates an empty-collection error
pub fn empty(path: &Path, kind: impl Into<String>) -> DevStudioError {
    DevStudioError::EmptyCollection {
        path: path.display().to_string(),
        kind: kind.into(),
    }
}

/// Creates an invalid item name error
pub fn invalid_name(name: impl Into<String>) -> DevStudioError {
    DevStudioError::InvalidItemName { name: name.into() }
}
