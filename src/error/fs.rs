//! File system errors

use std::path::Path;

use super::DevStudioError;

/// Creates a read failure for `path`
pub fn read_failed(path: &Path, err: &std::io::Error) -> DevStudioError {
    DevStudioError::FileReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> DevStudioError {
    DevStudioError::IoError {
        message: message.into(),
    }
}
