//! Error types and handling for devstudio
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors here are the fatal kind: they end the command with exit status 1
//! (except [`DevStudioError::Interrupted`], which is a clean cancellation).
//! Failures of a single item inside a batch are not errors; they are the
//! `Failed` variants of the per-item outcome enums in [`crate::sync`].
//!
//! Convenience constructors live in sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`source`]: Collection source errors

pub mod fs;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for devstudio operations
#[derive(Error, Diagnostic, Debug)]
pub enum DevStudioError {
    // Source collection errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(devstudio::source::not_found),
        help("Pass --source <DIR> or set DEVSTUDIO_SOURCE to the directory holding the skills")
    )]
    SourceNotFound { path: String },

    #[error("No {kind} directories found in {path}")]
    #[diagnostic(code(devstudio::source::empty))]
    EmptyCollection { path: String, kind: String },

    #[error("Invalid item name: '{name}'")]
    #[diagnostic(
        code(devstudio::source::invalid_name),
        help("Item names are plain directory names without path separators")
    )]
    InvalidItemName { name: String },

    // Configuration errors
    #[error("Could not determine the user configuration directory")]
    #[diagnostic(
        code(devstudio::config::dir_unavailable),
        help("Pass --config-dir <DIR> or set DEVSTUDIO_CONFIG_DIR")
    )]
    ConfigDirUnavailable,

    #[error("Migration manifest not found: {path}")]
    #[diagnostic(
        code(devstudio::config::manifest_not_found),
        help("Pass --manifest <FILE> pointing at a YAML list of skills")
    )]
    ManifestNotFound { path: String },

    #[error("Failed to parse migration manifest {path}: {reason}")]
    #[diagnostic(code(devstudio::config::manifest_parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(devstudio::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(devstudio::fs::io_error))]
    IoError { message: String },

    // Interaction errors
    #[error("Failed to read confirmation: {message}")]
    #[diagnostic(code(devstudio::ui::prompt_failed))]
    PromptFailed { message: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(devstudio::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    #[error("Interrupted by user")]
    #[diagnostic(code(devstudio::ui::interrupted))]
    Interrupted,
}

impl From<std::io::Error> for DevStudioError {
    fn from(err: std::io::Error) -> Self {
        DevStudioError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DevStudioError {
    fn from(err: serde_yaml::Error) -> Self {
        DevStudioError::ManifestParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DevStudioError {
    fn from(err: serde_json::Error) -> Self {
        DevStudioError::IoError {
            message: format!("Failed to encode JSON: {err}"),
        }
    }
}

impl From<inquire::InquireError> for DevStudioError {
    fn from(err: inquire::InquireError) -> Self {
        match err {
            inquire::InquireError::OperationInterrupted => DevStudioError::Interrupted,
            other => DevStudioError::PromptFailed {
                message: other.to_string(),
            },
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, DevStudioError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = DevStudioError::SourceNotFound {
            path: "/tmp/skills".to_string(),
        };
        assert_eq!(err.to_string(), "Source directory not found: /tmp/skills");
    }

    #[test]
    fn test_error_code() {
        let err = DevStudioError::ConfigDirUnavailable;
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("devstudio::config::dir_unavailable".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DevStudioError = io_err.into();
        assert!(matches!(err, DevStudioError::IoError { .. }));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: DevStudioError = parse_result.unwrap_err().into();
        assert!(matches!(err, DevStudioError::ManifestParseFailed { .. }));
    }

    #[test]
    fn test_inquire_interrupt_maps_to_interrupted() {
        let err: DevStudioError = inquire::InquireError::OperationInterrupted.into();
        assert!(matches!(err, DevStudioError::Interrupted));
    }

    #[test]
    fn test_inquire_other_maps_to_prompt_failed() {
        let err: DevStudioError = inquire::InquireError::NotTTY.into();
        assert!(matches!(err, DevStudioError::PromptFailed { .. }));
    }

    test_error_contains!(
        test_empty_collection_error,
        DevStudioError::EmptyCollection {
            path: "/src/skills".to_string(),
            kind: "skills".to_string(),
        },
        "No skills directories found",
        "/src/skills"
    );

    test_error_contains!(
        test_invalid_item_name_error,
        DevStudioError::InvalidItemName {
            name: "../etc".to_string(),
        },
        "Invalid item name",
        "../etc"
    );

    test_error_contains!(
        test_manifest_not_found_error,
        DevStudioError::ManifestNotFound {
            path: "skills.yaml".to_string(),
        },
        "Migration manifest not found",
        "skills.yaml"
    );
}
