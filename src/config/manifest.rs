//! Migration manifest (`skills.yaml`)
//!
//! Lists the legacy commands to convert into skills, with the description
//! and invocation policy written into each generated `SKILL.md`:
//!
//! ```yaml
//! skills:
//!   - name: commit
//!     description: Create conventional commits
//!     disable-model-invocation: true
//!   - name: review
//!     description: Multi-agent code analysis
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DevStudioError, Result};

/// Default manifest file name, relative to the current directory
pub const DEFAULT_MANIFEST_FILE: &str = "skills.yaml";

/// Parsed migration manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationManifest {
    #[serde(default)]
    pub skills: Vec<ManifestEntry>,
}

/// One command to migrate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub name: String,
    pub description: String,
    /// Manual-only skills are hidden from automatic model invocation
    #[serde(
        default,
        rename = "disable-model-invocation",
        alias = "manual-only"
    )]
    pub disable_model_invocation: bool,
}

impl MigrationManifest {
    /// Load and validate a manifest from disk
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(DevStudioError::ManifestNotFound {
                path: path.display().to_string(),
            });
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| crate::error::fs::read_failed(path, &e))?;

        Self::from_yaml(&content).map_err(|e| match e {
            DevStudioError::ManifestParseFailed { reason, .. } => {
                DevStudioError::ManifestParseFailed {
                    path: path.display().to_string(),
                    reason,
                }
            }
            other => other,
        })
    }

    /// Parse a manifest from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let manifest: Self = serde_yaml::from_str(content)?;
        manifest.validate()?;
        Ok(manifest)
    }

    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.skills {
            crate::sync::validate_item_name(&entry.name)?;
            if !seen.insert(entry.name.as_str()) {
                return Err(DevStudioError::ManifestParseFailed {
                    path: "unknown".to_string(),
                    reason: format!("duplicate skill name '{}'", entry.name),
                });
            }
        }
        Ok(())
    }

    pub fn manual_only_count(&self) -> usize {
        self.skills
            .iter()
            .filter(|e| e.disable_model_invocation)
            .count()
    }
}
