//! Configuration for devstudio
//!
//! This module contains:
//! - [`SyncConfig`] - where the skill collection comes from and where it goes
//! - [`manifest`] - the YAML manifest consumed by `devstudio migrate`
//!
//! Every path the tool touches is derived from a `SyncConfig`, which is built
//! once per command from CLI flags, environment and platform defaults, and then
//! handed to the synchronizer.

pub mod manifest;

use std::path::{Path, PathBuf};

use crate::error::{DevStudioError, Result};

pub use manifest::{ManifestEntry, MigrationManifest};

/// Directory name under the user's home that holds Claude configuration
pub const CONFIG_DIR_NAME: &str = ".claude";

/// Default source directory name, relative to the current directory
pub const DEFAULT_SOURCE_DIR: &str = "skills";

/// Subdirectory of the config root that receives the collection
pub const DEFAULT_COLLECTION_KIND: &str = "skills";

/// File every item directory must contain to be installable
pub const DEFAULT_PRIMARY_FILE: &str = "SKILL.md";

/// Subdirectory of the config root holding the legacy flat-file format
pub const DEFAULT_LEGACY_KIND: &str = "commands";

/// Cache directory left behind by older releases
pub const DEFAULT_CACHE_DIR: &str = ".ccplugins_cache";

/// Backups directory left behind by older releases
pub const DEFAULT_BACKUPS_DIR: &str = ".ccplugins_backups";

/// Legacy command files that no longer have a skill counterpart
pub const RETIRED_LEGACY_FILES: &[&str] = &["cleanup-types.md", "context-cache.md"];

/// Paths and names used by the collection synchronizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    /// Directory whose immediate subdirectories are the items
    pub source_root: PathBuf,
    /// User configuration root (e.g. `~/.claude`)
    pub config_root: PathBuf,
    /// Subdirectory of `config_root` receiving the items
    pub collection_kind: String,
    /// File name that marks an item directory as complete
    pub primary_file: String,
    /// Subdirectory of `config_root` holding legacy `<name>.md` files
    pub legacy_kind: String,
    /// Legacy files removed on uninstall regardless of the collection
    pub retired_legacy_files: Vec<String>,
    /// Cache directory name under `config_root`
    pub cache_dir_name: String,
    /// Backups directory name under `config_root`
    pub backups_dir_name: String,
}

impl SyncConfig {
    /// Create a config for the given roots with default names
    pub fn new(source_root: impl Into<PathBuf>, config_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
            config_root: config_root.into(),
            collection_kind: DEFAULT_COLLECTION_KIND.to_string(),
            primary_file: DEFAULT_PRIMARY_FILE.to_string(),
            legacy_kind: DEFAULT_LEGACY_KIND.to_string(),
            retired_legacy_files: RETIRED_LEGACY_FILES
                .iter()
                .map(ToString::to_string)
                .collect(),
            cache_dir_name: DEFAULT_CACHE_DIR.to_string(),
            backups_dir_name: DEFAULT_BACKUPS_DIR.to_string(),
        }
    }

    /// Resolve a config from optional overrides.
    ///
    /// `source` falls back to `./skills`, `config_dir` to `~/.claude`. Both end
    /// up absolute so messages and later path joins never depend on the cwd.
    pub fn resolve(source: Option<&Path>, config_dir: Option<&Path>) -> Result<Self> {
        let source_root = match source {
            Some(path) => absolutize(path)?,
            None => absolutize(Path::new(DEFAULT_SOURCE_DIR))?,
        };

        let config_root = match config_dir {
            Some(path) => absolutize(path)?,
            None => default_config_root()?,
        };

        tracing::debug!(
            source = %source_root.display(),
            config = %config_root.display(),
            "resolved configuration"
        );

        Ok(Self::new(source_root, config_root))
    }

    /// Directory where items are materialized
    pub fn target_dir(&self) -> PathBuf {
        self.config_root.join(&self.collection_kind)
    }

    /// Directory holding the legacy flat-file format
    pub fn legacy_dir(&self) -> PathBuf {
        self.config_root.join(&self.legacy_kind)
    }

    /// Singular noun for one item, e.g. `skill` for `skills`
    pub fn item_noun(&self) -> &str {
        self.collection_kind
            .strip_suffix('s')
            .unwrap_or(&self.collection_kind)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.config_root.join(&self.cache_dir_name)
    }

    pub fn backups_dir(&self) -> PathBuf {
        self.config_root.join(&self.backups_dir_name)
    }
}

/// Default user configuration root: `<home>/.claude`
pub fn default_config_root() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(DevStudioError::ConfigDirUnavailable)?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Make `path` absolute, canonicalizing it when it already exists
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.exists() {
        return dunce::canonicalize(path).map_err(|e| crate::error::fs::read_failed(path, &e));
    }

    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let cwd = std::env::current_dir().map_err(|e| {
        crate::error::fs::io_error(format!("Failed to get current directory: {e}"))
    })?;
    Ok(cwd.join(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::create_temp_dir;

    #[test]
    fn test_new_uses_default_names() {
        let config = SyncConfig::new("/src/skills", "/home/u/.claude");
        assert_eq!(config.collection_kind, "skills");
        assert_eq!(config.primary_file, "SKILL.md");
        assert_eq!(config.target_dir(), PathBuf::from("/home/u/.claude/skills"));
        assert_eq!(config.legacy_dir(), PathBuf::from("/home/u/.claude/commands"));
        assert_eq!(
            config.cache_dir(),
            PathBuf::from("/home/u/.claude/.ccplugins_cache")
        );
        assert_eq!(
            config.backups_dir(),
            PathBuf::from("/home/u/.claude/.ccplugins_backups")
        );
        assert_eq!(
            config.retired_legacy_files,
            vec!["cleanup-types.md", "context-cache.md"]
        );
    }

    #[test]
    fn test_item_noun() {
        let mut config = SyncConfig::new("/src", "/cfg");
        assert_eq!(config.item_noun(), "skill");

        config.collection_kind = "agents".to_string();
        assert_eq!(config.item_noun(), "agent");

        config.collection_kind = "prompt".to_string();
        assert_eq!(config.item_noun(), "prompt");
    }

    #[test]
    fn test_resolve_with_explicit_paths() {
        let temp = create_temp_dir();
        let source = temp.path().join("skills");
        std::fs::create_dir_all(&source).unwrap();
        let config_dir = temp.path().join("claude-home");

        let config = SyncConfig::resolve(Some(&source), Some(&config_dir)).unwrap();

        assert_eq!(config.source_root, dunce::canonicalize(&source).unwrap());
        assert_eq!(config.config_root, config_dir);
    }

    #[test]
    fn test_absolutize_relative_missing_path() {
        let resolved = absolutize(Path::new("definitely-missing-dir-xyz")).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("definitely-missing-dir-xyz"));
    }

    #[test]
    #[cfg(unix)]
    fn test_absolutize_absolute_missing_path_is_unchanged() {
        let path = Path::new("/nonexistent/devstudio/config");
        assert_eq!(absolutize(path).unwrap(), path);
    }
}
