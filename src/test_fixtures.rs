//! Test fixtures and utilities for reducing test setup duplication.
//!
//! Helpers to build a throwaway source collection and user config root
//! with a single call.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_fixtures::{create_skill_env, create_test_files};
//!
//! #[test]
//! fn my_test() {
//!     let env = create_skill_env();
//!     create_test_files(&env.temp, &[("skills/a/SKILL.md", "# A")]);
//!     let config = env.config();
//! }
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::config::SyncConfig;

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// A temp directory holding a source collection (`skills/`) and a config
/// root (`home/.claude/`). Neither directory is created up front.
pub struct SkillEnv {
    pub temp: TempDir,
    pub source_root: PathBuf,
    pub config_root: PathBuf,
}

impl SkillEnv {
    /// Config pointing at this environment's roots
    #[must_use]
    pub fn config(&self) -> SyncConfig {
        SyncConfig::new(&self.source_root, &self.config_root)
    }

    /// Create an item directory in the source with the given files
    ///
    /// # Panics
    ///
    /// Panics if any file cannot be created.
    pub fn add_item(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let dir = self.source_root.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create item directory");
        for (file, content) in files {
            std::fs::write(dir.join(file), content).expect("Failed to write item file");
        }
        dir
    }

    /// Path of an item inside the target directory
    #[must_use]
    pub fn installed(&self, name: &str) -> PathBuf {
        self.config().target_dir().join(name)
    }
}

/// Create an empty skill environment.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_skill_env() -> SkillEnv {
    let temp = create_temp_dir();
    let source_root = temp.path().join("skills");
    let config_root = temp.path().join("home").join(".claude");
    SkillEnv {
        temp,
        source_root,
        config_root,
    }
}

/// Create test files in a directory.
///
/// Takes a list of (path, content) tuples and creates those files.
/// Paths are relative to the provided base directory.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Relative path -> contents of every file under `root` (empty when missing).
/// Directories map to an empty vector so empty directories are visible too.
///
/// # Panics
///
/// Panics if a file cannot be read.
#[must_use]
pub fn snapshot_tree(root: &Path) -> BTreeMap<String, Vec<u8>> {
    let mut tree = BTreeMap::new();
    if !root.exists() {
        return tree;
    }
    for entry in walkdir::WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry.expect("Failed to walk directory");
        let rel = entry
            .path()
            .strip_prefix(root)
            .expect("walked path outside root")
            .to_string_lossy()
            .replace('\\', "/");
        let content = if entry.file_type().is_file() {
            std::fs::read(entry.path()).expect("Failed to read file")
        } else {
            Vec::new()
        };
        tree.insert(rel, content);
    }
    tree
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
    }

    #[test]
    fn test_skill_env_add_item() {
        let env = create_skill_env();
        let dir = env.add_item("a", &[("SKILL.md", "# A"), ("extra.txt", "x")]);
        assert!(dir.join("SKILL.md").is_file());
        assert!(dir.join("extra.txt").is_file());
        assert_eq!(env.installed("a"), env.config_root.join("skills").join("a"));
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("commands/test.md", "# Test Command")]);
        let content =
            std::fs::read_to_string(temp.path().join("commands/test.md")).expect("Failed to read");
        assert_eq!(content, "# Test Command");
    }

    #[test]
    fn test_snapshot_tree() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("a/one.txt", "1"), ("b/two.txt", "2")]);
        let tree = snapshot_tree(temp.path());
        assert_eq!(
            tree.keys().cloned().collect::<Vec<_>>(),
            vec!["a", "a/one.txt", "b", "b/two.txt"]
        );
        assert_eq!(tree["b/two.txt"], b"2");
        assert!(snapshot_tree(&temp.path().join("missing")).is_empty());
    }
}
