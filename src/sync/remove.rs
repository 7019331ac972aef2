//! Per-item removal

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Result of removing one item or file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    Absent,
    Failed { reason: String },
}

/// Recursively delete `target_dir/<name>`.
///
/// Anything at that path that is not a directory is reported as a failure
/// and left alone.
pub fn remove_item(target_dir: &Path, name: &str) -> RemoveOutcome {
    let path = target_dir.join(name);
    match fs::symlink_metadata(&path) {
        Err(e) if e.kind() == ErrorKind::NotFound => RemoveOutcome::Absent,
        Err(e) => failed(&path, &e.to_string()),
        Ok(_) if !super::is_item_dir(&path) => failed(&path, "not a directory"),
        Ok(_) => match fs::remove_dir_all(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed item");
                RemoveOutcome::Removed
            }
            Err(e) => failed(&path, &e.to_string()),
        },
    }
}

/// Delete a single legacy file `dir/<file_name>`
pub fn remove_file(dir: &Path, file_name: &str) -> RemoveOutcome {
    let path = dir.join(file_name);
    match fs::symlink_metadata(&path) {
        Err(e) if e.kind() == ErrorKind::NotFound => RemoveOutcome::Absent,
        Err(e) => failed(&path, &e.to_string()),
        Ok(meta) if meta.is_dir() => failed(&path, "is a directory"),
        Ok(_) => match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "removed file");
                RemoveOutcome::Removed
            }
            Err(e) => failed(&path, &e.to_string()),
        },
    }
}

/// Recursively delete an auxiliary directory (cache, backups)
pub fn remove_dir(path: &Path) -> RemoveOutcome {
    if !path.exists() {
        return RemoveOutcome::Absent;
    }
    match fs::remove_dir_all(path) {
        Ok(()) => RemoveOutcome::Removed,
        Err(e) => failed(path, &e.to_string()),
    }
}

fn failed(path: &Path, reason: &str) -> RemoveOutcome {
    tracing::warn!(path = %path.display(), %reason, "removal failed");
    RemoveOutcome::Failed {
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_temp_dir, create_test_files};

    #[test]
    fn test_remove_item_recursively() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("a/SKILL.md", "x"), ("a/nested/deep.txt", "y")]);

        assert_eq!(remove_item(temp.path(), "a"), RemoveOutcome::Removed);
        assert!(!temp.path().join("a").exists());
    }

    #[test]
    fn test_remove_item_absent() {
        let temp = create_temp_dir();
        assert_eq!(remove_item(temp.path(), "ghost"), RemoveOutcome::Absent);
    }

    #[test]
    fn test_remove_item_missing_target_dir_is_absent() {
        let temp = create_temp_dir();
        assert_eq!(
            remove_item(&temp.path().join("no-such-dir"), "a"),
            RemoveOutcome::Absent
        );
    }

    #[test]
    fn test_remove_item_refuses_plain_file() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("a", "just a file")]);

        let outcome = remove_item(temp.path(), "a");

        assert_eq!(
            outcome,
            RemoveOutcome::Failed {
                reason: "not a directory".to_string()
            }
        );
        assert!(temp.path().join("a").is_file());
    }

    #[test]
    fn test_remove_file() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("commit.md", "x")]);

        assert_eq!(remove_file(temp.path(), "commit.md"), RemoveOutcome::Removed);
        assert_eq!(remove_file(temp.path(), "commit.md"), RemoveOutcome::Absent);
    }

    #[test]
    fn test_remove_file_refuses_directory() {
        let temp = create_temp_dir();
        std::fs::create_dir_all(temp.path().join("odd.md")).unwrap();

        assert!(matches!(
            remove_file(temp.path(), "odd.md"),
            RemoveOutcome::Failed { .. }
        ));
    }

    #[test]
    fn test_remove_dir() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("cache/entry.json", "{}")]);

        assert_eq!(remove_dir(&temp.path().join("cache")), RemoveOutcome::Removed);
        assert_eq!(remove_dir(&temp.path().join("cache")), RemoveOutcome::Absent);
    }
}
