//! Collection discovery
//!
//! An item is an immediate subdirectory of the source root. Directories that
//! lack the primary file are kept in the collection but marked incomplete so
//! callers can report them instead of silently dropping them.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

/// One installable unit: a named directory of files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Directory in the source tree
    pub source_dir: PathBuf,
    /// Regular files directly inside `source_dir`, sorted by name
    pub files: Vec<String>,
    /// Whether the primary file is present
    pub complete: bool,
}

impl Item {
    /// Read an item from its source directory
    pub fn from_dir(dir: &Path, name: String, primary_file: &str) -> Self {
        let files = list_regular_files(dir);
        let complete = files.iter().any(|f| f == primary_file);
        Self {
            name,
            source_dir: dir.to_path_buf(),
            files,
            complete,
        }
    }
}

/// Items discovered under a source root, in file-name order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub root: PathBuf,
    pub items: Vec<Item>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.name.clone()).collect()
    }

    pub fn complete(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.complete)
    }

    pub fn incomplete(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| !i.complete)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Enumerate the items under `root`.
///
/// Fails with `SourceNotFound` when `root` is not a directory. Entries that
/// cannot be read are skipped with a warning.
pub fn discover(root: &Path, primary_file: &str) -> Result<Collection> {
    if !root.is_dir() {
        return Err(crate::error::source::not_found(root));
    }

    let mut items = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        // Follows symlinked item directories
        if !entry.path().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str().map(ToString::to_string) else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 directory name");
            continue;
        };

        let item = Item::from_dir(entry.path(), name, primary_file);
        tracing::debug!(
            item = %item.name,
            files = item.files.len(),
            complete = item.complete,
            "discovered item"
        );
        items.push(item);
    }

    Ok(Collection {
        root: root.to_path_buf(),
        items,
    })
}

/// Names of the regular files directly inside `dir`, sorted
pub fn list_regular_files(dir: &Path) -> Vec<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| {
            if entry.path().is_file() {
                true
            } else {
                tracing::debug!(path = %entry.path().display(), "ignoring non-file entry");
                false
            }
        })
        .filter_map(|entry| entry.file_name().to_str().map(ToString::to_string))
        .collect()
}
