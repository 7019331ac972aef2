//! Per-item installation
//!
//! An item is copied into a staging directory next to its final location and
//! then renamed into place, so a failed copy never leaves a half-written item
//! in the target directory.

use std::fs;
use std::path::{Path, PathBuf};

use super::discovery::Item;

/// Prefix of staging directories created inside the target directory
const STAGING_PREFIX: &str = ".devstudio-staging-";

/// Prefix of the directory holding a replaced item until the swap completes
const RETIRED_PREFIX: &str = ".devstudio-retired-";

/// Result of applying one item
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    Installed { files: usize },
    Skipped { reason: String },
    Failed { reason: String },
}

/// Install `item` into `target_dir/<item.name>`, replacing any existing copy.
pub fn apply_item(item: &Item, target_dir: &Path, primary_file: &str) -> ApplyOutcome {
    if !item.source_dir.join(primary_file).is_file() {
        return ApplyOutcome::Skipped {
            reason: format!("no {primary_file}"),
        };
    }

    match install_staged(item, target_dir) {
        Ok(files) => {
            tracing::debug!(item = %item.name, files, "installed item");
            ApplyOutcome::Installed { files }
        }
        Err(reason) => {
            tracing::warn!(item = %item.name, %reason, "failed to install item");
            ApplyOutcome::Failed { reason }
        }
    }
}

fn install_staged(item: &Item, target_dir: &Path) -> std::result::Result<usize, String> {
    let dest = target_dir.join(&item.name);

    let occupied = fs::symlink_metadata(&dest).is_ok();
    if occupied && !super::is_item_dir(&dest) {
        return Err(format!("{} exists and is not a directory", dest.display()));
    }

    fs::create_dir_all(target_dir)
        .map_err(|e| format!("cannot create {}: {e}", target_dir.display()))?;

    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(target_dir)
        .map_err(|e| format!("cannot create staging directory: {e}"))?;

    let mut copied = 0;
    for file in &item.files {
        let src = item.source_dir.join(file);
        if !src.is_file() {
            continue;
        }
        copy_with_metadata(&src, &staging.path().join(file))
            .map_err(|e| format!("{file}: {e}"))?;
        copied += 1;
    }

    // Staging directories are created private; give the item the source's mode
    if let Ok(meta) = fs::metadata(&item.source_dir) {
        if let Err(e) = fs::set_permissions(staging.path(), meta.permissions()) {
            tracing::debug!(item = %item.name, error = %e, "could not preserve permissions");
        }
    }

    swap_into_place(staging.path(), &dest, target_dir, occupied)?;
    Ok(copied)
}

/// Rename `staged` to `dest`, moving an existing `dest` aside first and
/// restoring it if the final rename fails.
fn swap_into_place(
    staged: &Path,
    dest: &Path,
    target_dir: &Path,
    occupied: bool,
) -> std::result::Result<(), String> {
    if !occupied {
        return fs::rename(staged, dest).map_err(|e| format!("cannot move item into place: {e}"));
    }

    let retired = tempfile::Builder::new()
        .prefix(RETIRED_PREFIX)
        .tempdir_in(target_dir)
        .map_err(|e| format!("cannot create retired directory: {e}"))?;
    let old: PathBuf = retired.path().join("previous");

    fs::rename(dest, &old).map_err(|e| format!("cannot replace existing item: {e}"))?;

    if let Err(e) = fs::rename(staged, dest) {
        if let Err(restore) = fs::rename(&old, dest) {
            tracing::error!(
                dest = %dest.display(),
                error = %restore,
                "failed to restore previous item"
            );
        }
        return Err(format!("cannot move item into place: {e}"));
    }

    // `retired` removes the previous copy on drop
    Ok(())
}

/// Copy a file, carrying over permissions and timestamps where the platform allows
pub fn copy_with_metadata(src: &Path, dst: &Path) -> std::io::Result<()> {
    fs::copy(src, dst)?;

    let meta = fs::metadata(src)?;
    let mut times = fs::FileTimes::new();
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }

    let applied = fs::File::options()
        .write(true)
        .open(dst)
        .or_else(|_| fs::File::open(dst))
        .and_then(|file| file.set_times(times));
    if let Err(e) = applied {
        tracing::debug!(path = %dst.display(), error = %e, "could not preserve timestamps");
    }

    Ok(())
}
