//! Collection synchronizer
//!
//! Moves a named collection of items between a source tree and the user's
//! configuration directory:
//!
//! - [`discovery`]: enumerate items under the source root
//! - [`plan`]: partition items against the target and confirm overwrites
//! - [`apply`]: install one item (staged, then swapped into place)
//! - [`remove`]: delete one item or legacy file
//!
//! Items are independent units. Every per-item operation returns an outcome
//! value instead of an error so one failure never aborts a batch.

pub mod apply;
pub mod discovery;
pub mod plan;
pub mod remove;

use std::path::Component;
use std::path::Path;

use crate::config::SyncConfig;
use crate::error::Result;
use crate::ui::Confirmer;

pub use apply::ApplyOutcome;
pub use discovery::{Collection, Item};
pub use plan::Plan;
pub use remove::RemoveOutcome;

/// Synchronizer bound to one configuration
#[derive(Debug, Clone)]
pub struct Synchronizer {
    config: SyncConfig,
}

impl Synchronizer {
    pub fn new(config: SyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Enumerate the source collection
    pub fn discover(&self) -> Result<Collection> {
        discovery::discover(&self.config.source_root, &self.config.primary_file)
    }

    /// Partition `collection` against the target directory
    pub fn plan(&self, collection: &Collection) -> Plan {
        plan::plan(collection, &self.config.target_dir())
    }

    /// Ask before overwriting the plan's already-present items
    pub fn confirm(&self, plan: &Plan, confirmer: &mut dyn Confirmer) -> Result<bool> {
        if !plan.has_conflicts() {
            return Ok(true);
        }
        plan::confirm_overwrite(
            &plan.conflict_names(),
            &self.config.collection_kind,
            confirmer,
        )
    }

    /// Install one item
    pub fn apply(&self, item: &Item) -> ApplyOutcome {
        apply::apply_item(item, &self.config.target_dir(), &self.config.primary_file)
    }

    /// Remove one installed item by name
    pub fn remove(&self, name: &str) -> RemoveOutcome {
        remove::remove_item(&self.config.target_dir(), name)
    }

    /// Whether the named item is present in the target directory
    pub fn is_installed(&self, name: &str) -> bool {
        is_item_dir(&self.config.target_dir().join(name))
    }
}

/// Whether `path` is a directory itself, not a symlink to one.
///
/// Plan, apply, removal and `is_installed` all use this rule, so an entry that
/// is not counted as installed is never overwritten or removed either.
pub fn is_item_dir(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok_and(|meta| meta.is_dir())
}

/// Reject names that would escape the target directory
pub fn validate_item_name(name: &str) -> Result<()> {
    let mut components = Path::new(name).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if name.is_empty() || !single_normal || name.contains(['/', '\\']) {
        return Err(crate::error::source::invalid_name(name));
    }
    Ok(())
}
