//! Install planning and overwrite confirmation

use std::path::Path;

use crate::error::Result;
use crate::ui::{Confirmer, Status, status_line};

use super::discovery::{Collection, Item};

/// How many conflicting names are listed before summarizing the rest
pub const PREVIEW_LIMIT: usize = 10;

/// Partition of a collection against the target directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    /// Complete items with no counterpart in the target
    pub to_install: Vec<Item>,
    /// Complete items whose target subdirectory already exists
    pub already_present: Vec<Item>,
    /// Items missing their primary file; never installed
    pub incomplete: Vec<Item>,
}

impl Plan {
    /// Items to apply when overwriting is allowed, in discovery order
    #[cfg(test)]
    pub fn installable(&self) -> Vec<&Item> {
        let mut items: Vec<&Item> = self
            .to_install
            .iter()
            .chain(self.already_present.iter())
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    pub fn has_conflicts(&self) -> bool {
        !self.already_present.is_empty()
    }

    pub fn conflict_names(&self) -> Vec<String> {
        self.already_present.iter().map(|i| i.name.clone()).collect()
    }
}

/// Partition `collection` against `target_dir`.
///
/// An item is "already present" only when its target path is a real
/// directory; anything else at that path, symlinks included, is left for
/// `apply` to report.
pub fn plan(collection: &Collection, target_dir: &Path) -> Plan {
    let mut plan = Plan::default();

    for item in collection {
        if !item.complete {
            plan.incomplete.push(item.clone());
        } else if super::is_item_dir(&target_dir.join(&item.name)) {
            plan.already_present.push(item.clone());
        } else {
            plan.to_install.push(item.clone());
        }
    }

    tracing::debug!(
        to_install = plan.to_install.len(),
        already_present = plan.already_present.len(),
        incomplete = plan.incomplete.len(),
        "planned install"
    );

    plan
}

/// Lines listing `names`, capped at `limit` with a remainder count
pub fn preview_lines(names: &[String], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = names
        .iter()
        .take(limit)
        .map(|name| format!("  ! {name}"))
        .collect();
    if names.len() > limit {
        lines.push(format!("  ... and {} more", names.len() - limit));
    }
    lines
}

/// Ask before overwriting `already_present`.
///
/// Returns `true` without prompting when nothing would be overwritten.
pub fn confirm_overwrite(
    already_present: &[String],
    kind: &str,
    confirmer: &mut dyn Confirmer,
) -> Result<bool> {
    if already_present.is_empty() {
        return Ok(true);
    }

    println!(
        "\n{}",
        status_line(
            Status::Warning,
            &format!("Found {} existing {kind}:", already_present.len())
        )
    );
    for line in preview_lines(already_present, PREVIEW_LIMIT) {
        println!("{line}");
    }

    confirmer.confirm(&format!("Overwrite existing {kind}?"))
}
