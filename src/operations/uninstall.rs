//! Uninstall operation
//!
//! Removes installed items and their legacy flat-file counterparts, then
//! offers to remove the cache and backups directories.

use std::path::{Path, PathBuf};

use crate::cli::UninstallArgs;
use crate::error::Result;
use crate::sync::remove::{remove_dir, remove_file};
use crate::sync::{RemoveOutcome, Synchronizer, validate_item_name};
use crate::ui::{
    Confirmer, ProgressReporter, Status, failed_line, print_banner, removed_line, status_line,
};

/// Configuration options for uninstall
#[derive(Debug, Clone, Default)]
pub struct UninstallOptions {
    /// Explicit item names; empty means every item in the source collection
    pub names: Vec<String>,
    pub yes: bool,
}

impl From<&UninstallArgs> for UninstallOptions {
    fn from(args: &UninstallArgs) -> Self {
        Self {
            names: args.names.clone(),
            yes: args.yes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UninstallReport {
    pub removed_items: Vec<String>,
    pub removed_legacy: Vec<String>,
    pub failed: Vec<(String, String)>,
    /// Auxiliary directories (cache, backups) that were deleted
    pub removed_dirs: Vec<PathBuf>,
}

impl UninstallReport {
    pub fn total(&self) -> usize {
        self.removed_items.len() + self.removed_legacy.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UninstallOutcome {
    /// Nothing installed for the selected names
    NothingFound,
    Declined,
    Completed(UninstallReport),
}

/// High-level uninstall operation
pub struct UninstallOperation<'a> {
    sync: &'a Synchronizer,
    options: UninstallOptions,
    confirmer: &'a mut dyn Confirmer,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> UninstallOperation<'a> {
    pub fn new(
        sync: &'a Synchronizer,
        options: UninstallOptions,
        confirmer: &'a mut dyn Confirmer,
        reporter: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            sync,
            options,
            confirmer,
            reporter,
        }
    }

    /// Execute uninstall operation
    pub fn execute(&mut self) -> Result<UninstallOutcome> {
        let config = self.sync.config();
        print_banner("DevStudio Uninstaller");

        let names = self.select_names()?;
        let items: Vec<&String> = names.iter().filter(|n| self.sync.is_installed(n)).collect();
        let legacy_dir = config.legacy_dir();
        let legacy: Vec<String> = legacy_file_names(&names, &config.retired_legacy_files)
            .into_iter()
            .filter(|file| legacy_dir.join(file).is_file())
            .collect();

        if items.is_empty() && legacy.is_empty() {
            println!(
                "{}",
                status_line(
                    Status::Info,
                    &format!("No {} or legacy commands found.", config.collection_kind)
                )
            );
            return Ok(UninstallOutcome::NothingFound);
        }

        if !items.is_empty() {
            println!(
                "{}",
                status_line(
                    Status::Found,
                    &format!("{} {} (new format)", items.len(), config.collection_kind)
                )
            );
        }
        if !legacy.is_empty() {
            println!(
                "{}",
                status_line(
                    Status::Found,
                    &format!("{} legacy command files (old format)", legacy.len())
                )
            );
        }

        if !self.confirmer.confirm(&format!(
            "Remove all {} and legacy commands?",
            config.collection_kind
        ))? {
            println!("{}", status_line(Status::Cancelled, "Uninstall cancelled."));
            return Ok(UninstallOutcome::Declined);
        }

        let noun = config.item_noun();
        let mut report = UninstallReport::default();
        self.reporter.start(items.len() + legacy.len());

        for name in items {
            match self.sync.remove(name) {
                RemoveOutcome::Removed => {
                    self.reporter
                        .item_done(&removed_line(&format!("Removed {noun}: {name}")));
                    report.removed_items.push(name.clone());
                }
                RemoveOutcome::Absent => {
                    tracing::debug!(item = %name, "item vanished before removal");
                    self.reporter.item_done(&format!("  {name} already removed"));
                }
                RemoveOutcome::Failed { reason } => {
                    self.reporter.item_done(&failed_line(&format!(
                        "Failed to remove {noun} {name}: {reason}"
                    )));
                    report.failed.push((name.clone(), reason));
                }
            }
        }

        for file in legacy {
            match remove_file(&legacy_dir, &file) {
                RemoveOutcome::Removed => {
                    self.reporter
                        .item_done(&removed_line(&format!("Removed legacy command: {file}")));
                    report.removed_legacy.push(file);
                }
                RemoveOutcome::Absent => {
                    self.reporter.item_done(&format!("  {file} already removed"));
                }
                RemoveOutcome::Failed { reason } => {
                    self.reporter
                        .item_done(&failed_line(&format!("Failed to remove {file}: {reason}")));
                    report.failed.push((file, reason));
                }
            }
        }

        self.reporter.finish();

        self.remove_aux_dirs(&mut report)?;

        println!(
            "\n{}",
            status_line(
                Status::Success,
                &format!(
                    "Uninstalled {} {} and {} legacy commands ({} total)",
                    report.removed_items.len(),
                    config.collection_kind,
                    report.removed_legacy.len(),
                    report.total()
                )
            )
        );
        if !report.failed.is_empty() {
            println!(
                "{}",
                status_line(
                    Status::Warning,
                    &format!("{} entries could not be removed.", report.failed.len())
                )
            );
        }

        Ok(UninstallOutcome::Completed(report))
    }

    /// Explicit names, else every discovered item name
    fn select_names(&self) -> Result<Vec<String>> {
        let names = if self.options.names.is_empty() {
            self.sync.discover()?.names()
        } else {
            self.options.names.clone()
        };

        let mut unique: Vec<String> = Vec::with_capacity(names.len());
        for name in names {
            validate_item_name(&name)?;
            if !unique.contains(&name) {
                unique.push(name);
            }
        }
        Ok(unique)
    }

    fn remove_aux_dirs(&mut self, report: &mut UninstallReport) -> Result<()> {
        let config = self.sync.config();
        let dirs: Vec<(PathBuf, &str)> = [
            (config.cache_dir(), "cache"),
            (config.backups_dir(), "backups"),
        ]
        .into_iter()
        .filter(|(path, _)| path.exists())
        .collect();
        if dirs.is_empty() {
            return Ok(());
        }

        println!();
        if !self.confirmer.confirm("Also remove cache and backups?")? {
            return Ok(());
        }

        for (path, label) in dirs {
            remove_aux_dir(&path, label, report);
        }
        Ok(())
    }
}

fn remove_aux_dir(path: &Path, label: &str, report: &mut UninstallReport) {
    match remove_dir(path) {
        RemoveOutcome::Removed => {
            println!("{}", removed_line(&format!("Removed {label} directory")));
            report.removed_dirs.push(path.to_path_buf());
        }
        RemoveOutcome::Absent => {}
        RemoveOutcome::Failed { reason } => {
            println!(
                "{}",
                failed_line(&format!("Failed to remove {label} directory: {reason}"))
            );
            report.failed.push((label.to_string(), reason));
        }
    }
}

/// `<name>.md` for every name, followed by the retired files
fn legacy_file_names(names: &[String], retired: &[String]) -> Vec<String> {
    let mut files: Vec<String> = names.iter().map(|name| format!("{name}.md")).collect();
    for file in retired {
        if !files.contains(file) {
            files.push(file.clone());
        }
    }
    files
}
