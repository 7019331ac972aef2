//! Install operation
//!
//! Discover -> Plan -> Confirm overwrite -> Apply each item. A declined
//! confirmation ends the operation before anything on disk is touched.

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::sync::{ApplyOutcome, Synchronizer};
use crate::ui::{
    Confirmer, ProgressReporter, Status, added_line, failed_line, print_banner, skipped_line,
    status_line,
};

/// Configuration options for install
#[derive(Debug, Clone, Default)]
pub struct InstallOptions {
    pub yes: bool,
}

impl From<&InstallArgs> for InstallOptions {
    fn from(args: &InstallArgs) -> Self {
        Self { yes: args.yes }
    }
}

/// What happened to the collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
    /// Files copied across all installed items
    pub files: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The user declined to overwrite existing items
    Declined,
    Completed(InstallReport),
}

/// High-level install operation
pub struct InstallOperation<'a> {
    sync: &'a Synchronizer,
    confirmer: &'a mut dyn Confirmer,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> InstallOperation<'a> {
    pub fn new(
        sync: &'a Synchronizer,
        confirmer: &'a mut dyn Confirmer,
        reporter: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            sync,
            confirmer,
            reporter,
        }
    }

    /// Execute install operation
    pub fn execute(&mut self) -> Result<InstallOutcome> {
        let config = self.sync.config();
        print_banner("DevStudio Installer");

        let collection = self.sync.discover()?;
        if collection.is_empty() {
            return Err(crate::error::source::empty(
                &collection.root,
                config.collection_kind.clone(),
            ));
        }

        tracing::debug!(
            complete = collection.complete().count(),
            incomplete = collection.incomplete().count(),
            "discovered collection"
        );

        let target_dir = config.target_dir();
        println!(
            "{}",
            status_line(
                Status::Ok,
                &format!("Target directory: {}", target_dir.display())
            )
        );

        let plan = self.sync.plan(&collection);
        if !self.sync.confirm(&plan, self.confirmer)? {
            println!(
                "{}",
                status_line(Status::Cancelled, "Installation cancelled.")
            );
            println!(
                "Tip: Run 'devstudio uninstall' first to remove old {}.",
                config.collection_kind
            );
            return Ok(InstallOutcome::Declined);
        }

        println!(
            "\n{}",
            status_line(
                Status::Install,
                &format!("Installing {} {}:", collection.len(), config.collection_kind)
            )
        );

        let mut report = InstallReport::default();
        self.reporter.start(collection.len());

        for item in &collection {
            if !item.complete {
                self.reporter.item_done(&skipped_line(&format!(
                    "Skipping {} (no {})",
                    item.name, config.primary_file
                )));
                report.skipped.push(item.name.clone());
                continue;
            }

            match self.sync.apply(item) {
                ApplyOutcome::Installed { files } => {
                    self.reporter.item_done(&added_line(&item.name));
                    report.installed.push(item.name.clone());
                    report.files += files;
                }
                ApplyOutcome::Skipped { reason } => {
                    self.reporter
                        .item_done(&skipped_line(&format!("Skipping {} ({reason})", item.name)));
                    report.skipped.push(item.name.clone());
                }
                ApplyOutcome::Failed { reason } => {
                    self.reporter.item_done(&failed_line(&format!(
                        "Failed to install {}: {reason}",
                        item.name
                    )));
                    report.failed.push((item.name.clone(), reason));
                }
            }
        }

        self.reporter.finish();
        print_summary(&report, &config.collection_kind);

        Ok(InstallOutcome::Completed(report))
    }
}

fn print_summary(report: &InstallReport, kind: &str) {
    println!(
        "\n{}",
        status_line(
            Status::Success,
            &format!(
                "Installation complete! Installed {} {kind}.",
                report.installed.len()
            )
        )
    );
    if !report.failed.is_empty() {
        println!(
            "{}",
            status_line(
                Status::Warning,
                &format!("{} {kind} failed to install.", report.failed.len())
            )
        );
    }
}
