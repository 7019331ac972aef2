//! Migrate operation
//!
//! Converts legacy flat command files (`<commands>/<name>.md`) into skill
//! directories (`<skills>/<name>/SKILL.md`) with a YAML frontmatter header.
//! The manifest lists which commands to migrate and how to describe them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{ManifestEntry, MigrationManifest, SyncConfig};
use crate::error::Result;
use crate::frontmatter::migrate_document;
use crate::ui::{
    ProgressReporter, Status, added_line, failed_line, print_banner, skipped_line, status_line,
};

/// Configuration options for migrate
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    pub manifest: PathBuf,
    pub commands_dir: PathBuf,
}

/// Result of migrating one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrateOutcome {
    Migrated { path: PathBuf },
    Skipped { reason: String },
    Failed { reason: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub total: usize,
    pub migrated: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, String)>,
    pub manual_only: usize,
    pub auto_invokable: usize,
}

impl MigrationReport {
    pub fn is_complete(&self) -> bool {
        self.migrated.len() == self.total
    }
}

/// High-level migrate operation
pub struct MigrateOperation<'a> {
    config: &'a SyncConfig,
    options: MigrateOptions,
    reporter: &'a mut dyn ProgressReporter,
}

impl<'a> MigrateOperation<'a> {
    pub fn new(
        config: &'a SyncConfig,
        options: MigrateOptions,
        reporter: &'a mut dyn ProgressReporter,
    ) -> Self {
        Self {
            config,
            options,
            reporter,
        }
    }

    /// Execute migrate operation
    pub fn execute(&mut self) -> Result<MigrationReport> {
        print_banner("DevStudio Skill Migration");

        let manifest = MigrationManifest::from_file(&self.options.manifest)?;
        tracing::debug!(
            entries = manifest.skills.len(),
            manual_only = manifest.manual_only_count(),
            "loaded migration manifest"
        );
        let skills_dir = &self.config.source_root;
        println!(
            "{}",
            status_line(
                Status::Ok,
                &format!(
                    "Migrating {} commands from {} into {}",
                    manifest.skills.len(),
                    self.options.commands_dir.display(),
                    skills_dir.display()
                )
            )
        );

        let mut report = MigrationReport {
            total: manifest.skills.len(),
            ..MigrationReport::default()
        };
        self.reporter.start(manifest.skills.len());

        for entry in &manifest.skills {
            match migrate_entry(
                entry,
                &self.options.commands_dir,
                skills_dir,
                &self.config.primary_file,
            ) {
                MigrateOutcome::Migrated { path } => {
                    tracing::debug!(path = %path.display(), "wrote skill");
                    let mode = if entry.disable_model_invocation {
                        report.manual_only += 1;
                        "manual-only"
                    } else {
                        report.auto_invokable += 1;
                        "auto"
                    };
                    self.reporter
                        .item_done(&added_line(&format!("{} ({mode})", entry.name)));
                    report.migrated.push(entry.name.clone());
                }
                MigrateOutcome::Skipped { reason } => {
                    self.reporter
                        .item_done(&skipped_line(&format!("Skipping {}: {reason}", entry.name)));
                    report.skipped.push(entry.name.clone());
                }
                MigrateOutcome::Failed { reason } => {
                    self.reporter.item_done(&failed_line(&format!(
                        "Failed to migrate {}: {reason}",
                        entry.name
                    )));
                    report.failed.push((entry.name.clone(), reason));
                }
            }
        }

        self.reporter.finish();
        print_summary(&report);

        Ok(report)
    }
}

/// Migrate one manifest entry into `skills_dir/<name>/<primary_file>`
pub fn migrate_entry(
    entry: &ManifestEntry,
    commands_dir: &Path,
    skills_dir: &Path,
    primary_file: &str,
) -> MigrateOutcome {
    let source = commands_dir.join(format!("{}.md", entry.name));
    let content = match fs::read_to_string(&source) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %source.display(), "command file not found");
            return MigrateOutcome::Skipped {
                reason: format!("{} not found", source.display()),
            };
        }
        Err(e) => {
            return MigrateOutcome::Failed {
                reason: format!("cannot read {}: {e}", source.display()),
            };
        }
    };

    let document = migrate_document(
        &content,
        &entry.name,
        &entry.description,
        entry.disable_model_invocation,
    );

    let skill_dir = skills_dir.join(&entry.name);
    let path = skill_dir.join(primary_file);
    let written = fs::create_dir_all(&skill_dir).and_then(|()| fs::write(&path, document));
    match written {
        Ok(()) => MigrateOutcome::Migrated { path },
        Err(e) => MigrateOutcome::Failed {
            reason: format!("cannot write {}: {e}", path.display()),
        },
    }
}

fn print_summary(report: &MigrationReport) {
    println!("\n{}", "=".repeat(60));
    println!("{}", status_line(Status::Success, "Migration complete!"));
    println!(
        "   Total skills migrated: {}/{}",
        report.migrated.len(),
        report.total
    );
    println!("   Manual-only: {}", report.manual_only);
    println!("   Auto-invokable: {}", report.auto_invokable);
    println!("{}", "=".repeat(60));

    if report.is_complete() {
        println!("\n{}", status_line(Status::Ok, "All skills successfully migrated!"));
    } else {
        println!(
            "\n{}",
            status_line(
                Status::Warning,
                &format!(
                    "{} skills were not migrated",
                    report.total - report.migrated.len()
                )
            )
        );
    }
}
