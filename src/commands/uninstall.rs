//! Uninstall command CLI wrapper
//!
//! This module provides the CLI interface for uninstall operations,
//! delegating all business logic to operations/uninstall.rs.

use crate::cli::UninstallArgs;
use crate::error::Result;
use crate::operations::{UninstallOperation, UninstallOptions};
use crate::ui::reporter_for_stdout;

use super::helpers::{GlobalPaths, confirmer};

/// Run uninstall command
pub fn run(paths: &GlobalPaths, args: UninstallArgs) -> Result<()> {
    let sync = paths.synchronizer()?;
    let options = UninstallOptions::from(&args);
    let mut confirmer = confirmer(options.yes);
    let mut reporter = reporter_for_stdout();

    let outcome =
        UninstallOperation::new(&sync, options, confirmer.as_mut(), reporter.as_mut()).execute()?;
    tracing::debug!(?outcome, "uninstall finished");
    Ok(())
}
