//! Install command CLI wrapper
//!
//! This module provides the CLI interface for install operations,
//! delegating all business logic to operations/install.rs.

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::operations::{InstallOperation, InstallOptions};
use crate::ui::reporter_for_stdout;

use super::helpers::{GlobalPaths, confirmer};

/// Run install command
pub fn run(paths: &GlobalPaths, args: InstallArgs) -> Result<()> {
    let sync = paths.synchronizer()?;
    let options = InstallOptions::from(&args);
    let mut confirmer = confirmer(options.yes);
    let mut reporter = reporter_for_stdout();

    let outcome = InstallOperation::new(&sync, confirmer.as_mut(), reporter.as_mut()).execute()?;
    tracing::debug!(?outcome, "install finished");
    Ok(())
}
