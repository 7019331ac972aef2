//! Migrate command CLI wrapper

use crate::cli::MigrateArgs;
use crate::config::absolutize;
use crate::error::Result;
use crate::operations::{MigrateOperation, MigrateOptions};
use crate::ui::reporter_for_stdout;

use super::helpers::GlobalPaths;

/// Run migrate command
pub fn run(paths: &GlobalPaths, args: MigrateArgs) -> Result<()> {
    let config = paths.config()?;
    let options = MigrateOptions {
        manifest: absolutize(&args.manifest)?,
        commands_dir: absolutize(&args.commands)?,
    };
    let mut reporter = reporter_for_stdout();

    let report = MigrateOperation::new(&config, options, reporter.as_mut()).execute()?;
    tracing::debug!(
        migrated = report.migrated.len(),
        total = report.total,
        "migration finished"
    );
    Ok(())
}
