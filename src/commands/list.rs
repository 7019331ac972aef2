//! List command implementation
//!
//! Lists the skills of the source collection with their install state.

use crate::cli::ListArgs;
use crate::error::Result;
use crate::operations::{ListOperation, ListOptions};

use super::helpers::GlobalPaths;

/// Run list command
pub fn run(paths: &GlobalPaths, args: ListArgs) -> Result<()> {
    let sync = paths.synchronizer()?;
    ListOperation::new(&sync).execute(&ListOptions::from(&args))
}
