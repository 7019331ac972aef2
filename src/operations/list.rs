//! List operation module
//!
//! Reports every item of the source collection together with whether it is
//! complete and whether it is currently installed.

use console::Style;
use serde::Serialize;

use crate::cli::ListArgs;
use crate::error::Result;
use crate::sync::{Collection, Synchronizer};

/// Configuration options for list
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub json: bool,
}

impl From<&ListArgs> for ListOptions {
    fn from(args: &ListArgs) -> Self {
        Self { json: args.json }
    }
}

/// Status of one source item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemStatus {
    pub name: String,
    pub complete: bool,
    pub installed: bool,
    pub files: usize,
}

/// High-level list operation
pub struct ListOperation<'a> {
    sync: &'a Synchronizer,
}

impl<'a> ListOperation<'a> {
    pub fn new(sync: &'a Synchronizer) -> Self {
        Self { sync }
    }

    /// Collect the status of every discovered item
    pub fn statuses(&self) -> Result<Vec<ItemStatus>> {
        let collection = self.sync.discover()?;
        Ok(item_statuses(self.sync, &collection))
    }

    /// Execute list operation
    pub fn execute(&self, options: &ListOptions) -> Result<()> {
        let statuses = self.statuses()?;

        if options.json {
            println!("{}", serde_json::to_string_pretty(&statuses)?);
            return Ok(());
        }

        print_table(&statuses, &self.sync.config().collection_kind);
        Ok(())
    }
}

fn item_statuses(sync: &Synchronizer, collection: &Collection) -> Vec<ItemStatus> {
    collection
        .iter()
        .map(|item| ItemStatus {
            name: item.name.clone(),
            complete: item.complete,
            installed: sync.is_installed(&item.name),
            files: item.files.len(),
        })
        .collect()
}

fn print_table(statuses: &[ItemStatus], kind: &str) {
    if statuses.is_empty() {
        println!("No {kind} found.");
        return;
    }

    let width = statuses.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let installed = Style::new().green();
    let missing = Style::new().dim();
    let incomplete = Style::new().yellow();

    println!("Available {kind} ({}):", statuses.len());
    println!();
    for status in statuses {
        let state = if !status.complete {
            incomplete.apply_to("incomplete").to_string()
        } else if status.installed {
            installed.apply_to("installed").to_string()
        } else {
            missing.apply_to("not installed").to_string()
        };
        println!(
            "  {:<width$}  {state}  ({} files)",
            status.name, status.files
        );
    }

    println!();
    println!("{}", summary_line(statuses));
}

/// `X installed, Y not installed, Z incomplete`
///
/// Incomplete items are counted once, even when a copy is installed.
fn summary_line(statuses: &[ItemStatus]) -> String {
    let installed = statuses
        .iter()
        .filter(|s| s.complete && s.installed)
        .count();
    let not_installed = statuses
        .iter()
        .filter(|s| s.complete && !s.installed)
        .count();
    let incomplete = statuses.iter().filter(|s| !s.complete).count();
    format!("{installed} installed, {not_installed} not installed, {incomplete} incomplete")
}
