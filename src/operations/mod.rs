//! Operations module for installing, migrating and removing skills
//!
//! This module provides high-level operations that coordinate:
//! - InstallOperation: Discover, plan, confirm and apply the collection
//! - UninstallOperation: Remove installed items, legacy files, cache and backups
//! - MigrateOperation: Convert legacy command files into skills
//! - ListOperation: Show the source collection and what is installed
//!
//! The operations coordinate with:
//! - Synchronizer: per-item work (from sync module)
//! - UI: Confirmation and progress reporting (from ui module)

pub mod install;
pub mod list;
pub mod migrate;
pub mod uninstall;

pub use install::{InstallOperation, InstallOptions};
pub use list::{ListOperation, ListOptions};
pub use migrate::{MigrateOperation, MigrateOptions};
pub use uninstall::{UninstallOperation, UninstallOptions};
