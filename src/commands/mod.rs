//! Command implementations for DevStudio CLI

pub mod completions;
pub mod helpers;
pub mod install;
pub mod list;
pub mod migrate;
pub mod uninstall;
pub mod version;
