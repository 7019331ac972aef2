//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - uninstall: Uninstall command arguments
//! - migrate: Migrate command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod list;
pub mod migrate;
pub mod uninstall;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use list::ListArgs;
pub use migrate::MigrateArgs;
pub use uninstall::UninstallArgs;

/// DevStudio - skill installer for Claude
///
/// Install, migrate and remove a collection of skills in the user's Claude configuration directory.
#[derive(Parser, Debug)]
#[command(
    name = "devstudio",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install and manage DevStudio skills for Claude",
    long_about = "DevStudio installs a collection of skills (directories holding a SKILL.md and \
                  supporting files) into ~/.claude/skills, migrates legacy command files into \
                  skills, and removes both formats again.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  devstudio install                      \x1b[90m# Install ./skills into ~/.claude/skills\x1b[0m\n   \
                  devstudio install -y                   \x1b[90m# Overwrite existing skills without asking\x1b[0m\n   \
                  devstudio uninstall                    \x1b[90m# Remove skills and legacy commands\x1b[0m\n   \
                  devstudio migrate                      \x1b[90m# Convert ./commands into ./skills\x1b[0m\n   \
                  devstudio list --json                  \x1b[90m# Show skills and install state\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Directory containing the skill collection (defaults to ./skills)
    #[arg(long, short = 's', global = true, env = "DEVSTUDIO_SOURCE")]
    pub source: Option<PathBuf>,

    /// Claude configuration directory (defaults to ~/.claude)
    #[arg(long = "config-dir", short = 'c', global = true, env = "DEVSTUDIO_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install skills into the configuration directory
    Install(InstallArgs),

    /// Remove installed skills and legacy command files
    Uninstall(UninstallArgs),

    /// Convert legacy command files into skills
    Migrate(MigrateArgs),

    /// List skills in the source collection
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Operation name used in cancellation messages
    pub fn label(&self) -> &'static str {
        match self {
            Commands::Install(_) => "Installation",
            Commands::Uninstall(_) => "Uninstall",
            Commands::Migrate(_) => "Migration",
            Commands::List(_) => "List",
            Commands::Version => "Version",
            Commands::Completions(_) => "Completions",
        }
    }
}
