//! DevStudio - skill installer for Claude
//!
//! Installs a collection of skills into the user's Claude configuration
//! directory, migrates legacy command files into skills, and removes both.

use clap::Parser;

mod cli;
mod commands;
mod config;
mod error;
mod frontmatter;
mod logging;
mod operations;
mod sync;
#[cfg(test)]
mod test_fixtures;
mod ui;

use cli::{Cli, Commands};
use commands::helpers::GlobalPaths;
use error::DevStudioError;
use ui::{Status, status_line};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let label = cli.command.label();
    let paths = GlobalPaths {
        source: cli.source,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(&paths, args),
        Commands::Uninstall(args) => commands::uninstall::run(&paths, args),
        Commands::Migrate(args) => commands::migrate::run(&paths, args),
        Commands::List(args) => commands::list::run(&paths, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    match result {
        Ok(()) => {}
        Err(DevStudioError::Interrupted) => {
            println!(
                "\n{}",
                status_line(Status::Cancelled, &format!("{label} cancelled."))
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
