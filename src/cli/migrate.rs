use clap::Parser;
use std::path::PathBuf;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Migrate ./commands into ./skills using ./skills.yaml:\n    devstudio migrate\n\n\
                  Use another manifest and commands directory:\n    devstudio migrate --manifest meta/skills.yaml --commands legacy/commands")]
pub struct MigrateArgs {
    /// YAML manifest listing the skills to migrate
    #[arg(long, short = 'm', default_value = crate::config::manifest::DEFAULT_MANIFEST_FILE)]
    pub manifest: PathBuf,

    /// Directory holding the legacy <name>.md command files
    #[arg(long, default_value = "commands")]
    pub commands: PathBuf,
}
