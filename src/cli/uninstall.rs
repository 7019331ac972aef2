use clap::Parser;

/// Arguments for the uninstall command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove every skill found in ./skills:\n    devstudio uninstall\n\n\
                  Remove specific skills:\n    devstudio uninstall commit review\n\n\
                  Remove without confirmation:\n    devstudio uninstall -y")]
pub struct UninstallArgs {
    /// Skill names to remove (defaults to every skill in the source collection)
    pub names: Vec<String>,

    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
