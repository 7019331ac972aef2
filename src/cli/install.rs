use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Install the skills in ./skills:\n    devstudio install\n\n\
                  Install from another directory:\n    devstudio install --source ~/src/devstudio/skills\n\n\
                  Overwrite existing skills without asking:\n    devstudio install -y")]
pub struct InstallArgs {
    /// Answer yes to every confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_install() {
        let cli = super::super::Cli::try_parse_from(["devstudio", "install"]).unwrap();
        match cli.command {
            super::super::Commands::Install(args) => assert!(!args.yes),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_parsing_install_yes() {
        let cli = super::super::Cli::try_parse_from(["devstudio", "install", "--yes"]).unwrap();
        match cli.command {
            super::super::Commands::Install(args) => assert!(args.yes),
            _ => panic!("Expected Install command"),
        }
    }

    #[test]
    fn test_cli_install_rejects_positional() {
        assert!(super::super::Cli::try_parse_from(["devstudio", "install", "extra"]).is_err());
    }
}
