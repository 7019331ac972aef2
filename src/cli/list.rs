use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List skills and whether they are installed:\n    devstudio list\n\n\
                  Print machine-readable output:\n    devstudio list --json")]
pub struct ListArgs {
    /// Print the list as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_list_json() {
        let cli = super::super::Cli::try_parse_from(["devstudio", "list", "--json"]).unwrap();
        match cli.command {
            super::super::Commands::List(args) => assert!(args.json),
            _ => panic!("Expected List command"),
        }
    }
}
