use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    devstudio completions bash > ~/.bash_completion.d/devstudio\n\n\
                  Generate zsh completions:\n    devstudio completions zsh > ~/.zfunc/_devstudio\n\n\
                  Generate fish completions:\n    devstudio completions fish > ~/.config/fish/completions/devstudio.fish\n\n\
                  Generate PowerShell completions:\n    devstudio completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
