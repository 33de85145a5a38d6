//! Shell completions generation.
//!
//! Generates shell completion scripts for bash, zsh, fish, and PowerShell.

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::PomodoroError;

/// Execute completions command
///
/// # Errors
///
/// Returns `PomodoroError::Config` for an unknown shell name.
pub fn completions(shell: &str, install: bool) -> Result<String, PomodoroError> {
    let shell = shell_from_str(shell)
        .ok_or_else(|| PomodoroError::Config(format!("Unknown shell: {shell}")))?;

    if install {
        Ok(completion_install_instructions(shell))
    } else {
        generate_completions(shell)
    }
}

/// Generate shell completions for the specified shell.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn generate_completions(shell: Shell) -> Result<String, PomodoroError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomodoro", &mut buf);
    String::from_utf8(buf).map_err(|e| PomodoroError::Config(format!("UTF-8 error: {e}")))
}

/// Get shell from string name.
fn shell_from_str(s: &str) -> Option<Shell> {
    match s.to_lowercase().as_str() {
        "bash" => Some(Shell::Bash),
        "zsh" => Some(Shell::Zsh),
        "fish" => Some(Shell::Fish),
        "powershell" | "ps" | "pwsh" => Some(Shell::PowerShell),
        "elvish" => Some(Shell::Elvish),
        _ => None,
    }
}

/// Get installation instructions for shell completions.
#[must_use]
pub fn completion_install_instructions(shell: Shell) -> String {
    match shell {
        Shell::Bash => r"# Add to ~/.bashrc or ~/.bash_profile:
source <(pomodoro completions bash)
"
        .to_string(),

        Shell::Zsh => r"# Save to your fpath:
pomodoro completions zsh > ~/.zsh/completions/_pomodoro
# Then add to ~/.zshrc:
fpath=(~/.zsh/completions $fpath)
autoload -Uz compinit && compinit
"
        .to_string(),

        Shell::Fish => r"# Save to fish completions directory:
pomodoro completions fish > ~/.config/fish/completions/pomodoro.fish
"
        .to_string(),

        Shell::PowerShell => r"# Add to your PowerShell profile ($PROFILE):
pomodoro completions powershell | Out-String | Invoke-Expression
"
        .to_string(),

        Shell::Elvish => r"# Save to elvish completions directory:
pomodoro completions elvish > ~/.elvish/lib/pomodoro.elv
"
        .to_string(),

        _ => "Unknown shell".to_string(),
    }
}
