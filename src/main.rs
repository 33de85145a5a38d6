use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use pomodoro_timer::cli::args::{Cli, Commands};
use pomodoro_timer::cli::commands;
use pomodoro_timer::config::Paths;
use pomodoro_timer::{logging, PomodoroError};

/// Exit code for a setting outside its allowed range.
const EXIT_INVALID_SETTING: i32 = 2;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {:#}", "error".red().bold(), e);
        let code = match e.downcast_ref::<PomodoroError>() {
            Some(err) if err.is_validation() => EXIT_INVALID_SETTING,
            _ => 1,
        };
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let paths = Paths::default();
    if let Some(path) = logging::log_target(cli.log_file.as_deref(), cli.verbose, &paths) {
        logging::init(&path, cli.verbose)?;
    }

    let output = match &cli.command {
        None | Some(Commands::Run) => {
            pomodoro_timer::tui::run(&commands::startup(&cli)?)?;
            String::new()
        }
        Some(Commands::Settings) => commands::settings(&commands::startup(&cli)?, format)?,
        Some(Commands::Plan { count }) => {
            commands::plan(&commands::startup(&cli)?, usize::from(*count), format)?
        }
        Some(Commands::Completions { shell, install }) => commands::completions(shell, *install)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
