use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomodoro")]
#[command(about = "A Pomodoro countdown timer for the terminal")]
#[command(long_about = "pomodoro - A Pomodoro countdown timer for the terminal

Cycles through Work, Short Break and Long Break intervals, counting
completed work sessions. Start, pause, resume, reset or skip the current
interval from the keyboard, and tweak durations while you go.

QUICK START:
  pomodoro                  Open the timer with default durations (25/5/15/4)
  pomodoro --work 50        Use 50 minute work intervals
  pomodoro settings         Show the settings the timer would start with
  pomodoro plan -c 8        Preview the next 8 intervals

Settings are read from ~/.pomodoro/config.yaml if present; command line
flags take precedence. Nothing is ever written back.")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    /// Read startup defaults from this file instead of ~/.pomodoro/config.yaml
    #[arg(long, global = true, env = "POMODORO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, global = true, env = "POMODORO_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging (to ~/.pomodoro/pomodoro.log unless --log-file is given)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub durations: DurationArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Interval duration overrides.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct DurationArgs {
    /// Work interval in minutes (1-180)
    #[arg(long, short = 'w', global = true)]
    pub work: Option<u32>,

    /// Short break in minutes (1-120)
    #[arg(long, short = 's', global = true)]
    pub short_break: Option<u32>,

    /// Long break in minutes (1-240)
    #[arg(long, short = 'l', global = true)]
    pub long_break: Option<u32>,

    /// Work sessions before a long break (1-12)
    #[arg(long, short = 'n', global = true)]
    pub sessions: Option<u32>,

    /// Do not ring the terminal bell when an interval ends
    #[arg(long, global = true)]
    pub no_bell: bool,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   space/s   start or resume
    ///   p         pause
    ///   r         reset (back to Work, session count cleared)
    ///   n         skip to the next interval
    ///   tab       select a setting, +/- to change it, digits + enter to type it
    ///   q         quit
    Run,

    /// Show the settings the timer would start with
    ///
    /// Resolves built-in defaults, the config file and command line flags,
    /// validates the result and prints it.
    ///
    /// # Examples
    ///
    ///   pomodoro settings
    ///   pomodoro settings --work 50 -o json
    Settings,

    /// Preview the upcoming intervals
    ///
    /// Prints the sequence of intervals a fresh timer would run through,
    /// with their durations.
    ///
    /// # Examples
    ///
    ///   pomodoro plan
    ///   pomodoro plan --count 12 --sessions 3
    Plan {
        /// Number of intervals to show, starting with the first work interval
        #[arg(
            long,
            short = 'c',
            default_value = "8",
            value_parser = clap::value_parser!(u16).range(0..=1000)
        )]
        count: u16,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomodoro completions zsh > ~/.zsh/completions/_pomodoro
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}
