//! Command-line interface for namaste.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::AppConfig;

/// Namaste - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "namaste")]
#[command(about = "Two-player tic-tac-toe with best-of-five series", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if missing)
    #[arg(short, long, global = true, default_value = "namaste.toml")]
    pub config: PathBuf,

    /// Override the log file location
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Override the number of games in a series
    #[arg(long, global = true)]
    pub best_of: Option<u32>,

    /// Skip the splash screen
    #[arg(long, global = true)]
    pub no_splash: bool,

    /// Subcommand to run (defaults to the menu)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Open the welcome menu
    Menu,

    /// Jump straight into a single game
    Single,

    /// Jump straight into a series
    Series,
}

impl Cli {
    /// Applies command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: AppConfig) -> AppConfig {
        let mut config = config;
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        if let Some(best_of) = self.best_of {
            config = config.with_best_of(best_of);
        }
        if self.no_splash || matches!(self.command, Some(Command::Single | Command::Series)) {
            config = config.with_splash(false);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_menu() {
        let cli = Cli::parse_from(["namaste"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.config, PathBuf::from("namaste.toml"));
    }

    #[test]
    fn test_overrides_apply() {
        let cli = Cli::parse_from(["namaste", "series", "--best-of", "3", "--log-file", "x.log"]);
        assert_eq!(cli.command, Some(Command::Series));

        let config = cli.apply_overrides(AppConfig::default());
        assert_eq!(*config.best_of(), 3);
        assert_eq!(config.log_file(), &PathBuf::from("x.log"));
        assert!(!*config.splash());
    }

    #[test]
    fn test_menu_keeps_splash() {
        let cli = Cli::parse_from(["namaste", "menu"]);
        assert!(*cli.apply_overrides(AppConfig::default()).splash());
    }
}
