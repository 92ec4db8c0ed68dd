use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::logging::LogLevel;

/// enroll: registration wizard and post gallery for the codebuddy review API
#[derive(Parser)]
#[command(name = "enroll")]
#[command(version = "0.1.0")]
#[command(about = "Registration wizard and post gallery for the codebuddy review API")]
#[command(
    long_about = "enroll walks through a three-step registration form, submits it to the review endpoint, and browses the posts it serves."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (defaults to .enroll/config.yml, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the endpoint base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log level
    #[arg(long, global = true, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log file for interactive sessions
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fill in and submit the registration form
    Register {
        /// Submit a JSON record without the interactive wizard
        #[arg(short, long)]
        record: Option<PathBuf>,
    },

    /// Browse the posts gallery
    Posts {
        /// Print posts to stdout instead of opening the gallery
        #[arg(long)]
        plain: bool,
    },
}

impl Commands {
    /// Get the command name as a string
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Register { .. } => "register",
            Commands::Posts { .. } => "posts",
        }
    }

    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        if !cfg!(feature = "tui") {
            return false;
        }
        match self {
            Commands::Register { record } => record.is_none(),
            Commands::Posts { plain } => !plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_register_headless_parsing() {
        let cli = Cli::parse_from(["enroll", "register", "--record", "me.json"]);

        match &cli.command {
            Commands::Register { record } => {
                assert_eq!(record.as_deref(), Some(std::path::Path::new("me.json")));
            }
            _ => panic!("Wrong command parsed"),
        }
        assert!(!cli.command.is_interactive());
        assert_eq!(cli.log_level, LogLevel::Info);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "enroll",
            "posts",
            "--plain",
            "--base-url",
            "http://localhost:9000",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.command.name(), "posts");
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:9000"));
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert!(!cli.command.is_interactive());
    }
}
