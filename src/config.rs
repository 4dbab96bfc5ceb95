//! Configuration management for the analyzer CLI.
//!
//! Handles:
//! - Command-line argument parsing
//! - Profile directory resolution

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the error report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable category lists
    Text,
    /// The full report as JSON
    Json,
}

/// Command-line arguments for the analyzer
#[derive(Debug, Parser)]
#[command(name = "csa")]
#[command(about = "Error classifier for a constrained C subset")]
#[command(version)]
pub struct Args {
    /// Source file to validate; reads standard input when omitted
    pub file: Option<PathBuf>,

    /// Rule profile to validate against
    #[arg(long, help = "Rule profile to use (e.g., 'c-subset', 'payroll')")]
    pub profile: Option<String>,

    /// Custom profile directory to search for profile files
    #[arg(long, help = "Directory containing profile TOML files")]
    pub profile_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the canonical reference program and exit
    #[arg(long)]
    pub sample: bool,

    /// Log level for the analyzer
    #[arg(
        long,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Source file, or stdin when absent
    pub file: Option<PathBuf>,
    /// Profile name explicitly set via command line
    pub cli_profile: Option<String>,
    /// Custom profile directories to search
    pub profile_dirs: Vec<PathBuf>,
    /// Output format
    pub format: OutputFormat,
    /// Print the reference program instead of validating
    pub sample: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        // Determine profile directories
        let mut profile_dirs = Vec::new();

        // Add user-specified directory if provided
        if let Some(custom_dir) = args.profile_dir {
            profile_dirs.push(custom_dir);
        }

        // Add default user config directory
        if let Some(config_dir) = dirs::config_dir() {
            profile_dirs.push(config_dir.join("csa").join("profiles"));
        }

        Ok(Config {
            file: args.file,
            cli_profile: args.profile,
            profile_dirs,
            format: args.format,
            sample: args.sample,
            log_level: args.log_level,
        })
    }
}
