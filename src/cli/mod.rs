//! CLI subcommand definitions and handlers.
//!
//! Implements a git-like subcommand architecture:
//! - `scanopt describe -o <spec>...` - Show a set of options
//! - `scanopt check -o <spec>... --set NAME=VALUE...` - Validate proposed values

mod check;
mod describe;

pub use check::CheckCommand;
pub use describe::DescribeCommand;

use crate::config::AppSettings;
use crate::error::{CliResult, ConfigError};
use crate::option::{OptionSet, OptionSpec};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;

/// scanopt - inspect and validate fixed-value scanner options.
///
/// Options are given on the command line as NAME=VALUE, optionally followed
/// by `,range=MIN:MAX[:QUANT]` or `,allowed=A|B|C`.
#[derive(Parser, Debug)]
#[command(name = "scanopt")]
#[command(author = "HueCodes <huecodes@proton.me>")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect and validate scanner options", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to custom configuration file
    #[arg(long, global = true, value_name = "PATH", env = "SCANOPT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load settings from `--config` or the default location.
    pub fn settings(&self) -> CliResult<AppSettings> {
        let settings = match &self.config {
            Some(path) => AppSettings::load_from(path)?,
            None => AppSettings::load()?,
        };
        Ok(settings)
    }

    /// Run the selected subcommand.
    pub fn execute(&self) -> CliResult<()> {
        let settings = self.settings()?;
        if !settings.color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let mut out = io::stdout().lock();
        match &self.command {
            Commands::Describe(cmd) => cmd.execute(&mut out, &settings, self.quiet),
            Commands::Check(cmd) => cmd.execute(&mut out, &settings, self.quiet),
        }
    }
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show options with their values and constraints
    #[command(alias = "d")]
    Describe(DescribeCommand),

    /// Check proposed values against option constraints
    #[command(alias = "c")]
    Check(CheckCommand),
}

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable plain text
    #[default]
    Plain,
    /// JSON structured output
    Json,
    /// CSV format for data analysis
    Csv,
}

impl OutputFormat {
    /// Use `explicit` if given, otherwise the configured default.
    pub fn resolve(explicit: Option<Self>, settings: &AppSettings) -> CliResult<Self> {
        if let Some(format) = explicit {
            return Ok(format);
        }
        Self::from_str(&settings.default_output_format, true).map_err(|_| {
            ConfigError::InvalidValue(format!(
                "unknown output format '{}'",
                settings.default_output_format
            ))
            .into()
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

/// Build the option set described by `-o` arguments.
pub(crate) fn build_set(specs: &[OptionSpec]) -> CliResult<OptionSet> {
    Ok(OptionSet::from_specs(specs)?)
}
