//! Describe subcommand implementation.
//!
//! Handles the `scanopt describe` command for showing options.

use super::{build_set, OutputFormat};
use crate::config::AppSettings;
use crate::error::CliResult;
use crate::option::OptionSpec;
use crate::output::{self, OptionReport};
use clap::Parser;
use std::io::Write;
use tracing::debug;

/// Show options with their values and constraints.
#[derive(Parser, Debug)]
pub struct DescribeCommand {
    /// Option definition (NAME=VALUE[,range=MIN:MAX[:QUANT]][,allowed=A|B|C])
    ///
    /// Examples:
    ///   resolution=300,allowed=75|150|300
    ///   brightness=0.5,range=-1:1:0.1
    #[arg(short = 'o', long = "option", value_name = "SPEC", required = true)]
    pub options: Vec<OptionSpec>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl DescribeCommand {
    /// Execute the describe command, writing the report to `out`.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        settings: &AppSettings,
        quiet: bool,
    ) -> CliResult<()> {
        let format = OutputFormat::resolve(self.format, settings)?;
        let set = build_set(&self.options)?;
        debug!(options = set.len(), %format, "describing options");

        let reports = OptionReport::from_set(&set, settings.validation_policy());
        output::write_options(out, &reports, format)?;

        let invalid = reports.iter().filter(|r| !r.valid).count();
        if invalid > 0 && !quiet {
            output::print_warning(&format!(
                "{} option(s) hold values outside their constraints",
                invalid
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CliError, OptionError};

    fn command(specs: &[&str], format: OutputFormat) -> DescribeCommand {
        DescribeCommand {
            options: specs.iter().map(|s| s.parse().unwrap()).collect(),
            format: Some(format),
        }
    }

    #[test]
    fn test_execute_writes_every_option() {
        let cmd = command(
            &["resolution=300,allowed=75|150|300", "brightness=1.5,range=-1:1"],
            OutputFormat::Json,
        );
        let mut buf = Vec::new();

        // An out-of-range value is reported, not treated as a failure
        cmd.execute(&mut buf, &AppSettings::default(), true).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["name"], "resolution");
        assert_eq!(parsed[1]["name"], "brightness");
        assert_eq!(parsed[1]["valid"], false);
    }

    #[test]
    fn test_execute_uses_configured_format() {
        let mut cmd = command(&["gamma=2"], OutputFormat::Json);
        cmd.format = None;
        let mut settings = AppSettings::default();
        settings.default_output_format = "csv".to_string();

        let mut buf = Vec::new();
        cmd.execute(&mut buf, &settings, true).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("index,name,value,type"));
        assert!(text.contains("0,gamma,2,integer,none"));
    }

    #[test]
    fn test_execute_duplicate_names() {
        let cmd = command(&["a=1", "a=2"], OutputFormat::Plain);
        let mut buf = Vec::new();

        let result = cmd.execute(&mut buf, &AppSettings::default(), true);
        assert!(matches!(
            result,
            Err(CliError::Option(OptionError::DuplicateName(_)))
        ));
        assert!(buf.is_empty());
    }
}
