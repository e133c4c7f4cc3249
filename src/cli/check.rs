//! Check subcommand implementation.
//!
//! Handles the `scanopt check` command for validating proposed values.

use super::{build_set, OutputFormat};
use crate::config::AppSettings;
use crate::error::{CliError, CliResult};
use crate::option::{check_value, Assignment, OptionSet, OptionSpec, ValidationPolicy};
use crate::output::{self, CheckReport};
use clap::Parser;
use std::io::Write;
use tracing::debug;

/// Check proposed values against option constraints.
#[derive(Parser, Debug)]
pub struct CheckCommand {
    /// Option definition (NAME=VALUE[,range=MIN:MAX[:QUANT]][,allowed=A|B|C])
    #[arg(short = 'o', long = "option", value_name = "SPEC", required = true)]
    pub options: Vec<OptionSpec>,

    /// Proposed value for an option
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE", required = true)]
    pub assignments: Vec<Assignment>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl CheckCommand {
    /// Execute the check command, writing verdicts to `out`.
    ///
    /// Verdicts are written before any rejection is reported, so callers
    /// always see why a value failed.
    pub fn execute<W: Write>(
        &self,
        out: &mut W,
        settings: &AppSettings,
        quiet: bool,
    ) -> CliResult<()> {
        let format = OutputFormat::resolve(self.format, settings)?;
        let set = build_set(&self.options)?;

        let checks = run_checks(&set, &self.assignments, settings.validation_policy())?;
        output::write_checks(out, &checks, format)?;

        let rejected = checks.iter().filter(|c| !c.accepted).count();
        if rejected > 0 {
            return Err(CliError::Rejected(rejected));
        }

        if !quiet && format == OutputFormat::Plain {
            output::print_success(&format!("all {} value(s) accepted", checks.len()));
        }
        Ok(())
    }
}

/// Check each assignment against its option. Unknown option names are errors.
pub fn run_checks(
    set: &OptionSet,
    assignments: &[Assignment],
    policy: ValidationPolicy,
) -> CliResult<Vec<CheckReport>> {
    let mut checks = Vec::with_capacity(assignments.len());

    for assignment in assignments {
        let option = set.require(&assignment.name)?;
        let verdict = check_value(option, assignment.value, policy);

        debug!(
            option = %assignment.name,
            value = %assignment.value,
            accepted = verdict.is_ok(),
            "checked value"
        );

        checks.push(CheckReport {
            name: assignment.name.clone(),
            value: assignment.value,
            accepted: verdict.is_ok(),
            reason: verdict.err().map(|e| e.to_string()),
        });
    }

    Ok(checks)
}
