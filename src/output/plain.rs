//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::{CheckReport, OptionReport};
use console::{style, Style};
use std::io::{self, Write};

const RULE: &str = "───────────────────────────────────────────────────────────────";

/// Print option reports as an aligned table.
pub fn write_options<W: Write>(out: &mut W, reports: &[OptionReport]) -> io::Result<()> {
    writeln!(out)?;
    if reports.is_empty() {
        writeln!(out, "  {}", style("No options to display.").dim())?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(
        out,
        "  {:>3}  {:<18}  {:>10}  {:<8}  {}",
        style("#").bold(),
        style("OPTION").bold(),
        style("VALUE").bold(),
        style("TYPE").bold(),
        style("CONSTRAINT").bold()
    )?;
    writeln!(out, "  {}", style(RULE).dim())?;

    for report in reports {
        let value_style = if report.valid {
            Style::new().green()
        } else {
            Style::new().red().bold()
        };

        writeln!(
            out,
            "  {:>3}  {:<18}  {:>10}  {:<8}  {}",
            report.index,
            truncate_string(&report.name, 18),
            value_style.apply_to(report.value.to_string()),
            report.kind,
            style(report.summary.as_deref().unwrap_or("-")).dim()
        )?;

        if let Some(problem) = &report.problem {
            writeln!(out, "       {} {}", style("!").red().bold(), problem)?;
        }
    }

    writeln!(out, "  {}", style(RULE).dim())?;
    writeln!(out)?;
    Ok(())
}

/// Print check verdicts, one per line.
pub fn write_checks<W: Write>(out: &mut W, checks: &[CheckReport]) -> io::Result<()> {
    for check in checks {
        if check.accepted {
            writeln!(
                out,
                "{} {} = {} accepted",
                style("✓").green().bold(),
                check.name,
                check.value
            )?;
        } else {
            writeln!(
                out,
                "{} {} = {} rejected: {}",
                style("✗").red().bold(),
                check.name,
                check.value,
                check.reason.as_deref().unwrap_or("unknown reason")
            )?;
        }
    }
    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Truncate a string to a maximum length, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
