//! CSV output formatting.

use super::{CheckReport, OptionReport};
use std::io::{self, Write};

/// Write option reports as CSV, one row per option.
pub fn write_options<W: Write>(out: &mut W, reports: &[OptionReport]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    // Write header
    wtr.write_record([
        "index",
        "name",
        "value",
        "type",
        "constraint",
        "min",
        "max",
        "quant",
        "allowed",
        "valid",
    ])?;

    for report in reports {
        let (min, max, quant) = match &report.range {
            Some(r) => (r.min.to_string(), r.max.to_string(), r.quant.to_string()),
            None => Default::default(),
        };
        let allowed = report
            .allowed
            .as_ref()
            .map(|values| {
                values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .unwrap_or_default();

        wtr.write_record([
            report.index.to_string(),
            report.name.clone(),
            report.value.to_string(),
            report.kind.to_string(),
            report.constraint.to_string(),
            min,
            max,
            quant,
            allowed,
            report.valid.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write check verdicts as CSV.
pub fn write_checks<W: Write>(out: &mut W, checks: &[CheckReport]) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(["name", "value", "accepted", "reason"])?;
    for check in checks {
        wtr.write_record([
            check.name.as_str(),
            check.value.to_string().as_str(),
            if check.accepted { "true" } else { "false" },
            check.reason.as_deref().unwrap_or(""),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
