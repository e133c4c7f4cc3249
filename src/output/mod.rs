//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of option sets
//! and constraint checks.

mod csv_format;
mod json_format;
mod plain;

pub use plain::{print_error, print_success, print_warning};

use crate::cli::OutputFormat;
use crate::option::{
    active_constraint, check_current, FixedScanOption, OptionSet, ScanOption, ValidationPolicy,
};
use crate::types::{NumericValue, OptionRange};
use serde::Serialize;
use std::io::{self, Write};

/// Serializable bounds of a range constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeReport {
    pub min: NumericValue,
    pub max: NumericValue,
    pub quant: NumericValue,
}

/// A snapshot of one option, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionReport {
    pub index: usize,
    pub name: String,
    pub value: NumericValue,
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Which constraint is enforced: none, range or list.
    pub constraint: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<NumericValue>>,
    /// Constraints in the same words `FixedScanOption::describe` uses.
    #[serde(skip)]
    pub summary: Option<String>,
    /// Whether the current value satisfies the active constraint.
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

impl OptionReport {
    /// Capture `option` and check its current value under `policy`.
    pub fn new(option: &FixedScanOption, policy: ValidationPolicy) -> Self {
        let check = check_current(option, policy);

        Self {
            index: option.index(),
            name: option.name().to_string(),
            value: option.value(),
            kind: if option.is_double() { "double" } else { "integer" },
            constraint: active_constraint(option).kind(),
            range: option.range_constraint().map(|r| RangeReport {
                min: r.min(),
                max: r.max(),
                quant: r.quant(),
            }),
            allowed: option.numeric_constraints().map(<[NumericValue]>::to_vec),
            summary: option.constraint_summary(),
            valid: check.is_ok(),
            problem: check.err().map(|e| e.to_string()),
        }
    }

    /// Reports for every option in `set`, in index order.
    pub fn from_set(set: &OptionSet, policy: ValidationPolicy) -> Vec<Self> {
        set.iter().map(|o| Self::new(o, policy)).collect()
    }
}

/// Verdict on a proposed value for one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub value: NumericValue,
    pub accepted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Write option reports in the requested format.
pub fn write_options<W: Write>(
    out: &mut W,
    reports: &[OptionReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_options(out, reports),
        OutputFormat::Json => json_format::write_json(out, reports),
        OutputFormat::Csv => csv_format::write_options(out, reports),
    }
}

/// Write check verdicts in the requested format.
pub fn write_checks<W: Write>(
    out: &mut W,
    checks: &[CheckReport],
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_checks(out, checks),
        OutputFormat::Json => json_format::write_json(out, checks),
        OutputFormat::Csv => csv_format::write_checks(out, checks),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::OptionSpec;

    fn sample_set() -> OptionSet {
        let specs: Vec<OptionSpec> = [
            "resolution=300,allowed=75|150|300",
            "brightness=1.5,range=-1:1",
            "gamma=2",
        ]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
        OptionSet::from_specs(&specs).unwrap()
    }

    #[test]
    fn test_reports_capture_state() {
        let reports = OptionReport::from_set(&sample_set(), ValidationPolicy::default());
        assert_eq!(reports.len(), 3);

        assert_eq!(reports[0].constraint, "list");
        assert_eq!(reports[0].kind, "integer");
        assert!(reports[0].valid);

        assert_eq!(reports[1].kind, "double");
        assert_eq!(reports[1].constraint, "range");
        assert!(!reports[1].valid);
        assert!(reports[1].problem.as_deref().unwrap().contains("outside"));

        assert_eq!(reports[2].constraint, "none");
        assert!(reports[2].range.is_none());
    }

    #[test]
    fn test_json_output() {
        let reports = OptionReport::from_set(&sample_set(), ValidationPolicy::default());
        let mut buf = Vec::new();
        write_options(&mut buf, &reports, OutputFormat::Json).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0]["name"], "resolution");
        assert_eq!(parsed[0]["allowed"][1], 150);
        assert_eq!(parsed[1]["type"], "double");
        assert_eq!(parsed[1]["value"], 1.5);
        assert!(parsed[2].get("range").is_none());
    }

    #[test]
    fn test_csv_output() {
        let reports = OptionReport::from_set(&sample_set(), ValidationPolicy::default());
        let mut buf = Vec::new();
        write_options(&mut buf, &reports, OutputFormat::Csv).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "index,name,value,type,constraint,min,max,quant,allowed,valid"
        );
        assert_eq!(
            lines.next().unwrap(),
            "0,resolution,300,integer,list,,,,75|150|300,true"
        );
        assert_eq!(lines.next().unwrap(), "1,brightness,1.5,double,range,-1,1,0,,false");
    }

    #[test]
    fn test_plain_output_lists_every_option() {
        console::set_colors_enabled(false);
        let reports = OptionReport::from_set(&sample_set(), ValidationPolicy::default());
        let mut buf = Vec::new();
        write_options(&mut buf, &reports, OutputFormat::Plain).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("resolution"));
        assert!(text.contains("75, 150, 300"));
        assert!(text.contains("-1..=1"));
        assert!(text.contains("gamma"));
    }

    #[test]
    fn test_plain_output_matches_describe() {
        console::set_colors_enabled(false);
        let set = sample_set();
        let reports = OptionReport::from_set(&set, ValidationPolicy::default());
        let mut buf = Vec::new();
        write_options(&mut buf, &reports, OutputFormat::Plain).unwrap();
        let text = String::from_utf8(buf).unwrap();

        for option in set.iter() {
            match option.constraint_summary() {
                Some(summary) => {
                    assert!(text.contains(&summary));
                    assert!(option.describe().ends_with(&format!("({})", summary)));
                }
                None => assert!(!option.describe().contains('(')),
            }
        }
        assert!(text.contains("one of 75, 150, 300"));
        assert!(text.contains("range -1..=1"));
    }

    #[test]
    fn test_summary_stays_out_of_json() {
        let reports = OptionReport::from_set(&sample_set(), ValidationPolicy::default());
        assert_eq!(reports[0].summary.as_deref(), Some("one of 75, 150, 300"));
        assert!(reports[2].summary.is_none());

        let mut buf = Vec::new();
        write_options(&mut buf, &reports, OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert!(parsed[0].get("summary").is_none());
    }

    #[test]
    fn test_check_output() {
        let checks = vec![
            CheckReport {
                name: "resolution".to_string(),
                value: NumericValue::Integer(150),
                accepted: true,
                reason: None,
            },
            CheckReport {
                name: "resolution".to_string(),
                value: NumericValue::Integer(600),
                accepted: false,
                reason: Some("resolution: 600 is not one of 75, 150, 300".to_string()),
            },
        ];

        let mut buf = Vec::new();
        write_checks(&mut buf, &checks, OutputFormat::Csv).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("name,value,accepted,reason\n"));
        assert!(text.contains("resolution,600,false,"));

        console::set_colors_enabled(false);
        let mut buf = Vec::new();
        write_checks(&mut buf, &checks, OutputFormat::Plain).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("accepted"));
        assert!(text.contains("rejected"));
    }
}
