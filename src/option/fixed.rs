//! Fixed-value scan options.
//!
//! A `FixedScanOption` carries one numeric device setting (resolution,
//! brightness, scan area edges, ...) along with the constraints the device
//! advertised for it. Constraints are shared with whoever created them and
//! are never copied or modified here.

use super::ScanOption;
use crate::types::{format_range, NumericValue, OptionRange};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// A scanner option whose value is a fixed integer or double.
///
/// `name` and `index` are fixed at construction. The value changes only
/// through [`set_double_value`](Self::set_double_value), and the option
/// performs no validation of its own; see [`super::check_value`].
#[derive(Debug, Clone)]
pub struct FixedScanOption {
    name: String,
    index: usize,
    fixed_value: i64,
    double_value: f64,
    is_double: bool,
    range_constraint: Option<Arc<dyn OptionRange>>,
    numeric_constraints: Option<Arc<[NumericValue]>>,
}

impl FixedScanOption {
    /// Create an integer-valued option with no constraints.
    pub fn new(fixed_value: i64, name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index,
            fixed_value,
            double_value: fixed_value as f64,
            is_double: false,
            range_constraint: None,
            numeric_constraints: None,
        }
    }

    /// The raw integer given at construction.
    #[inline]
    pub fn fixed_value(&self) -> i64 {
        self.fixed_value
    }

    /// Current value, tagged with how it should be interpreted.
    pub fn value(&self) -> NumericValue {
        if self.is_double {
            NumericValue::Double(self.double_value)
        } else {
            NumericValue::Integer(self.fixed_value)
        }
    }

    /// Check if the value is represented as floating point.
    #[inline]
    pub fn is_double(&self) -> bool {
        self.is_double
    }

    /// Replace the value with a double; the option is double-typed from now on.
    pub fn set_double_value(&mut self, value: f64) {
        debug!(option = %self.name, value, "setting double value");
        self.double_value = value;
        self.is_double = true;
    }

    /// Attach a range constraint, replacing any previous one.
    pub fn set_range_constraint(&mut self, range: Arc<dyn OptionRange>) {
        debug!(option = %self.name, range = %format_range(range.as_ref()), "range constraint set");
        self.range_constraint = Some(range);
    }

    pub fn range_constraint(&self) -> Option<&Arc<dyn OptionRange>> {
        self.range_constraint.as_ref()
    }

    /// Attach an enumerated list of allowed values, replacing any previous one.
    ///
    /// The slice is shared with the caller, not copied.
    pub fn set_numeric_constraints(&mut self, values: Arc<[NumericValue]>) {
        debug!(option = %self.name, count = values.len(), "numeric constraints set");
        self.numeric_constraints = Some(values);
    }

    pub fn numeric_constraints(&self) -> Option<&[NumericValue]> {
        self.numeric_constraints.as_deref()
    }

    /// The shared handle behind [`numeric_constraints`](Self::numeric_constraints).
    pub fn numeric_constraints_shared(&self) -> Option<&Arc<[NumericValue]>> {
        self.numeric_constraints.as_ref()
    }

    /// Both constraints in words, e.g. `range 0..=10 step 2; one of 2, 4`.
    ///
    /// `None` when the option is unconstrained.
    pub fn constraint_summary(&self) -> Option<String> {
        let mut constraints = Vec::new();
        if let Some(range) = &self.range_constraint {
            constraints.push(format!("range {}", format_range(range.as_ref())));
        }
        if let Some(values) = &self.numeric_constraints {
            constraints.push(format!("one of {}", join_values(values)));
        }
        (!constraints.is_empty()).then(|| constraints.join("; "))
    }

    /// Human-readable summary: name, index, value and any constraints.
    pub fn describe(&self) -> String {
        let mut out = format!("{} [#{}] = {}", self.name, self.index, self.value());
        if let Some(summary) = self.constraint_summary() {
            out.push_str(&format!(" ({})", summary));
        }
        out
    }
}

impl ScanOption for FixedScanOption {
    fn name(&self) -> &str {
        &self.name
    }

    fn index(&self) -> usize {
        self.index
    }

    fn value(&self) -> NumericValue {
        FixedScanOption::value(self)
    }

    fn describe(&self) -> String {
        FixedScanOption::describe(self)
    }
}

impl fmt::Display for FixedScanOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Comma-separated list of values.
pub(crate) fn join_values(values: &[NumericValue]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NumericRange;

    fn range(s: &str) -> Arc<dyn OptionRange> {
        Arc::new(s.parse::<NumericRange>().unwrap())
    }

    #[test]
    fn test_construction_keeps_identity() {
        let option = FixedScanOption::new(300, "resolution", 3);
        assert_eq!(ScanOption::name(&option), "resolution");
        assert_eq!(ScanOption::index(&option), 3);
        assert_eq!(option.fixed_value(), 300);
        assert!(!option.is_double());
        assert!(option.range_constraint().is_none());
        assert!(option.numeric_constraints().is_none());
    }

    #[test]
    fn test_value_before_and_after_double() {
        let mut option = FixedScanOption::new(4, "resolution", 0);
        assert_eq!(option.value(), NumericValue::Integer(4));

        option.set_double_value(4.5);
        assert!(option.is_double());
        assert_eq!(option.value(), NumericValue::Double(4.5));
        assert_eq!(ScanOption::name(&option), "resolution");
        assert_eq!(ScanOption::index(&option), 0);
        assert_eq!(option.fixed_value(), 4);
    }

    #[test]
    fn test_double_value_whole_number_stays_double() {
        let mut option = FixedScanOption::new(1, "gamma", 2);
        option.set_double_value(2.0);
        assert!(option.value().is_double());
        assert_eq!(option.value().to_string(), "2.0");
    }

    #[test]
    fn test_range_constraint_is_shared_and_replaced() {
        let mut option = FixedScanOption::new(300, "resolution", 0);
        let first = range("75:1200");
        let second = range("100:600:50");

        option.set_range_constraint(Arc::clone(&first));
        assert!(Arc::ptr_eq(option.range_constraint().unwrap(), &first));

        option.set_range_constraint(Arc::clone(&second));
        assert!(Arc::ptr_eq(option.range_constraint().unwrap(), &second));
        assert_eq!(Arc::strong_count(&first), 1);
    }

    #[test]
    fn test_numeric_constraints_preserve_order_without_copy() {
        let mut option = FixedScanOption::new(150, "resolution", 0);
        let allowed: Arc<[NumericValue]> = Arc::from(vec![
            NumericValue::Integer(300),
            NumericValue::Integer(75),
            NumericValue::Integer(150),
        ]);

        option.set_numeric_constraints(Arc::clone(&allowed));
        assert_eq!(option.numeric_constraints().unwrap(), &allowed[..]);
        assert!(Arc::ptr_eq(
            option.numeric_constraints_shared().unwrap(),
            &allowed
        ));
    }

    #[test]
    fn test_describe_mentions_everything() {
        let mut option = FixedScanOption::new(300, "resolution", 0);
        assert_eq!(option.describe(), "resolution [#0] = 300");
        assert_eq!(option.constraint_summary(), None);

        option.set_range_constraint(range("75:1200:1"));
        option.set_numeric_constraints(Arc::from(vec![
            NumericValue::Integer(75),
            NumericValue::Integer(150),
            NumericValue::Integer(300),
        ]));
        assert_eq!(
            option.describe(),
            "resolution [#0] = 300 (range 75..=1200 step 1; one of 75, 150, 300)"
        );
        assert_eq!(option.to_string(), option.describe());
        assert_eq!(
            option.constraint_summary().as_deref(),
            Some("range 75..=1200 step 1; one of 75, 150, 300")
        );
    }
}
