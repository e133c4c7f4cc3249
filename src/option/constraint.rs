//! Constraint checks on behalf of option consumers.
//!
//! Options hold their constraints but never enforce them. Callers that need
//! to accept or reject a value (a frontend, a profile loader) go through
//! this module instead.

use super::fixed::{join_values, FixedScanOption};
use super::ScanOption;
use crate::error::{ConstraintError, ConstraintResult};
use crate::types::{format_range, NumericValue, OptionRange};
use tracing::trace;

/// The constraint that governs an option's values.
#[derive(Debug, Clone, Copy)]
pub enum Constraint<'a> {
    None,
    Range(&'a dyn OptionRange),
    List(&'a [NumericValue]),
}

impl Constraint<'_> {
    /// Short label used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Range(_) => "range",
            Self::List(_) => "list",
        }
    }
}

/// How strictly values are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Reject values that are in range but off the quantization grid.
    pub enforce_quantization: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            enforce_quantization: true,
        }
    }
}

/// Pick the constraint that applies to `option`.
///
/// When both are attached the enumerated list wins: it is the narrower of
/// the two and a device only advertises one constraint type per option.
pub fn active_constraint(option: &FixedScanOption) -> Constraint<'_> {
    if let Some(values) = option.numeric_constraints() {
        Constraint::List(values)
    } else if let Some(range) = option.range_constraint() {
        Constraint::Range(range.as_ref())
    } else {
        Constraint::None
    }
}

/// Check `candidate` against the active constraint of `option`.
pub fn check_value(
    option: &FixedScanOption,
    candidate: NumericValue,
    policy: ValidationPolicy,
) -> ConstraintResult<()> {
    let constraint = active_constraint(option);
    trace!(option = option.name(), %candidate, kind = constraint.kind(), "checking value");

    match constraint {
        Constraint::None => Ok(()),
        Constraint::List(values) => {
            if values.iter().any(|v| v.numerically_eq(candidate)) {
                Ok(())
            } else {
                Err(ConstraintError::NotAllowed {
                    option: option.name().to_string(),
                    value: candidate,
                    allowed: join_values(values),
                })
            }
        }
        Constraint::Range(range) => {
            if !range.contains(candidate) {
                return Err(ConstraintError::OutOfRange {
                    option: option.name().to_string(),
                    value: candidate,
                    range: format_range(range),
                });
            }
            if policy.enforce_quantization && !range.is_quantized(candidate) {
                return Err(ConstraintError::NotQuantized {
                    option: option.name().to_string(),
                    value: candidate,
                    min: range.min(),
                    quant: range.quant(),
                });
            }
            Ok(())
        }
    }
}

/// Check the option's own current value.
pub fn check_current(option: &FixedScanOption, policy: ValidationPolicy) -> ConstraintResult<()> {
    check_value(option, option.value(), policy)
}
