//! Scanner options.
//!
//! A device exposes its settings as a numbered list of options. This module
//! provides the fixed-value option, the collection that owns them, and the
//! consumer-side constraint checks.

mod constraint;
mod fixed;
mod set;
mod spec;

pub use constraint::{active_constraint, check_current, check_value, Constraint, ValidationPolicy};
pub use fixed::FixedScanOption;
pub use set::OptionSet;
pub use spec::{Assignment, OptionSpec, SpecError};

use crate::types::NumericValue;

/// Common interface of all scanner options.
///
/// Identity (`name`, `index`) never changes once an option exists.
pub trait ScanOption {
    /// Option name as reported by the device (e.g. "resolution").
    fn name(&self) -> &str;

    /// Position of the option in the device's option list.
    fn index(&self) -> usize;

    /// Current value.
    fn value(&self) -> NumericValue;

    /// Human-readable summary including name, index and value.
    fn describe(&self) -> String;
}
