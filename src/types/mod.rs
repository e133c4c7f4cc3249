//! Core value types for scanner options.
//!
//! `NumericValue` makes the integer/double split explicit, and
//! `NumericRange` validates its bounds on construction.

mod range;
mod value;

pub use range::{format_range, NumericRange, OptionRange, RangeError};
pub use value::{NumericValue, ValueError};
