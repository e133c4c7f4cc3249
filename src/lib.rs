//! # scanopt - Fixed-Value Scanner Options
//!
//! scanopt models the numeric options an image scanner exposes (resolution,
//! brightness, scan-area edges, ...) and the constraints the device
//! advertises for them.
//!
//! ## Features
//!
//! - **Typed values**: integer and floating-point values are kept apart by [`NumericValue`]
//! - **Shared constraints**: ranges and allowed-value lists are held by `Arc`, never copied
//! - **Consumer-side validation**: options store constraints, [`check_value`] enforces them
//! - **Multiple Output Formats**: Plain text, JSON, and CSV
//!
//! ## Example Usage
//!
//! ```rust
//! use scanopt::{FixedScanOption, NumericValue};
//!
//! let mut option = FixedScanOption::new(4, "resolution", 0);
//! assert_eq!(option.value(), NumericValue::Integer(4));
//!
//! option.set_double_value(4.5);
//! assert!(option.is_double());
//! assert_eq!(option.value(), NumericValue::Double(4.5));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Numeric values and range constraints
//! - [`option`] - The option type, option sets and constraint checks
//! - [`config`] - Settings management
//! - [`error`] - Error types
//! - [`output`] - Output formatting utilities

pub mod cli;
pub mod config;
pub mod error;
pub mod option;
pub mod output;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConstraintError, OptionError};
pub use option::{check_value, FixedScanOption, OptionSet, OptionSpec, ScanOption};
pub use types::{NumericRange, NumericValue, OptionRange};
