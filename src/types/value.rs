//! Numeric option values.
//!
//! A scanner option reports either an integer or a floating-point value.
//! `NumericValue` keeps the two apart so callers always know how to format it.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// The current value of a fixed option: integer or double.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericValue {
    Integer(i64),
    Double(f64),
}

impl NumericValue {
    /// Widen to `f64` for comparisons against constraints.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Integer(i) => i as f64,
            Self::Double(d) => d,
        }
    }

    /// Check if this is the floating-point variant.
    #[inline]
    pub const fn is_double(self) -> bool {
        matches!(self, Self::Double(_))
    }

    /// Integer view, truncating doubles toward zero.
    #[inline]
    pub fn as_i64(self) -> i64 {
        match self {
            Self::Integer(i) => i,
            Self::Double(d) => d as i64,
        }
    }

    /// Numeric equality across variants (`4 == 4.0`).
    pub fn numerically_eq(self, other: Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }

    /// Numeric ordering across variants. `None` if either side is NaN.
    pub fn partial_cmp_numeric(self, other: Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(&b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl Default for NumericValue {
    fn default() -> Self {
        Self::Integer(0)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            // Keep a fractional part so 4.0 never reads as the integer 4
            Self::Double(d) if d.is_finite() && d.fract() == 0.0 => write!(f, "{:.1}", d),
            Self::Double(d) => write!(f, "{}", d),
        }
    }
}

/// Error type for numeric value parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    #[error("invalid numeric value: {0}")]
    InvalidFormat(String),
    #[error("empty numeric value")]
    Empty,
}

impl FromStr for NumericValue {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValueError::Empty);
        }

        if !s.contains(['.', 'e', 'E']) {
            if let Ok(i) = s.parse::<i64>() {
                return Ok(Self::Integer(i));
            }
        }

        let d: f64 = s
            .parse()
            .map_err(|_| ValueError::InvalidFormat(s.to_string()))?;
        if d.is_nan() {
            return Err(ValueError::InvalidFormat(s.to_string()));
        }
        Ok(Self::Double(d))
    }
}
