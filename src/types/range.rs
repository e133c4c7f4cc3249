//! Range constraints with validation and parsing.
//!
//! `OptionRange` is the seam options hold on to; `NumericRange` is the
//! ordinary min/max/step implementation.

use super::value::{NumericValue, ValueError};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Largest distance, in steps, a double may sit from a grid point.
const QUANT_EPSILON: f64 = 1e-6;

/// A minimum/maximum bound restricting acceptable values of an option.
///
/// Options keep ranges behind an `Arc`, so implementations must be shareable.
pub trait OptionRange: fmt::Debug + Send + Sync {
    /// Lower bound (inclusive).
    fn min(&self) -> NumericValue;

    /// Upper bound (inclusive).
    fn max(&self) -> NumericValue;

    /// Quantization step. Zero means any value between the bounds.
    fn quant(&self) -> NumericValue {
        NumericValue::Integer(0)
    }

    /// Check if `value` lies within the bounds.
    fn contains(&self, value: NumericValue) -> bool {
        let above_min = matches!(
            value.partial_cmp_numeric(self.min()),
            Some(Ordering::Greater | Ordering::Equal)
        );
        let below_max = matches!(
            value.partial_cmp_numeric(self.max()),
            Some(Ordering::Less | Ordering::Equal)
        );
        above_min && below_max
    }

    /// Check if `value` sits on the quantization grid starting at `min`.
    ///
    /// All-integer grids are checked exactly; anything involving a double
    /// allows `QUANT_EPSILON` steps of rounding error.
    fn is_quantized(&self, value: NumericValue) -> bool {
        use NumericValue::Integer;

        if let (Integer(v), Integer(min), Integer(quant)) = (value, self.min(), self.quant()) {
            if quant == 0 {
                return true;
            }
            return (i128::from(v) - i128::from(min)) % i128::from(quant) == 0;
        }

        let step = self.quant().as_f64();
        if step == 0.0 {
            return true;
        }
        let steps = (value.as_f64() - self.min().as_f64()) / step;
        (steps - steps.round()).abs() <= QUANT_EPSILON
    }
}

/// Error type for range construction and parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
    #[error("invalid range: min ({0}) > max ({1})")]
    Inverted(NumericValue, NumericValue),
    #[error("invalid range: negative quantization step ({0})")]
    NegativeQuant(NumericValue),
    #[error("invalid range format: {0} (expected MIN:MAX[:QUANT])")]
    InvalidFormat(String),
    #[error(transparent)]
    Value(#[from] ValueError),
}

/// An inclusive numeric range with an optional quantization step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumericRange {
    min: NumericValue,
    max: NumericValue,
    quant: NumericValue,
}

impl NumericRange {
    /// Create a new range, rejecting inverted bounds and negative steps.
    pub fn new(
        min: NumericValue,
        max: NumericValue,
        quant: NumericValue,
    ) -> Result<Self, RangeError> {
        if matches!(min.partial_cmp_numeric(max), Some(Ordering::Greater) | None) {
            return Err(RangeError::Inverted(min, max));
        }
        if quant.as_f64() < 0.0 || quant.as_f64().is_nan() {
            return Err(RangeError::NegativeQuant(quant));
        }
        Ok(Self { min, max, quant })
    }

    /// Create a continuous range (no quantization).
    pub fn continuous(min: NumericValue, max: NumericValue) -> Result<Self, RangeError> {
        Self::new(min, max, NumericValue::Integer(0))
    }
}

impl OptionRange for NumericRange {
    fn min(&self) -> NumericValue {
        self.min
    }

    fn max(&self) -> NumericValue {
        self.max
    }

    fn quant(&self) -> NumericValue {
        self.quant
    }
}

impl fmt::Display for NumericRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range(self))
    }
}

impl FromStr for NumericRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(':').collect();
        let (min, max, quant) = match parts.as_slice() {
            [min, max] => (*min, *max, None),
            [min, max, quant] => (*min, *max, Some(*quant)),
            _ => return Err(RangeError::InvalidFormat(s.to_string())),
        };

        let min: NumericValue = min.parse()?;
        let max: NumericValue = max.parse()?;
        let quant = match quant {
            Some(q) => q.parse()?,
            None => NumericValue::Integer(0),
        };

        Self::new(min, max, quant)
    }
}

/// Render any range the way `NumericRange` displays itself.
pub fn format_range(range: &dyn OptionRange) -> String {
    let mut out = format!("{}..={}", range.min(), range.max());
    if range.quant().as_f64() != 0.0 {
        out.push_str(&format!(" step {}", range.quant()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(i: i64) -> NumericValue {
        NumericValue::Integer(i)
    }

    #[test]
    fn test_range_validation() {
        assert!(NumericRange::new(int(75), int(1200), int(1)).is_ok());
        assert!(NumericRange::new(int(5), int(5), int(0)).is_ok());
        assert!(matches!(
            NumericRange::new(int(10), int(1), int(0)),
            Err(RangeError::Inverted(_, _))
        ));
        assert!(matches!(
            NumericRange::new(int(0), int(10), int(-1)),
            Err(RangeError::NegativeQuant(_))
        ));
    }

    #[test]
    fn test_range_contains() {
        let range = NumericRange::continuous(int(75), int(1200)).unwrap();
        assert!(range.contains(int(75)));
        assert!(range.contains(int(1200)));
        assert!(range.contains(NumericValue::Double(600.5)));
        assert!(!range.contains(int(74)));
        assert!(!range.contains(NumericValue::Double(1200.1)));
    }

    #[test]
    fn test_range_quantization() {
        let range: NumericRange = "0:10:2.5".parse().unwrap();
        assert!(range.is_quantized(NumericValue::Double(7.5)));
        assert!(range.is_quantized(int(10)));
        assert!(!range.is_quantized(int(3)));

        let fine: NumericRange = "-1:1:0.1".parse().unwrap();
        assert!(fine.is_quantized(NumericValue::Double(0.3)));
    }

    #[test]
    fn test_quantization_at_large_magnitudes() {
        let wide: NumericRange = "0:2000000000:1".parse().unwrap();
        assert!(!wide.is_quantized(NumericValue::Double(1500000000.5)));
        assert!(wide.is_quantized(NumericValue::Double(1500000000.0)));
        assert!(wide.is_quantized(int(1500000001)));

        // Both values round to the same f64, so only exact integer math tells them apart
        let huge: NumericRange = "0:9000000000000000000:7".parse().unwrap();
        assert!(huge.is_quantized(int(8999999999999999991)));
        assert!(!huge.is_quantized(int(8999999999999999992)));

        let full = NumericRange::new(int(i64::MIN), int(i64::MAX), int(1)).unwrap();
        assert!(full.is_quantized(int(i64::MAX)));
    }

    #[test]
    fn test_range_parsing() {
        let range: NumericRange = "75:1200".parse().unwrap();
        assert_eq!(range.min(), int(75));
        assert_eq!(range.quant(), int(0));

        assert!(matches!(
            "75".parse::<NumericRange>(),
            Err(RangeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "a:10".parse::<NumericRange>(),
            Err(RangeError::Value(_))
        ));
    }

    #[test]
    fn test_range_display() {
        let range: NumericRange = "75:1200:1".parse().unwrap();
        assert_eq!(range.to_string(), "75..=1200 step 1");
        assert_eq!(format_range(&range), range.to_string());

        let range: NumericRange = "0:1.5".parse().unwrap();
        assert_eq!(range.to_string(), "0..=1.5");
    }
}
