//! Textual option definitions.
//!
//! Supports formats like:
//! - Plain value: "resolution=300"
//! - Double value: "brightness=0.5"
//! - Range: "resolution=300,range=75:1200:1"
//! - Allowed list: "resolution=300,allowed=75|150|300"

use crate::types::{NumericRange, NumericValue, OptionRange, RangeError, ValueError};
use std::fmt;
use std::str::FromStr;

/// Error type for option definition parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SpecError {
    #[error("missing '=' in {0} (expected NAME=VALUE)")]
    MissingValue(String),
    #[error("option name cannot be empty")]
    EmptyName,
    #[error("unknown option attribute: {0}")]
    UnknownKey(String),
    #[error("empty allowed-value list")]
    EmptyList,
    #[error(transparent)]
    Value(#[from] ValueError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// A parsed option definition, ready to be added to an `OptionSet`.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionSpec {
    pub name: String,
    pub value: NumericValue,
    pub range: Option<NumericRange>,
    pub allowed: Option<Vec<NumericValue>>,
}

impl FromStr for OptionSpec {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(',');
        // split always yields at least one item
        let head = parts.next().unwrap_or_default();
        let Assignment { name, value } = head.parse()?;

        let mut spec = Self {
            name,
            value,
            range: None,
            allowed: None,
        };

        for part in parts {
            let (key, raw) = split_pair(part)?;
            match key {
                "range" => spec.range = Some(raw.parse()?),
                "allowed" => {
                    let values = raw
                        .split('|')
                        .filter(|v| !v.trim().is_empty())
                        .map(str::parse)
                        .collect::<Result<Vec<NumericValue>, _>>()?;
                    if values.is_empty() {
                        return Err(SpecError::EmptyList);
                    }
                    spec.allowed = Some(values);
                }
                other => return Err(SpecError::UnknownKey(other.to_string())),
            }
        }

        Ok(spec)
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;
        if let Some(range) = &self.range {
            write!(f, ",range={}:{}", range.min(), range.max())?;
            if range.quant().as_f64() != 0.0 {
                write!(f, ":{}", range.quant())?;
            }
        }
        if let Some(values) = &self.allowed {
            let joined: Vec<String> = values.iter().map(|v| v.to_string()).collect();
            write!(f, ",allowed={}", joined.join("|"))?;
        }
        Ok(())
    }
}

/// A `NAME=VALUE` pair used to propose a new value for an option.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub value: NumericValue,
}

impl FromStr for Assignment {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, raw) = split_pair(s)?;
        if name.is_empty() {
            return Err(SpecError::EmptyName);
        }
        Ok(Self {
            name: name.to_string(),
            value: raw.parse()?,
        })
    }
}

fn split_pair(s: &str) -> Result<(&str, &str), SpecError> {
    s.split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| SpecError::MissingValue(s.trim().to_string()))
}
