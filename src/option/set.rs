//! Ordered collections of options.
//!
//! `OptionSet` owns its options and hands out their indices in insertion
//! order, the way a device enumerates its option descriptors.

use super::fixed::FixedScanOption;
use super::spec::OptionSpec;
use super::ScanOption;
use crate::error::{OptionError, OptionResult};
use crate::types::NumericValue;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// The options of one device, addressable by name or index.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<FixedScanOption>,
    by_name: HashMap<String, usize>,
}

impl OptionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from parsed definitions, in order.
    pub fn from_specs(specs: &[OptionSpec]) -> OptionResult<Self> {
        let mut set = Self::new();
        for spec in specs {
            set.insert_spec(spec)?;
        }
        Ok(set)
    }

    /// Add an integer option; its index is the current length of the set.
    pub fn push(
        &mut self,
        fixed_value: i64,
        name: impl Into<String>,
    ) -> OptionResult<&mut FixedScanOption> {
        let name = name.into();
        if name.is_empty() {
            return Err(OptionError::EmptyName);
        }
        if self.by_name.contains_key(&name) {
            return Err(OptionError::DuplicateName(name));
        }

        let index = self.options.len();
        debug!(option = %name, index, fixed_value, "adding option");
        self.by_name.insert(name.clone(), index);
        self.options.push(FixedScanOption::new(fixed_value, name, index));

        Ok(&mut self.options[index])
    }

    /// Add an option described by `spec`, attaching its constraints.
    pub fn insert_spec(&mut self, spec: &OptionSpec) -> OptionResult<&mut FixedScanOption> {
        let option = self.push(spec.value.as_i64(), spec.name.as_str())?;

        if let NumericValue::Double(d) = spec.value {
            option.set_double_value(d);
        }
        if let Some(range) = spec.range {
            option.set_range_constraint(Arc::new(range));
        }
        if let Some(values) = &spec.allowed {
            option.set_numeric_constraints(Arc::from(values.as_slice()));
        }

        Ok(option)
    }

    /// Look up an option by name.
    pub fn get(&self, name: &str) -> Option<&FixedScanOption> {
        self.by_name.get(name).map(|&i| &self.options[i])
    }

    /// Look up an option by name for modification.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FixedScanOption> {
        let index = *self.by_name.get(name)?;
        self.options.get_mut(index)
    }

    /// Like [`get`](Self::get), but a missing option is an error.
    pub fn require(&self, name: &str) -> OptionResult<&FixedScanOption> {
        self.get(name).ok_or_else(|| OptionError::NotFound(name.to_string()))
    }

    /// Look up an option by index.
    pub fn by_index(&self, index: usize) -> Option<&FixedScanOption> {
        self.options.get(index)
    }

    /// Iterate in index order.
    pub fn iter(&self) -> impl Iterator<Item = &FixedScanOption> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Names in index order.
    pub fn names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name()).collect()
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a FixedScanOption;
    type IntoIter = std::slice::Iter<'a, FixedScanOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.options.iter()
    }
}
