//! Fixed-schema feature row fed to the classifier

use std::collections::HashMap;

/// Single-row numeric feature table matching the training schema
///
/// Every column is initialized to zero on construction, so a built row never
/// contains a missing value. Rows are created fresh per prediction request
/// and discarded immediately after use.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<String>,
    values: Vec<f64>,
    index: HashMap<String, usize>,
}

impl FeatureRow {
    /// Allocate a row with every column in `columns` set to zero
    pub fn zeroed(columns: &[String]) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect();
        Self {
            columns: columns.to_vec(),
            values: vec![0.0; columns.len()],
            index,
        }
    }

    /// Assign a value to a column; returns false when the column is absent
    pub fn set(&mut self, column: &str, value: f64) -> bool {
        match self.index.get(column) {
            Some(&i) => {
                self.values[i] = value;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, column: &str) -> Option<f64> {
        self.index.get(column).map(|&i| self.values[i])
    }

    /// Column names in schema order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// Columns holding NaN or infinite values
    ///
    /// A freshly built row cannot contain them, but artifact-borne values
    /// (imputation constants) are not under this crate's control.
    pub fn non_finite_columns(&self) -> Vec<String> {
        self.columns
            .iter()
            .zip(&self.values)
            .filter(|(_, v)| !v.is_finite())
            .map(|(name, _)| name.clone())
            .collect()
    }
}
