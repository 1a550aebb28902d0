//! @ai:module:intent Cross-approach comparison table
//! @ai:module:layer domain
//! @ai:module:public_api ComparisonTable, MIN_APPROACHES
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::types::AggregateRecord;
use crate::record::APPROACH_COLUMN;
use std::collections::HashSet;

/// Fewest approaches for which a comparison is meaningful.
pub const MIN_APPROACHES: usize = 2;

/// @ai:intent One row per approach, columns are the union of all rows' fields
/// @ai:effects pure
#[derive(Debug, Clone)]
pub struct ComparisonTable {
    columns: Vec<String>,
    rows: Vec<AggregateRecord>,
}

impl ComparisonTable {
    /// @ai:intent Assemble aggregates into a table
    /// @ai:pre approach names are unique
    /// @ai:post at least `min_approaches` rows
    /// @ai:effects pure
    pub fn build(aggregates: Vec<AggregateRecord>, min_approaches: usize) -> Result<Self> {
        let mut seen_approaches = HashSet::new();

        for aggregate in &aggregates {
            if !seen_approaches.insert(aggregate.approach()) {
                return Err(Error::DuplicateApproach {
                    approach: aggregate.approach().to_string(),
                });
            }
        }

        if aggregates.len() < min_approaches {
            return Err(Error::InsufficientData {
                found: aggregates.len(),
                required: min_approaches,
            });
        }

        let mut columns: Vec<String> = Vec::new();
        let mut seen_columns: HashSet<String> = HashSet::new();

        for aggregate in &aggregates {
            for (label, _) in aggregate.fields() {
                if seen_columns.insert(label.to_string()) {
                    columns.push(label.to_string());
                }
            }
        }

        Ok(Self {
            columns,
            rows: aggregates,
        })
    }

    /// @ai:intent Metric columns in first-seen order, without `Approach`
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// @ai:intent Full header with `Approach` first
    /// @ai:effects pure
    pub fn header(&self) -> Vec<&str> {
        std::iter::once(APPROACH_COLUMN)
            .chain(self.columns.iter().map(String::as_str))
            .collect()
    }

    pub fn rows(&self) -> &[AggregateRecord] {
        &self.rows
    }

    /// @ai:effects pure
    pub fn approaches(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(AggregateRecord::approach)
    }

    /// @ai:intent Cell value, absent when the approach never reported the field
    /// @ai:effects pure
    pub fn value(&self, approach: &str, label: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|r| r.approach() == approach)
            .and_then(|r| r.get(label))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
