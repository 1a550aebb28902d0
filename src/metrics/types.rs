//! @ai:module:intent Aggregated metric types
//! @ai:module:layer domain
//! @ai:module:public_api AggregateRecord, ApproachRuns
//! @ai:module:stateless true

use crate::record::FlatRecord;
use chrono::{DateTime, Utc};

/// @ai:intent All runs collected for one approach, before averaging
#[derive(Debug, Clone)]
pub struct ApproachRuns {
    pub approach: String,
    pub records: Vec<FlatRecord>,
}

impl ApproachRuns {
    /// @ai:effects pure
    pub fn new(approach: impl Into<String>) -> Self {
        Self {
            approach: approach.into(),
            records: Vec::new(),
        }
    }
}

/// @ai:intent Mean of every field across the runs of one approach
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRecord {
    approach: String,
    runs: usize,
    fields: Vec<(String, f64)>,
    first_run: Option<DateTime<Utc>>,
    last_run: Option<DateTime<Utc>>,
}

impl AggregateRecord {
    /// @ai:intent Create an aggregate from already averaged fields
    /// @ai:effects pure
    pub fn new(approach: impl Into<String>, runs: usize, fields: Vec<(String, f64)>) -> Self {
        Self {
            approach: approach.into(),
            runs,
            fields,
            first_run: None,
            last_run: None,
        }
    }

    /// @ai:effects pure
    pub fn with_run_span(
        mut self,
        first_run: Option<DateTime<Utc>>,
        last_run: Option<DateTime<Utc>>,
    ) -> Self {
        self.first_run = first_run;
        self.last_run = last_run;
        self
    }

    pub fn approach(&self) -> &str {
        &self.approach
    }

    /// Number of runs that contributed, including runs with no numeric fields.
    pub fn runs(&self) -> usize {
        self.runs
    }

    /// @ai:effects pure
    pub fn get(&self, label: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    /// @ai:intent Averaged fields in first-seen order
    /// @ai:effects pure
    pub fn fields(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), *v))
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn first_run(&self) -> Option<DateTime<Utc>> {
        self.first_run
    }

    pub fn last_run(&self) -> Option<DateTime<Utc>> {
        self.last_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_lookup() {
        let record = AggregateRecord::new(
            "Baseline",
            3,
            vec![("Time (compilation)".to_string(), 200.0)],
        );

        assert_eq!(record.approach(), "Baseline");
        assert_eq!(record.runs(), 3);
        assert_eq!(record.get("Time (compilation)"), Some(200.0));
        assert_eq!(record.get("Time (setup)"), None);
        assert_eq!(record.first_run(), None);
    }
}
