//! @ai:module:intent Flat labeled form of one benchmark run
//! @ai:module:layer domain
//! @ai:module:public_api FlatRecord, APPROACH_COLUMN
//! @ai:module:stateless true

use chrono::{DateTime, Utc};

/// Name of the distinguished column that identifies a benchmarked configuration.
pub const APPROACH_COLUMN: &str = "Approach";

/// @ai:intent One run flattened into ordered (label, value) fields
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq)]
pub struct FlatRecord {
    approach: String,
    timestamp: Option<DateTime<Utc>>,
    fields: Vec<(String, f64)>,
}

impl FlatRecord {
    /// @ai:intent Create a record holding only its approach name
    /// @ai:effects pure
    pub fn new(approach: impl Into<String>) -> Self {
        Self {
            approach: approach.into(),
            timestamp: None,
            fields: Vec::new(),
        }
    }

    /// @ai:effects pure
    pub fn with_timestamp(mut self, timestamp: Option<DateTime<Utc>>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// @ai:intent Set a field, replacing any previous value under the same label
    /// @ai:effects pure
    pub fn insert(&mut self, label: impl Into<String>, value: f64) {
        let label = label.into();

        match self.fields.iter_mut().find(|(l, _)| *l == label) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((label, value)),
        }
    }

    /// @ai:effects pure
    pub fn approach(&self) -> &str {
        &self.approach
    }

    /// @ai:effects pure
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    /// @ai:effects pure
    pub fn get(&self, label: &str) -> Option<f64> {
        self.fields
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, v)| *v)
    }

    /// @ai:intent Numeric fields in insertion order
    /// @ai:effects pure
    pub fn fields(&self) -> impl Iterator<Item = (&str, f64)> {
        self.fields.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// @ai:intent Number of numeric fields, not counting the approach
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
