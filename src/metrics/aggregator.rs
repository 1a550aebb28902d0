//! @ai:module:intent Average repeated runs of one approach into a single record
//! @ai:module:layer application
//! @ai:module:public_api RunAggregator, RunAggregatorTrait
//! @ai:module:stateless true

use crate::error::{Error, Result};
use crate::metrics::types::{AggregateRecord, ApproachRuns};
use crate::record::FlatRecord;
use std::collections::HashMap;

/// @ai:intent Trait for run aggregation
pub trait RunAggregatorTrait: Send + Sync {
    /// @ai:intent Average the runs of one approach
    fn aggregate(&self, approach: &str, records: &[FlatRecord]) -> Result<AggregateRecord>;
}

/// @ai:intent Computes per-field means across runs
pub struct RunAggregator;

impl RunAggregator {
    /// @ai:intent Create a new run aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Aggregate every approach, skipping those with no runs
    /// @ai:effects pure
    pub fn aggregate_all(&self, approaches: &[ApproachRuns]) -> Result<Vec<AggregateRecord>> {
        let mut aggregates = Vec::with_capacity(approaches.len());

        for runs in approaches {
            match self.aggregate(&runs.approach, &runs.records) {
                Ok(aggregate) => {
                    tracing::info!(
                        "Aggregated {} run(s) for {} ({} fields)",
                        aggregate.runs(),
                        aggregate.approach(),
                        aggregate.field_count()
                    );
                    aggregates.push(aggregate);
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("Skipping approach {}: {}", runs.approach, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(aggregates)
    }
}

impl Default for RunAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// Running sum and sample count for one field.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    sum: f64,
    count: u32,
}

impl Accumulator {
    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

impl RunAggregatorTrait for RunAggregator {
    /// @ai:intent Mean of each field over the runs where it is present
    /// @ai:pre every record belongs to `approach`
    /// @ai:effects pure
    fn aggregate(&self, approach: &str, records: &[FlatRecord]) -> Result<AggregateRecord> {
        if records.is_empty() {
            return Err(Error::EmptyApproach {
                approach: approach.to_string(),
            });
        }

        if let Some(stray) = records.iter().find(|r| r.approach() != approach) {
            return Err(Error::MixedApproaches {
                expected: approach.to_string(),
                found: stray.approach().to_string(),
            });
        }

        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, Accumulator> = HashMap::new();

        for record in records {
            for (label, value) in record.fields() {
                let acc = totals.entry(label.to_string()).or_insert_with(|| {
                    order.push(label.to_string());
                    Accumulator::default()
                });
                acc.sum += value;
                acc.count += 1;
            }
        }

        let fields = order
            .into_iter()
            .filter_map(|label| totals.get(&label).map(|acc| (label.clone(), acc.mean())))
            .collect();

        let first_run = records.iter().filter_map(FlatRecord::timestamp).min();
        let last_run = records.iter().filter_map(FlatRecord::timestamp).max();

        Ok(AggregateRecord::new(approach, records.len(), fields).with_run_span(first_run, last_run))
    }
}
