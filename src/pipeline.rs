//! @ai:module:intent Wire collected runs through aggregation into a comparison table
//! @ai:module:layer application
//! @ai:module:public_api build_comparison

use crate::error::Result;
use crate::metrics::{ApproachRuns, ComparisonTable, RunAggregator};

/// @ai:intent Average each approach's runs and assemble the surviving aggregates
/// @ai:post table has at least `min_approaches` rows
/// @ai:effects pure
pub fn build_comparison(
    approaches: &[ApproachRuns],
    min_approaches: usize,
) -> Result<ComparisonTable> {
    let aggregates = RunAggregator::new().aggregate_all(approaches)?;
    ComparisonTable::build(aggregates, min_approaches)
}
