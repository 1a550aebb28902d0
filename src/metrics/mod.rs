//! @ai:module:intent Run aggregation, comparison table and metric group selection
//! @ai:module:layer application
//! @ai:module:public_api AggregateRecord, ApproachRuns, RunAggregator, ComparisonTable, MetricGroup, MetricGroupSelector

pub mod aggregator;
pub mod group;
pub mod table;
pub mod types;

pub use aggregator::{RunAggregator, RunAggregatorTrait};
pub use group::{MetricCategory, MetricGroup, MetricGroupSelector};
pub use table::{ComparisonTable, MIN_APPROACHES};
pub use types::{AggregateRecord, ApproachRuns};
