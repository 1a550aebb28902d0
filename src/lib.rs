//! @ai:module:intent Circuit benchmark metrics normalization, aggregation and charting
//! @ai:module:layer application
//! @ai:module:public_api config, error, input, metrics, pipeline, record, report

pub mod config;
pub mod error;
pub mod input;
pub mod metrics;
pub mod pipeline;
pub mod record;
pub mod report;

pub use config::ReportConfig;
pub use error::{Error, Result};
pub use input::InputCollector;
pub use metrics::{
    AggregateRecord, ApproachRuns, ComparisonTable, MetricCategory, MetricGroup,
    MetricGroupSelector, RunAggregator, RunAggregatorTrait,
};
pub use pipeline::build_comparison;
pub use record::{FlatRecord, RawRecord, RecordLoader, RecordLoaderTrait};
pub use report::{ChartOutcome, ChartRendererTrait, PlottersRenderer, ReportGenerator, ReportSummary};
