//! @ai:module:intent Metric categories and column selection for charts
//! @ai:module:layer domain
//! @ai:module:public_api MetricCategory, MetricGroup, MetricGroupSelector
//! @ai:module:stateless true

use crate::metrics::table::ComparisonTable;
use crate::record::{CircuitCounter, APPROACH_COLUMN};

/// @ai:intent Chartable category of comparable columns
/// @ai:effects pure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricCategory {
    Time,
    Memory,
    Cpu,
    Circuit,
    FileSize,
}

impl MetricCategory {
    pub const ALL: [MetricCategory; 5] = [
        MetricCategory::Time,
        MetricCategory::Memory,
        MetricCategory::Cpu,
        MetricCategory::Circuit,
        MetricCategory::FileSize,
    ];

    /// @ai:effects pure
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricCategory::Time => "Time",
            MetricCategory::Memory => "Memory",
            MetricCategory::Cpu => "CPU",
            MetricCategory::Circuit => "Circuit",
            MetricCategory::FileSize => "File Size",
        }
    }

    /// @ai:intent Built-in group definition for this category
    /// @ai:effects pure
    pub fn group(&self) -> MetricGroup {
        match self {
            MetricCategory::Time => {
                MetricGroup::new(*self, "Time (", "Execution Time", "Time (ms)", "execution_time")
            }
            MetricCategory::Memory => MetricGroup::new(
                *self,
                "Max Memory (",
                "Peak Memory Usage",
                "Memory (MB)",
                "peak_memory",
            ),
            MetricCategory::Cpu => {
                MetricGroup::new(*self, "Max CPU (", "Peak CPU Usage", "CPU (%)", "peak_cpu")
            }
            // I/O counters stay in the table but are not charted.
            MetricCategory::Circuit => {
                MetricGroup::new(*self, "Circuit:", "Circuit Details", "Count", "circuit_details")
                    .excluding([
                        CircuitCounter::PublicInputs.label(),
                        CircuitCounter::PrivateInputsTotal.label(),
                        CircuitCounter::PrivateInputsWitness.label(),
                        CircuitCounter::PublicOutputs.label(),
                    ])
            }
            MetricCategory::FileSize => MetricGroup::new(
                *self,
                "File Size:",
                "Artifact File Sizes",
                "Size",
                "artifact_sizes",
            ),
        }
    }
}

impl std::fmt::Display for MetricCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent Prefix rule, exclusions and presentation parameters for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct MetricGroup {
    pub category: MetricCategory,
    pub prefix: String,
    pub exclude: Vec<String>,
    pub title: String,
    pub y_label: String,
    /// Stem of the output file name
    pub output_id: String,
}

impl MetricGroup {
    /// @ai:effects pure
    pub fn new(
        category: MetricCategory,
        prefix: &str,
        title: &str,
        y_label: &str,
        output_id: &str,
    ) -> Self {
        Self {
            category,
            prefix: prefix.to_string(),
            exclude: Vec::new(),
            title: title.to_string(),
            y_label: y_label.to_string(),
            output_id: output_id.to_string(),
        }
    }

    /// @ai:intent Add exact labels to drop even when they match the prefix
    /// @ai:effects pure
    pub fn excluding<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude.extend(labels.into_iter().map(Into::into));
        self
    }

    /// @ai:intent The five built-in chart groups in output order
    /// @ai:effects pure
    pub fn builtin() -> Vec<MetricGroup> {
        MetricCategory::ALL.iter().map(MetricCategory::group).collect()
    }

    /// @ai:effects pure
    pub fn matches(&self, label: &str) -> bool {
        label != APPROACH_COLUMN
            && label.starts_with(&self.prefix)
            && !self.exclude.iter().any(|e| e == label)
    }
}

/// @ai:intent Selects the table columns a metric group charts
pub struct MetricGroupSelector;

impl MetricGroupSelector {
    /// @ai:intent Create a new selector
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Matching column labels in table order; empty when nothing matches
    /// @ai:effects pure
    pub fn select(&self, table: &ComparisonTable, group: &MetricGroup) -> Vec<String> {
        table
            .columns()
            .iter()
            .filter(|label| group.matches(label))
            .cloned()
            .collect()
    }
}

impl Default for MetricGroupSelector {
    fn default() -> Self {
        Self::new()
    }
}
