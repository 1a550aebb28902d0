//! @ai:module:intent Long-form projection of table columns for grouped bar charts
//! @ai:module:layer domain
//! @ai:module:public_api LongRow, ChartData, long_rows
//! @ai:module:stateless true

use crate::metrics::ComparisonTable;

/// @ai:intent One bar: an approach's value for one metric
#[derive(Debug, Clone, PartialEq)]
pub struct LongRow {
    pub approach: String,
    pub metric: String,
    pub value: f64,
}

/// @ai:intent Expand each table row into one row per selected column, skipping absent cells
/// @ai:effects pure
pub fn long_rows(table: &ComparisonTable, columns: &[String]) -> Vec<LongRow> {
    table
        .rows()
        .iter()
        .flat_map(move |row| {
            columns.iter().filter_map(move |column| {
                row.get(column).map(|value| LongRow {
                    approach: row.approach().to_string(),
                    metric: column.clone(),
                    value,
                })
            })
        })
        .collect()
}

/// @ai:intent Everything a renderer needs to draw one grouped bar chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub title: String,
    pub y_label: String,
    /// X-axis groups, in column order
    pub metrics: Vec<String>,
    /// Legend entries, in table order
    pub approaches: Vec<String>,
    pub rows: Vec<LongRow>,
}

impl ChartData {
    /// @ai:intent Project the selected columns of a table into chart data
    /// @ai:effects pure
    pub fn from_table(table: &ComparisonTable, columns: &[String], title: &str, y_label: &str) -> Self {
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            metrics: columns.to_vec(),
            approaches: table.approaches().map(str::to_string).collect(),
            rows: long_rows(table, columns),
        }
    }

    /// @ai:intent Index of a metric on the x axis
    /// @ai:effects pure
    pub fn metric_index(&self, metric: &str) -> Option<usize> {
        self.metrics.iter().position(|m| m == metric)
    }

    /// @ai:intent Value range to plot, always including zero
    /// @ai:effects pure
    pub fn value_range(&self) -> (f64, f64) {
        let (min, max) = self
            .rows
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), r| (lo.min(r.value), hi.max(r.value)));

        if max == min {
            (min, min + 1.0)
        } else {
            (min, max)
        }
    }
}
