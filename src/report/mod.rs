//! @ai:module:intent Chart report generation for comparison tables
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, ReportSummary, ChartOutcome, ChartRendererTrait, PlottersRenderer, ChartData, LongRow

pub mod charts;
pub mod projection;

pub use charts::{ChartRendererTrait, PlottersRenderer};
pub use projection::{long_rows, ChartData, LongRow};

use crate::metrics::{ComparisonTable, MetricCategory, MetricGroup, MetricGroupSelector};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// @ai:intent Result of attempting one chart
#[derive(Debug, Clone, PartialEq)]
pub enum ChartOutcome {
    Generated(PathBuf),
    /// No table column matched the group
    Skipped,
}

/// @ai:intent Charts produced and categories skipped in one report run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSummary {
    pub generated: Vec<PathBuf>,
    pub skipped: Vec<MetricCategory>,
}

/// @ai:intent Selects columns per metric group and renders each chart
pub struct ReportGenerator<R: ChartRendererTrait> {
    selector: MetricGroupSelector,
    renderer: R,
}

impl<R: ChartRendererTrait> ReportGenerator<R> {
    /// @ai:intent Create a report generator drawing with `renderer`
    /// @ai:effects pure
    pub fn new(renderer: R) -> Self {
        Self {
            selector: MetricGroupSelector::new(),
            renderer,
        }
    }

    /// @ai:intent Output path of a group's chart under `output_dir`
    /// @ai:effects pure
    pub fn chart_path(group: &MetricGroup, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}_comparison.png", group.output_id))
    }

    /// @ai:intent Render one group's chart, or skip it when no column matches
    /// @ai:effects fs:write
    pub fn generate_chart(
        &self,
        table: &ComparisonTable,
        group: &MetricGroup,
        output_dir: &Path,
    ) -> Result<ChartOutcome> {
        let columns = self.selector.select(table, group);

        if columns.is_empty() {
            tracing::warn!("No columns found for {}. Skipping plot.", group.category);
            return Ok(ChartOutcome::Skipped);
        }

        let data = ChartData::from_table(table, &columns, &group.title, &group.y_label);
        let path = Self::chart_path(group, output_dir);

        self.renderer
            .render(&data, &path)
            .with_context(|| format!("Failed to render {}", path.display()))?;

        tracing::info!(
            "Generated {} ({} metrics, {} bars)",
            path.display(),
            columns.len(),
            data.rows.len()
        );
        Ok(ChartOutcome::Generated(path))
    }

    /// @ai:intent Render every group into `output_dir`
    /// @ai:effects fs:write
    pub fn generate_all(
        &self,
        table: &ComparisonTable,
        groups: &[MetricGroup],
        output_dir: &Path,
    ) -> Result<ReportSummary> {
        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("Failed to create results directory {}", output_dir.display())
        })?;

        let mut summary = ReportSummary::default();

        for group in groups {
            match self.generate_chart(table, group, output_dir)? {
                ChartOutcome::Generated(path) => summary.generated.push(path),
                ChartOutcome::Skipped => summary.skipped.push(group.category),
            }
        }

        Ok(summary)
    }
}

impl Default for ReportGenerator<PlottersRenderer> {
    fn default() -> Self {
        Self::new(PlottersRenderer::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{AggregateRecord, MIN_APPROACHES};
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Keeps chart data instead of drawing it
    #[derive(Default)]
    struct RecordingRenderer {
        charts: Mutex<Vec<(ChartData, PathBuf)>>,
    }

    impl ChartRendererTrait for RecordingRenderer {
        fn render(&self, data: &ChartData, output_path: &Path) -> Result<()> {
            self.charts
                .lock()
                .unwrap()
                .push((data.clone(), output_path.to_path_buf()));
            Ok(())
        }
    }

    struct FailingRenderer;

    impl ChartRendererTrait for FailingRenderer {
        fn render(&self, _data: &ChartData, _output_path: &Path) -> Result<()> {
            anyhow::bail!("backend unavailable")
        }
    }

    fn table() -> ComparisonTable {
        ComparisonTable::build(
            vec![
                AggregateRecord::new(
                    "Baseline",
                    2,
                    vec![
                        ("Time (compilation)".to_string(), 200.0),
                        ("Max CPU (compilation) (%)".to_string(), 90.0),
                    ],
                ),
                AggregateRecord::new(
                    "Optimized",
                    1,
                    vec![("Time (compilation)".to_string(), 50.0)],
                ),
            ],
            MIN_APPROACHES,
        )
        .unwrap()
    }

    #[test]
    fn test_generate_all_renders_matching_groups() {
        let temp = TempDir::new().unwrap();
        let generator = ReportGenerator::new(RecordingRenderer::default());

        let summary = generator
            .generate_all(&table(), &MetricGroup::builtin(), temp.path())
            .unwrap();

        assert_eq!(
            summary.generated,
            vec![
                temp.path().join("execution_time_comparison.png"),
                temp.path().join("peak_cpu_comparison.png"),
            ]
        );
        assert_eq!(
            summary.skipped,
            vec![MetricCategory::Memory, MetricCategory::Circuit, MetricCategory::FileSize]
        );

        let charts = generator.renderer.charts.lock().unwrap();
        assert_eq!(charts.len(), 2);
        assert_eq!(charts[0].0.metrics, vec!["Time (compilation)"]);
        assert_eq!(charts[0].0.rows.len(), 2);
        assert_eq!(charts[1].0.rows.len(), 1);
    }

    #[test]
    fn test_empty_selection_does_not_render() {
        let temp = TempDir::new().unwrap();
        let generator = ReportGenerator::new(RecordingRenderer::default());

        let outcome = generator
            .generate_chart(&table(), &MetricCategory::FileSize.group(), temp.path())
            .unwrap();

        assert_eq!(outcome, ChartOutcome::Skipped);
        assert!(generator.renderer.charts.lock().unwrap().is_empty());
    }

    #[test]
    fn test_render_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let generator = ReportGenerator::new(FailingRenderer);

        let err = generator
            .generate_all(&table(), &MetricGroup::builtin(), temp.path())
            .unwrap_err();
        assert!(err.to_string().contains("execution_time_comparison.png"));
    }

    #[test]
    fn test_generate_all_creates_output_dir() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("results").join("run");
        let generator = ReportGenerator::new(RecordingRenderer::default());

        generator.generate_all(&table(), &[], &nested).unwrap();
        assert!(nested.is_dir());
    }
}
