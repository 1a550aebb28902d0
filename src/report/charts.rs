//! @ai:module:intent Grouped bar chart rendering for metric comparisons
//! @ai:module:layer infrastructure
//! @ai:module:public_api ChartRendererTrait, PlottersRenderer
//! @ai:module:stateless true

use crate::config::ChartConfig;
use crate::report::projection::ChartData;
use anyhow::Result;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::path::Path;

/// Share of each x-axis slot covered by its group of bars.
const BAR_GROUP_WIDTH: f64 = 0.8;

const BAR_GAP: f64 = 0.02;

const X_LABEL_FONT_SIZE: u32 = 14;

/// Average glyph advance as a share of the font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

const X_LABEL_PADDING: u32 = 20;

/// Viridis samples, dark to light.
const PALETTE: &[RGBColor] = &[
    RGBColor(68, 1, 84),
    RGBColor(59, 82, 139),
    RGBColor(33, 145, 140),
    RGBColor(94, 201, 98),
    RGBColor(253, 231, 37),
    RGBColor(72, 40, 120),
    RGBColor(42, 120, 142),
    RGBColor(170, 220, 50),
];

/// @ai:intent Trait for drawing one grouped bar chart to a file
pub trait ChartRendererTrait: Send + Sync {
    /// @ai:intent Render chart data to `output_path`
    fn render(&self, data: &ChartData, output_path: &Path) -> Result<()>;
}

/// @ai:intent Renders PNG charts with plotters
pub struct PlottersRenderer {
    config: ChartConfig,
}

impl PlottersRenderer {
    /// @ai:intent Create a renderer with the given image parameters
    /// @ai:effects pure
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl Default for PlottersRenderer {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

/// @ai:intent Color for the approach at `index` in legend order
/// @ai:effects pure
fn approach_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// @ai:intent Horizontal offset of an approach's bar from its group center
/// @ai:effects pure
fn bar_offset(index: usize, approaches: usize, bar_width: f64) -> f64 {
    (index as f64 - (approaches as f64 - 1.0) / 2.0) * bar_width
}

/// @ai:intent Height of the rotated x label area needed by the longest metric label
/// @ai:post never exceeds half the image height
/// @ai:effects pure
fn x_label_area_size(metrics: &[String], image_height: u32) -> u32 {
    let longest = metrics.iter().map(|m| m.chars().count()).max().unwrap_or(0);
    let text = (longest as f64 * X_LABEL_FONT_SIZE as f64 * GLYPH_WIDTH_RATIO).ceil() as u32;

    (text + X_LABEL_PADDING)
        .max(X_LABEL_PADDING * 3)
        .min(image_height / 2)
}

impl ChartRendererTrait for PlottersRenderer {
    /// @ai:intent Draw metrics on the x axis with one colored bar per approach
    /// @ai:effects fs:write
    fn render(&self, data: &ChartData, output_path: &Path) -> Result<()> {
        let root = BitMapBackend::new(output_path, (self.config.width, self.config.height))
            .into_drawing_area();
        root.fill(&WHITE)?;

        let font = self.config.font_family.as_str();
        let groups = data.metrics.len().max(1);
        let (min, max) = data.value_range();
        let headroom = (max - min) * 0.1;
        let y_min = if min < 0.0 { min - headroom } else { 0.0 };
        let y_max = max + headroom;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{} Comparison", data.title), (font, 30))
            .margin(20)
            .x_label_area_size(x_label_area_size(&data.metrics, self.config.height))
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..(groups as f64 - 0.5), y_min..y_max)?;

        let metrics = &data.metrics;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(groups)
            .x_label_formatter(&|x: &f64| {
                let idx = x.round();

                if idx < 0.0 || (x - idx).abs() > 0.3 {
                    return String::new();
                }
                metrics.get(idx as usize).cloned().unwrap_or_default()
            })
            .x_label_style((font, X_LABEL_FONT_SIZE).into_font().transform(FontTransform::Rotate90))
            .x_desc("Metric")
            .y_desc(data.y_label.as_str())
            .axis_desc_style((font, 18))
            .draw()?;

        let approaches = data.approaches.len().max(1);
        let bar_width = BAR_GROUP_WIDTH / approaches as f64;

        for (index, approach) in data.approaches.iter().enumerate() {
            let color = approach_color(index);
            let offset = bar_offset(index, approaches, bar_width);

            let bars = data
                .rows
                .iter()
                .filter(|row| row.approach == *approach)
                .filter_map(|row| {
                    let center = data.metric_index(&row.metric)? as f64 + offset;

                    Some(Rectangle::new(
                        [
                            (center - bar_width / 2.0 + BAR_GAP, 0.0),
                            (center + bar_width / 2.0 - BAR_GAP, row.value),
                        ],
                        color.filled(),
                    ))
                });

            chart
                .draw_series(bars)?
                .label(approach.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((font, 14))
            .draw()?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::projection::LongRow;
    use tempfile::TempDir;

    #[test]
    fn test_bar_offsets_are_centered() {
        let width = BAR_GROUP_WIDTH / 2.0;
        let left = bar_offset(0, 2, width);
        let right = bar_offset(1, 2, width);

        assert!((left + right).abs() < 1e-9);
        assert!((right - left - width).abs() < 1e-9);
        assert!(bar_offset(0, 1, BAR_GROUP_WIDTH).abs() < 1e-9);
    }

    #[test]
    fn test_x_label_area_fits_longest_label() {
        let metrics = vec![
            "File Size: Proof (KB)".to_string(),
            "File Size: Solidity Verifier (KB)".to_string(),
        ];

        let size = x_label_area_size(&metrics, 700);
        assert!(size >= 33 * 8, "label area {} too small", size);
        assert!(size <= 350);
        assert!(size > x_label_area_size(&metrics[..1], 700));
    }

    #[test]
    fn test_x_label_area_is_bounded_by_image() {
        let metrics = vec!["x".repeat(200)];
        assert_eq!(x_label_area_size(&metrics, 400), 200);
        assert_eq!(x_label_area_size(&[], 700), 60);
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(approach_color(0).rgb(), approach_color(PALETTE.len()).rgb());
        assert_ne!(approach_color(0).rgb(), approach_color(1).rgb());
    }

    #[test]
    #[ignore = "needs a system sans-serif font for text rendering"]
    fn test_render_writes_png() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("execution_time_comparison.png");
        let data = ChartData {
            title: "Execution Time".to_string(),
            y_label: "Time (ms)".to_string(),
            metrics: vec!["Time (compilation)".to_string()],
            approaches: vec!["Baseline".to_string(), "Optimized".to_string()],
            rows: vec![
                LongRow {
                    approach: "Baseline".to_string(),
                    metric: "Time (compilation)".to_string(),
                    value: 200.0,
                },
                LongRow {
                    approach: "Optimized".to_string(),
                    metric: "Time (compilation)".to_string(),
                    value: 50.0,
                },
            ],
        };

        PlottersRenderer::default().render(&data, &output).unwrap();
        assert!(output.exists());
    }
}
