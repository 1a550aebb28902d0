//! @ai:module:intent CLI for charting circuit benchmark metrics across approaches
//! @ai:module:layer presentation

use anyhow::Result;
use circuit_bench::{
    build_comparison,
    config::{ReportConfig, DEFAULT_CONFIG_FILE},
    ApproachRuns, ComparisonTable, Error, InputCollector, MetricGroup, PlottersRenderer,
    RecordLoader, ReportGenerator, ReportSummary,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "circuit-bench")]
#[command(about = "Compare circuit benchmark metrics across approaches")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for charts
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Minimum number of approaches required to build a comparison
    #[arg(long, global = true)]
    min_approaches: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart individual metrics files, one run each
    Files {
        /// Metrics JSON files
        #[arg(required = true, num_args = 1..)]
        paths: Vec<PathBuf>,
    },

    /// Chart two approach directories, averaging the runs in each
    Runs {
        /// Exactly two directories of metrics_*.json files
        #[arg(required = true, num_args = 2)]
        dirs: Vec<PathBuf>,
    },

    /// Write the default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        path: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("circuit_bench=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            init_config(path)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Files { paths } => {
            let config = load_config(&cli)?;
            let approaches = collector(&config)?.collect_files(paths)?;
            run_report(&config, &approaches)
        }
        Commands::Runs { dirs } => {
            let config = load_config(&cli)?;
            let approaches = collector(&config)?.collect_directories(dirs)?;
            run_report(&config, &approaches)
        }
    }
}

/// @ai:intent Input collector using the configured run file pattern
/// @ai:effects pure
fn collector(config: &ReportConfig) -> Result<InputCollector<RecordLoader>> {
    Ok(InputCollector::new(RecordLoader::new(), config.discovery.pattern()?))
}

/// @ai:intent Build the comparison table and write every chart
/// @ai:effects fs:write, io
fn run_report(config: &ReportConfig, approaches: &[ApproachRuns]) -> Result<ExitCode> {
    let table = match build_comparison(approaches, config.table.min_approaches) {
        Ok(table) => table,
        Err(e @ (Error::InsufficientData { .. } | Error::DuplicateApproach { .. })) => {
            tracing::error!("{}. No charts generated.", e);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e.into()),
    };

    print_table_summary(&table);

    let reporter = ReportGenerator::new(PlottersRenderer::new(config.chart.clone()));
    let summary =
        reporter.generate_all(&table, &MetricGroup::builtin(), &config.paths.results_dir)?;

    print_report_summary(&summary);
    Ok(ExitCode::SUCCESS)
}

/// @ai:intent Load configuration and apply command-line overrides
/// @ai:effects fs:read
fn load_config(cli: &Cli) -> Result<ReportConfig> {
    let mut config = ReportConfig::load_or_default(cli.config.as_deref())?;

    if let Some(output) = &cli.output {
        config.paths.results_dir = output.clone();
    }

    if let Some(min) = cli.min_approaches {
        config.table.min_approaches = min;
    }

    config.validate()?;
    Ok(config)
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(path: &std::path::Path) -> Result<()> {
    let config = ReportConfig::default();
    config.save(path)?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

/// @ai:intent Print approaches in the comparison to console
/// @ai:effects io
fn print_table_summary(table: &ComparisonTable) {
    println!();
    println!("Comparison Table");
    println!("================");
    println!();
    println!("{:<30} {:>6} {:>8}  {}", "Approach", "Runs", "Metrics", "Run span");
    println!("{}", "-".repeat(80));

    for row in table.rows() {
        let span = match (row.first_run(), row.last_run()) {
            (Some(first), Some(last)) if first == last => first.format("%Y-%m-%d %H:%M").to_string(),
            (Some(first), Some(last)) => format!(
                "{} .. {}",
                first.format("%Y-%m-%d %H:%M"),
                last.format("%Y-%m-%d %H:%M")
            ),
            _ => "-".to_string(),
        };

        println!(
            "{:<30} {:>6} {:>8}  {}",
            row.approach(),
            row.runs(),
            row.field_count(),
            span
        );
    }

    println!();
    println!("Columns: {}", table.columns().len());
    println!();
}

/// @ai:intent Print generated charts and skipped categories
/// @ai:effects io
fn print_report_summary(summary: &ReportSummary) {
    println!("Generated charts:");

    for path in &summary.generated {
        println!("  - {}", path.display());
    }

    if !summary.skipped.is_empty() {
        let skipped: Vec<_> = summary.skipped.iter().map(|c| c.as_str()).collect();
        println!("Skipped (no matching columns): {}", skipped.join(", "));
    }

    println!();
}
