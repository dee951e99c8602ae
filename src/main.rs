use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use benchplot::{logging, run_viewer, BenchPlotError, PlotOptions, Report, ViewerConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OptionsPreset {
    /// Throughput against text size, log x-axis.
    Parallel,
    /// Throughput against time.
    Time,
}

/// Interactive throughput charts for benchmark reports.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Report files (JSON). With several reports, speed-over-time graphs are added.
    #[arg(required_unless_present = "dump_options")]
    reports: Vec<PathBuf>,

    /// Viewer configuration file (YAML or JSON).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter, overrides the configured level. `RUST_LOG` still wins.
    #[arg(long)]
    log_level: Option<String>,

    /// Print the chart options of a preset as JSON and exit.
    #[arg(long, value_enum)]
    dump_options: Option<OptionsPreset>,
}

fn run(cli: Cli, config: ViewerConfig) -> Result<(), BenchPlotError> {
    if let Some(preset) = cli.dump_options {
        let options = match preset {
            OptionsPreset::Parallel => PlotOptions::parallel(),
            OptionsPreset::Time => PlotOptions::speed_time(),
        };
        println!("{}", options.to_json()?);
        return Ok(());
    }

    let reports = cli
        .reports
        .iter()
        .map(|p| Report::load(p))
        .collect::<Result<Vec<_>, _>>()?;
    run_viewer(reports, config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => ViewerConfig::load(path),
        None => Ok(ViewerConfig::default()),
    };
    // no subscriber yet, so these go straight to stderr
    let config = match config.and_then(|c| {
        logging::init(cli.log_level.as_deref().unwrap_or(&c.log_level)).map(|()| c)
    }) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("benchplot: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
