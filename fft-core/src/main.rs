//! interval-spectrum - Command-line entry point
//!
//! `analyze <file>` runs the full pipeline: read samples, remove mean,
//! zero-pad, FFT, print significant magnitude bins.

use anyhow::{bail, Context, Result};
use interval_spectrum::{read_samples, AnalyzerConfig, SpectrumAnalyzer};
use std::path::Path;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn usage(program: &str) -> String {
    format!(
        "Usage: {program} analyze <data-file>\n\
         \x20 Runs an FFT over the numeric sequence (one value per line) and\n\
         \x20 prints the magnitude spectrum for frequency bins 1 to N/2-1.\n\
         Example: {program} analyze intervals.txt"
    )
}

fn run_analyze(path: &Path) -> Result<()> {
    let config = AnalyzerConfig::default();
    let samples = read_samples(path, config.max_points)
        .with_context(|| format!("cannot read data from {}", path.display()))?;

    if samples.is_empty() {
        bail!("no samples in {}", path.display());
    }

    let threshold = config.threshold;
    let analyzer = SpectrumAnalyzer::new(config);
    let spectrum = analyzer.analyze(&samples);
    print!("{}", spectrum.render_report(threshold));

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("interval-spectrum");

    match args.get(1).map(String::as_str) {
        Some("analyze") => {
            let Some(path) = args.get(2) else {
                eprintln!("Error: analyze requires a file path");
                eprintln!("{}", usage(program));
                return ExitCode::FAILURE;
            };
            match run_analyze(Path::new(path)) {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("Error: {err:#}");
                    ExitCode::FAILURE
                }
            }
        }
        Some("help" | "--help") => {
            println!("{}", usage(program));
            ExitCode::SUCCESS
        }
        Some(other) => {
            eprintln!("Unknown command: {other}");
            eprintln!("{}", usage(program));
            ExitCode::FAILURE
        }
        None => {
            eprintln!("{}", usage(program));
            ExitCode::FAILURE
        }
    }
}
