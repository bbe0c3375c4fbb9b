//! Runs every selected sort on the configured inputs and prints how long each one took.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use classic_sorts::config::BenchConfig;

#[derive(Parser)]
#[command(name = "sort_bench", about = "Compare classic sorting algorithms by wall-clock time")]
struct Cli {
    /// Length of generated inputs.
    #[arg(long)]
    len: Option<usize>,

    /// Quicksort partition scheme, `hoare` or `lomuto`.
    #[arg(long)]
    scheme: Option<String>,

    /// Input pattern to generate, may be repeated. Defaults to the classic fixture and ascending
    /// input.
    #[arg(long = "pattern")]
    patterns: Vec<String>,

    /// Only run algorithms whose name matches this regex.
    #[arg(long)]
    filter: Option<String>,

    /// Seed for generated inputs.
    #[arg(long)]
    seed: Option<u64>,
}

fn build_config(cli: Cli) -> Result<BenchConfig, Box<dyn Error>> {
    let mut config = BenchConfig::from_env()?;

    if let Some(len) = cli.len {
        config = config.with_len(len)?;
    }
    if let Some(scheme) = cli.scheme {
        config.scheme = scheme.parse()?;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    for pattern in &cli.patterns {
        config = config.with_pattern(pattern)?;
    }
    if let Some(filter) = cli.filter {
        config = config.with_filter(&filter)?;
    }

    Ok(config)
}

fn run(config: &BenchConfig) -> Result<bool, Box<dyn Error>> {
    let mut all_sorted = true;

    for input in config.inputs() {
        println!("Testing the sorting algorithms on {}:", input.label);

        let mut expected = input.values.clone();
        expected.sort();

        for algorithm in config.algorithms() {
            let mut values = input.values.clone();
            let timing = algorithm.run(&mut values, config.scheme)?;
            println!("{timing}");

            if values != expected {
                error!(%algorithm, input = %input.label, "output is not sorted");
                all_sorted = false;
            }
        }

        println!();
    }

    Ok(all_sorted)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match build_config(Cli::parse()) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        len = config.len,
        scheme = %config.scheme,
        seed = config.seed,
        "starting sort comparison"
    );

    match run(&config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            error!("sort comparison failed: {err}");
            ExitCode::FAILURE
        }
    }
}
