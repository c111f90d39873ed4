//! Branch predictor simulator CLI.
//!
//! This binary runs a branch trace through one of the predictors. It performs:
//! 1. **Configuration:** Built-in defaults, an optional JSON file, and a `strategy[:bits[:bits]]` selector.
//! 2. **Trace reading:** From a file, or from stdin when no path (or `-`) is given.
//! 3. **Reporting:** Prints the predictor and the misprediction statistics.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use bpsim_core::common::{SimError, TraceError};
use bpsim_core::config::{Config, PredictorConfig};
use bpsim_core::sim::{Simulator, TraceReader};

#[derive(Parser, Debug)]
#[command(
    name = "bpsim",
    author,
    version,
    about = "Trace-driven conditional branch predictor simulator",
    long_about = "Run a branch trace through a direction predictor and report the misprediction rate.\n\nEach trace line is `<hex pc> <0|1>`.\n\nExamples:\n  bpsim --predictor gshare:13 trace.txt\n  bzcat trace.bz2 | bpsim --predictor tournament:12:10\n  bpsim --config sweep.json --predictor custom trace.txt"
)]
struct Cli {
    /// Trace file; reads stdin when omitted or `-`.
    trace: Option<PathBuf>,

    /// Predictor selector: static, gshare[:H], tournament[:G[:L]] or custom[:S].
    #[arg(short, long)]
    predictor: Option<PredictorConfig>,

    /// JSON configuration file; `--predictor` overrides its predictor section.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every branch (pc, prediction, outcome).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    init_tracing(cli.verbose || config.sim.verbose);

    if let Err(e) = cmd_run(&config, cli.trace.as_ref()) {
        error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Builds the run configuration: defaults, then the JSON file, then the selector.
fn load_config(cli: &Cli) -> Result<Config, SimError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(predictor) = cli.predictor {
        config.predictor = predictor;
    }
    config.predictor.validate()?;
    Ok(config)
}

/// Installs the fmt subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "trace" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the trace through the configured predictor and prints the report.
fn cmd_run(config: &Config, trace: Option<&PathBuf>) -> Result<(), SimError> {
    let mut sim = Simulator::from_config(&config.predictor)?;

    let reader: Box<dyn BufRead> = match trace {
        Some(path) if path.as_os_str() != "-" => {
            let file = File::open(path).map_err(TraceError::from)?;
            Box::new(BufReader::new(file))
        }
        _ => Box::new(io::stdin().lock()),
    };

    println!("Predictor: {} ({})", config.predictor.strategy, config.predictor);
    println!("Storage:   {} bits", sim.predictor().storage_bits());

    let stats = sim.run(TraceReader::new(reader))?;
    stats.print();
    Ok(())
}
