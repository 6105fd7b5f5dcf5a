pub mod config;
pub mod config_source;
pub mod error;
pub mod random_source;
pub mod reporter;
pub mod types;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use config_source::ConfigSource;
use error::Error;
use random_source::RandomSource;
use reporter::Reporter;
use types::{GraphSource, SourceKind};

/// Runs the matrix-graph algorithm suite over configured or random graphs.
#[derive(Parser)]
#[command(name = "runner")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Where the graphs come from
    #[arg(value_enum, default_value_t = SourceKind::Config)]
    source: SourceKind,

    /// Configuration file (defaults to crates/runner/Config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the random source, overriding the configured one
    #[arg(long)]
    seed: Option<u64>,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let config = config::load_config(&config_path)?;
    debug!(path = %config_path.display(), "configuration loaded");

    let source = build_source(cli.source, &config, cli.seed)?;
    let reporter = Reporter::new(&config.report);

    let graphs = source.graphs()?;
    for (i, named) in graphs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print!("{}", reporter.report(named)?);
    }

    Ok(())
}

/// Picks the graph source named on the command line.
fn build_source(
    kind: SourceKind,
    config: &config::Config,
    seed: Option<u64>,
) -> Result<Box<dyn GraphSource>, Error> {
    match kind {
        SourceKind::Config => {
            debug!("using graphs from configuration");
            Ok(Box::new(ConfigSource::new(config.graphs.clone())))
        }
        SourceKind::Random => {
            debug!("using random graph source");
            Ok(Box::new(RandomSource::new(config.random.clone(), seed)?))
        }
    }
}
