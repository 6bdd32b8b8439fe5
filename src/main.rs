use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lift_tree::driver::{self, DriverConfig, QueryMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "lift-tree", about = "Distance and LCA queries on a weighted tree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Treat node numbers in the input as 0-based instead of 1-based.
    #[arg(long, global = true)]
    zero_based: bool,

    /// Log build progress to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the weighted path distance for every query pair.
    Distance {
        /// Input file (edge list then query list). Reads stdin when omitted.
        input: Option<PathBuf>,
    },
    /// Print the lowest common ancestor for every query pair.
    Lca {
        /// Input file (edge list then query list). Reads stdin when omitted.
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (mode, input) = match cli.command {
        Commands::Distance { input } => (QueryMode::Distance, input),
        Commands::Lca { input } => (QueryMode::Lca, input),
    };
    let config = DriverConfig {
        mode,
        index_base: if cli.zero_based { 0 } else { 1 },
    };

    let stdout = io::stdout();
    let writer = BufWriter::new(stdout.lock());
    match input {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            driver::run(BufReader::new(file), writer, &config)
                .with_context(|| format!("failed to process {}", path.display()))?;
        }
        None => driver::run(io::stdin().lock(), writer, &config)?,
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
