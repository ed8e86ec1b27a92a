use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use ez_diffusion::{run_sweep, write_results_csv, EzError, SweepConfig};

#[derive(Debug, Parser)]
#[command(author, version, about = "EZ-diffusion simulate-and-recover sweep")]
struct Cli {
    /// Optional sweep configuration (JSON). Defaults to the built-in
    /// 10/40/4000 x 1000 sweep.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed override
    #[arg(long)]
    seed: Option<u64>,

    /// Output CSV path
    #[arg(long, default_value = "results/simulation_results.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    let batch = run_sweep(&config)?;
    write_results_csv(&cli.output, &batch.rows)?;

    for &n in &config.sample_sizes {
        println!("N = {:>5}: {} rows", n, batch.rows_for_sample_size(n));
    }
    println!(
        "Wrote {} rows ({} repetitions skipped) to {}",
        batch.rows.len(),
        batch.skipped,
        cli.output.display()
    );

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SweepConfig, EzError> {
    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&raw)?)
        }
        None => Ok(SweepConfig::default()),
    }
}
