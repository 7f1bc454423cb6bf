//! # u-tsp CLI
//!
//! Reads a CSV of city coordinates, builds a spanning-tree tour, refines it
//! with 2-opt, and prints the tour and its length.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use u_tsp::io::{read_points, write_report};
use u_tsp::logging::init_logger;
use u_tsp::solver::{Solver, SolverConfig};
use u_tsp::two_opt::{ScanStrategy, TwoOptConfig};

/// Approximate Euclidean TSP solver
#[derive(Parser)]
#[command(name = "u-tsp", version)]
#[command(about = "MST 2-approximation tour refined by 2-opt")]
#[command(long_about = "Reads one `x,y` pair per line (optional `x,y` header) and prints:
  Tour:
  [0, 3, 2, 1, 0]
  Total distance:
  4

Examples:
  u-tsp cities.csv                       # run 2-opt to a local optimum
  u-tsp cities.csv --time-limit-ms 5000  # stop refining after 5s
  u-tsp cities.csv --no-refine           # tree shortcut tour only")]
struct Cli {
    /// CSV file of city coordinates
    input: PathBuf,

    /// 2-opt scan order after an improving move
    #[arg(long, value_enum, default_value_t = Strategy::Restart)]
    strategy: Strategy,

    /// Maximum number of 2-opt passes
    #[arg(long)]
    max_passes: Option<usize>,

    /// Wall-clock limit for the whole solve, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Skip 2-opt and print the spanning-tree shortcut tour
    #[arg(long)]
    no_refine: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Prefix log lines with a millisecond timestamp
    #[arg(long)]
    log_timestamps: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Restart the scan after every improving move
    Restart,
    /// Keep scanning the current pass after an improving move
    Sweep,
}

impl From<Strategy> for ScanStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Restart => ScanStrategy::RestartScan,
            Strategy::Sweep => ScanStrategy::Sweep,
        }
    }
}

impl Cli {
    fn solver_config(&self) -> SolverConfig {
        let mut two_opt = TwoOptConfig::default().with_strategy(self.strategy.into());
        if let Some(n) = self.max_passes {
            two_opt = two_opt.with_max_passes(n);
        }

        let mut config = SolverConfig::default()
            .with_refine(!self.no_refine)
            .with_two_opt(two_opt);
        if let Some(ms) = self.time_limit_ms {
            config = config.with_time_limit_ms(ms);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level, cli.log_timestamps)?;

    let points = read_points(&cli.input)
        .with_context(|| format!("failed to read points from {}", cli.input.display()))?;
    log::info!("input: {} points from {}", points.len(), cli.input.display());

    let solution = Solver::solve(&points, &cli.solver_config())?;
    if let Some(reason) = solution.stop_reason {
        log::info!(
            "2-opt: passes={} moves={} stop={reason:?}",
            solution.passes,
            solution.moves
        );
    }

    let mut out = io::stdout().lock();
    write_report(&mut out, &solution)?;
    out.flush()?;
    Ok(())
}
