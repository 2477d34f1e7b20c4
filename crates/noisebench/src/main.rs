use std::num::NonZeroU64;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use noisebench_bench::{batch_size, noise_registry, DEFAULT_SEED, GRID_DENSITY};
use noisebench_core::Accumulator;
use noisebench_engine::config::{DEFAULT_DURATION, DEFAULT_WARMUP_ITERATIONS};
use noisebench_engine::{FailurePolicy, Harness, MeasureConfig};
use noisebench_report::{render_preamble, Report};

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Parser)]
#[command(
    name = "noisebench",
    version,
    about = "Measure simplex noise throughput over a fixed time budget",
    long_about = None
)]
struct Cli {
    /// Untimed calls per scenario before the timed phase
    #[arg(long, value_name = "N", default_value_t = DEFAULT_WARMUP_ITERATIONS)]
    warmup: u64,

    /// Timed-phase budget per scenario, in milliseconds
    #[arg(
        long = "duration-ms",
        value_name = "MS",
        default_value_t = DEFAULT_DURATION.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    duration_ms: u64,

    /// Grid points per axis; each iteration makes density³ noise calls
    #[arg(
        long,
        value_name = "D",
        default_value_t = GRID_DENSITY,
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    density: u32,

    /// Seed of the simplex noise generator
    #[arg(long, value_name = "S", default_value_t = DEFAULT_SEED)]
    seed: u32,

    /// Stop a scenario's timed phase after this many iterations
    #[arg(long, value_name = "N")]
    max_iterations: Option<NonZeroU64>,

    /// Report failed scenarios as N/A and keep going instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Only run scenarios whose label contains LABEL (repeatable)
    #[arg(long = "scenario", value_name = "LABEL")]
    scenarios: Vec<String>,
}

impl Cli {
    fn measure_config(&self) -> MeasureConfig {
        MeasureConfig {
            warmup_iterations: self.warmup,
            duration: Duration::from_millis(self.duration_ms),
            max_iterations: self.max_iterations,
        }
    }

    fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Abort
        }
    }

    fn selects(&self, label: &str) -> bool {
        self.scenarios.is_empty() || self.scenarios.iter().any(|s| label.contains(s.as_str()))
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.measure_config();
    tracing::debug!(?config, density = cli.density, seed = cli.seed, "configuration");
    let harness = Harness::new(config.clone())
        .context("invalid measurement configuration")?
        .with_policy(cli.failure_policy());

    let sink = Accumulator::new();
    let mut registry =
        noise_registry(cli.seed, cli.density, &sink).context("failed to build scenarios")?;
    registry.retain(|label| cli.selects(label));
    if registry.is_empty() {
        bail!("no scenario matches {:?}", cli.scenarios);
    }

    let batch = batch_size(cli.density);
    println!(
        "{}",
        render_preamble(batch, config.duration, config.warmup_iterations)
    );

    let outcomes = harness.run(&mut registry)?;
    let report = Report::from_outcomes(batch, &outcomes);
    print!("{}", report.summary());
    println!();
    println!("Markdown table:");
    print!("{}", report.table());

    let total = sink.value();
    if !total.is_finite() {
        tracing::warn!(total, "accumulator is not finite");
        println!("{total}");
    }
    if report.has_failures() {
        tracing::warn!("one or more scenarios failed and are reported as N/A");
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    run(&cli)
}
