//! The two-phase timing protocol.
//!
//! 1. **Warm-up**: call the workload `warmup_iterations` times, untimed,
//!    so lazy initialization and cache warming settle first.
//! 2. **Timed**: read the monotonic clock, set `deadline = start + duration`,
//!    then call-and-count until a clock read after a call lands at or past
//!    the deadline. The check follows each call, so at least one iteration
//!    always completes, and the clock read that ends the loop is the one
//!    used for the elapsed time.
//!
//! The timed loop is a busy spin on [`Instant::now`]. Sleeping or yielding
//! would measure scheduler latency instead of call throughput.

use std::num::NonZeroU64;
use std::time::{Duration, Instant};

use noisebench_core::{RawResult, Workload};

use crate::config::{ConfigError, MeasureConfig};
use crate::error::{MeasureError, Phase};

/// Why the timed loop stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The clock reached the deadline.
    Deadline,
    /// `max_iterations` calls completed before the deadline.
    IterationCap,
}

/// Outcome of measuring one scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    /// Counts consumed by the report generator.
    pub raw: RawResult,
    /// Clock reading that opened the timed window.
    pub started_at: Instant,
    /// Why the timed window closed.
    pub stop: StopReason,
}

/// Measure `workload` under `config`.
///
/// Blocks the caller for the warm-up plus (at least) `config.duration`.
///
/// # Errors
///
/// - [`MeasureError::Config`] if `config` fails validation; the workload
///   is never called.
/// - [`MeasureError::Workload`] if any call fails, in either phase. The
///   error propagates immediately and no result is produced.
pub fn measure<W>(
    label: &str,
    workload: &mut W,
    config: &MeasureConfig,
) -> Result<Measurement, MeasureError>
where
    W: Workload + ?Sized,
{
    config.validate()?;

    for done in 0..config.warmup_iterations {
        workload
            .run()
            .map_err(|source| MeasureError::Workload {
                label: label.to_string(),
                phase: Phase::Warmup,
                completed: done,
                source,
            })?;
    }
    tracing::debug!(
        scenario = label,
        warmup_iterations = config.warmup_iterations,
        "warm-up complete"
    );

    let cap = config.max_iterations.map_or(u64::MAX, NonZeroU64::get);

    // ── timed region ──
    let started_at = Instant::now();
    let deadline = started_at
        .checked_add(config.duration)
        .ok_or(ConfigError::DurationOverflow {
            duration: config.duration,
        })?;
    let mut iterations: u64 = 0;
    let (stopped_at, stop) = loop {
        if let Err(source) = workload.run() {
            return Err(MeasureError::Workload {
                label: label.to_string(),
                phase: Phase::Timed,
                completed: iterations,
                source,
            });
        }
        iterations += 1;
        let now = Instant::now();
        if now >= deadline {
            break (now, StopReason::Deadline);
        }
        if iterations >= cap {
            break (now, StopReason::IterationCap);
        }
    };
    // ── end timed region ──

    // A capped run on a coarse clock can observe no elapsed time at all.
    let elapsed = stopped_at
        .duration_since(started_at)
        .max(Duration::from_nanos(1));
    let raw = RawResult::new(label, iterations, elapsed.as_secs_f64() * 1000.0)?;

    Ok(Measurement {
        raw,
        started_at,
        stop,
    })
}
