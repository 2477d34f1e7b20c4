//! Reusable workload test fixtures.
//!
//! - [`CountingWorkload`]: counts invocations through a shared cell.
//! - [`RecordingWorkload`]: records the monotonic timestamp of every call.
//! - [`FailingWorkload`]: fails deterministically after N successful calls.
//! - [`SpinWorkload`]: busy-waits a fixed duration per call (a slow workload).
//! - [`ConstWorkload`]: folds a constant into an [`Accumulator`].
//!
//! Every fixture is `Clone` and clones share their observation state, so a
//! test can move one clone into a registry and inspect the other.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{Duration, Instant};

use noisebench_core::{Accumulator, Workload, WorkloadError};

/// Counts how many times it has been invoked.
#[derive(Clone, Default)]
pub struct CountingWorkload {
    calls: Rc<Cell<u64>>,
}

impl CountingWorkload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total invocations across all clones.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl Workload for CountingWorkload {
    fn run(&mut self) -> Result<(), WorkloadError> {
        self.calls.set(self.calls.get() + 1);
        Ok(())
    }
}

/// Records `Instant::now()` at the start of every call.
#[derive(Clone, Default)]
pub struct RecordingWorkload {
    stamps: Rc<RefCell<Vec<Instant>>>,
}

impl RecordingWorkload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamps of all calls so far, in call order.
    pub fn timestamps(&self) -> Vec<Instant> {
        self.stamps.borrow().clone()
    }
}

impl Workload for RecordingWorkload {
    fn run(&mut self) -> Result<(), WorkloadError> {
        self.stamps.borrow_mut().push(Instant::now());
        Ok(())
    }
}

/// Succeeds `succeed_for` times, then fails on every later call.
#[derive(Clone)]
pub struct FailingWorkload {
    succeed_for: u64,
    calls: Rc<Cell<u64>>,
}

impl FailingWorkload {
    pub fn new(succeed_for: u64) -> Self {
        Self {
            succeed_for,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Total invocations, including the failing ones.
    pub fn calls(&self) -> u64 {
        self.calls.get()
    }
}

impl Workload for FailingWorkload {
    fn run(&mut self) -> Result<(), WorkloadError> {
        let n = self.calls.get();
        self.calls.set(n + 1);
        if n >= self.succeed_for {
            return Err(WorkloadError::new(format!(
                "deliberate failure on call {}",
                n + 1
            )));
        }
        Ok(())
    }
}

/// Busy-waits for `per_call` on every invocation.
///
/// Spins against the monotonic clock rather than sleeping, so the cost is
/// a lower bound independent of scheduler granularity.
#[derive(Clone, Debug)]
pub struct SpinWorkload {
    per_call: Duration,
}

impl SpinWorkload {
    pub fn new(per_call: Duration) -> Self {
        Self { per_call }
    }
}

impl Workload for SpinWorkload {
    fn run(&mut self) -> Result<(), WorkloadError> {
        let start = Instant::now();
        while start.elapsed() < self.per_call {
            std::hint::spin_loop();
        }
        Ok(())
    }
}

/// Folds `value` into an accumulator once per call.
#[derive(Clone, Debug)]
pub struct ConstWorkload {
    value: f64,
    sink: Accumulator,
}

impl ConstWorkload {
    pub fn new(value: f64, sink: &Accumulator) -> Self {
        Self {
            value,
            sink: sink.clone(),
        }
    }
}

impl Workload for ConstWorkload {
    fn run(&mut self) -> Result<(), WorkloadError> {
        self.sink.fold(self.value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_clones_share_state() {
        let w = CountingWorkload::new();
        let mut moved = w.clone();
        moved.run().unwrap();
        moved.run().unwrap();
        assert_eq!(w.calls(), 2);
    }

    #[test]
    fn failing_workload_fails_after_threshold() {
        let mut w = FailingWorkload::new(2);
        assert!(w.run().is_ok());
        assert!(w.run().is_ok());
        let err = w.run().unwrap_err();
        assert!(err.reason.contains("call 3"));
        assert_eq!(w.calls(), 3);
    }

    #[test]
    fn recording_timestamps_are_monotonic() {
        let w = RecordingWorkload::new();
        let mut moved = w.clone();
        for _ in 0..5 {
            moved.run().unwrap();
        }
        let stamps = w.timestamps();
        assert_eq!(stamps.len(), 5);
        assert!(stamps.windows(2).all(|p| p[0] <= p[1]));
    }

    #[test]
    fn spin_workload_takes_at_least_its_duration() {
        let mut w = SpinWorkload::new(Duration::from_millis(2));
        let start = Instant::now();
        w.run().unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2));
    }

    #[test]
    fn const_workload_feeds_accumulator() {
        let acc = Accumulator::new();
        let mut w = ConstWorkload::new(0.5, &acc);
        w.run().unwrap();
        w.run().unwrap();
        assert_eq!(acc.value(), 1.0);
    }
}
