//! The shared anti-elision sink.
//!
//! Every workload folds its per-invocation total into one [`Accumulator`]
//! cell. The data dependency from every computed noise value to a cell that
//! is inspected at the end of the run keeps an optimizing compiler from
//! proving the workload's output unused and deleting the computation.
//!
//! # Ownership model
//!
//! `Accumulator` is a cloneable handle around `Rc<Cell<f64>>`: clones share
//! the same cell, and the cell lives as long as the last handle. The handle
//! is neither [`Send`] nor [`Sync`], so the compiler rejects any attempt to
//! hand it to a second measurement thread. Parallelizing the engine would
//! require per-scenario accumulators merged at the end.

use std::cell::Cell;
use std::fmt;
use std::hint::black_box;
use std::rc::Rc;

/// Shared, never-reset sum of every workload's results.
#[derive(Clone, Default)]
pub struct Accumulator {
    cell: Rc<Cell<f64>>,
}

impl Accumulator {
    /// The neutral value the accumulator starts from.
    pub const IDENTITY: f64 = 0.0;

    /// Create a fresh accumulator holding [`IDENTITY`](Self::IDENTITY).
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one workload invocation's local total into the shared cell.
    ///
    /// Called once per workload invocation, never once per primitive call.
    #[inline]
    pub fn fold(&self, total: f64) {
        self.cell.set(self.cell.get() + black_box(total));
    }

    /// Current accumulated value.
    pub fn value(&self) -> f64 {
        self.cell.get()
    }

    /// `true` if nothing but identity values has ever been folded in.
    ///
    /// After a full run this should be `false`; otherwise the measured
    /// loops were likely no-ops.
    pub fn is_identity(&self) -> bool {
        self.value() == Self::IDENTITY
    }

    /// Number of live handles sharing this cell.
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.cell)
    }
}

impl fmt::Debug for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accumulator")
            .field("value", &self.value())
            .field("handles", &self.handle_count())
            .finish()
    }
}
