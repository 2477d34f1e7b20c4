//! The unit of work the engine invokes repeatedly.

use crate::error::WorkloadError;

/// A zero-argument unit of work measured by the engine.
///
/// A workload exercises the function under test across a fixed input
/// batch and folds the results into a shared
/// [`Accumulator`](crate::Accumulator). Apart from that accumulator it must
/// be free of side effects, so repeated invocation is safe.
///
/// Closures implement this trait directly:
///
/// ```
/// use noisebench_core::{Workload, WorkloadError};
///
/// let mut calls = 0u32;
/// let mut w = || -> Result<(), WorkloadError> {
///     calls += 1;
///     Ok(())
/// };
/// w.run().unwrap();
/// ```
pub trait Workload {
    /// Execute one iteration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadError`] if the function under test fails. The
    /// engine does not retry.
    fn run(&mut self) -> Result<(), WorkloadError>;
}

impl<F> Workload for F
where
    F: FnMut() -> Result<(), WorkloadError>,
{
    fn run(&mut self) -> Result<(), WorkloadError> {
        self()
    }
}
