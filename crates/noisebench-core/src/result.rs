//! Raw measurement counts produced once per scenario.

use crate::error::RawResultError;

/// Iteration count and elapsed time of one scenario's timed phase.
///
/// Produced exactly once per scenario by the engine and immutable after
/// creation. `iteration_count >= 1` and `elapsed_millis > 0` always hold,
/// so every derived rate is well defined.
#[derive(Clone, Debug, PartialEq)]
pub struct RawResult {
    label: String,
    iteration_count: u64,
    elapsed_millis: f64,
}

impl RawResult {
    /// Build a raw result, validating its invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RawResultError::ZeroIterations`] if `iteration_count` is 0
    /// and [`RawResultError::InvalidElapsed`] if `elapsed_millis` is not
    /// finite and strictly positive.
    pub fn new(
        label: impl Into<String>,
        iteration_count: u64,
        elapsed_millis: f64,
    ) -> Result<Self, RawResultError> {
        if iteration_count == 0 {
            return Err(RawResultError::ZeroIterations);
        }
        if !elapsed_millis.is_finite() || elapsed_millis <= 0.0 {
            return Err(RawResultError::InvalidElapsed { elapsed_millis });
        }
        Ok(Self {
            label: label.into(),
            iteration_count,
            elapsed_millis,
        })
    }

    /// Scenario label, used as the report key.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of completed workload invocations inside the timed window.
    pub fn iteration_count(&self) -> u64 {
        self.iteration_count
    }

    /// Length of the timed window in milliseconds.
    pub fn elapsed_millis(&self) -> f64 {
        self.elapsed_millis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn valid_result_round_trips_fields() {
        let r = RawResult::new("noise2D", 1000, 500.0).unwrap();
        assert_eq!(r.label(), "noise2D");
        assert_eq!(r.iteration_count(), 1000);
        assert_eq!(r.elapsed_millis(), 500.0);
    }

    #[test]
    fn zero_iterations_rejected() {
        assert_eq!(
            RawResult::new("x", 0, 10.0),
            Err(RawResultError::ZeroIterations)
        );
    }

    #[test]
    fn non_positive_elapsed_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            match RawResult::new("x", 1, bad) {
                Err(RawResultError::InvalidElapsed { .. }) => {}
                other => panic!("expected InvalidElapsed for {bad}, got {other:?}"),
            }
        }
    }

    proptest! {
        #[test]
        fn positive_inputs_always_accepted(
            count in 1u64..u64::MAX,
            elapsed in 1e-9f64..1e9,
        ) {
            let r = RawResult::new("p", count, elapsed).unwrap();
            prop_assert_eq!(r.iteration_count(), count);
            prop_assert!(r.elapsed_millis() > 0.0);
        }
    }
}
