//! Projection of raw counts into throughput and latency figures.

use noisebench_core::RawResult;

/// Rates and averages derived from one [`RawResult`].
///
/// Computed on demand and never stored alongside the raw counts.
#[derive(Clone, Debug, PartialEq)]
pub struct DerivedResult {
    /// Scenario label.
    pub label: String,
    /// Workload invocations per second.
    pub iterations_per_sec: f64,
    /// Primitive calls per second (`iterations_per_sec * batch_size`).
    pub primitive_calls_per_sec: f64,
    /// Mean wall time of one workload invocation, in microseconds.
    pub avg_micros_per_iteration: f64,
}

impl DerivedResult {
    /// Project `raw` using `batch_size` primitive calls per invocation.
    ///
    /// The operation order is fixed so results reproduce bit for bit:
    ///
    /// ```text
    /// iterations_per_sec       = iteration_count / elapsed_millis * 1000
    /// primitive_calls_per_sec  = iterations_per_sec * batch_size
    /// avg_micros_per_iteration = (elapsed_millis / iteration_count) * 1000
    /// ```
    pub fn project(raw: &RawResult, batch_size: u64) -> Self {
        let count = raw.iteration_count() as f64;
        let elapsed = raw.elapsed_millis();
        let iterations_per_sec = count / elapsed * 1000.0;
        Self {
            label: raw.label().to_string(),
            iterations_per_sec,
            primitive_calls_per_sec: iterations_per_sec * batch_size as f64,
            avg_micros_per_iteration: (elapsed / count) * 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_numbers_are_exact() {
        let raw = RawResult::new("noise2D (512 calls)", 1000, 500.0).unwrap();
        let d = DerivedResult::project(&raw, 512);
        assert_eq!(d.label, "noise2D (512 calls)");
        assert_eq!(d.iterations_per_sec, 2000.0);
        assert_eq!(d.primitive_calls_per_sec, 1_024_000.0);
        assert_eq!(d.avg_micros_per_iteration, 500.0);
    }

    #[test]
    fn single_iteration_over_ten_seconds() {
        let raw = RawResult::new("slow", 1, 10_000.0).unwrap();
        let d = DerivedResult::project(&raw, 1);
        assert_eq!(d.iterations_per_sec, 0.1);
        assert_eq!(d.avg_micros_per_iteration, 10_000_000.0);
    }

    proptest! {
        #[test]
        fn projection_is_bit_identical_on_repeat(
            count in 1u64..10_000_000,
            elapsed in 0.001f64..1e6,
            batch in 1u64..100_000,
        ) {
            let raw = RawResult::new("p", count, elapsed).unwrap();
            let a = DerivedResult::project(&raw, batch);
            let b = DerivedResult::project(&raw, batch);
            prop_assert_eq!(a.iterations_per_sec.to_bits(), b.iterations_per_sec.to_bits());
            prop_assert_eq!(a.primitive_calls_per_sec.to_bits(), b.primitive_calls_per_sec.to_bits());
            prop_assert_eq!(a.avg_micros_per_iteration.to_bits(), b.avg_micros_per_iteration.to_bits());
        }

        #[test]
        fn more_iterations_in_same_time_is_faster(
            count in 1u64..1_000_000_000,
            extra in 1u64..1_000_000,
            elapsed in 0.001f64..1e7,
        ) {
            let slow = RawResult::new("a", count, elapsed).unwrap();
            let fast = RawResult::new("b", count + extra, elapsed).unwrap();
            prop_assert!(
                DerivedResult::project(&fast, 512).iterations_per_sec
                    > DerivedResult::project(&slow, 512).iterations_per_sec
            );
        }
    }
}
