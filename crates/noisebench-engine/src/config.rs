//! Measurement configuration, validation, and error types.

use std::error::Error;
use std::fmt;
use std::num::NonZeroU64;
use std::time::{Duration, Instant};

/// Untimed calls made before the timed phase starts.
pub const DEFAULT_WARMUP_ITERATIONS: u64 = 1000;

/// Length of each scenario's timed phase.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(10);

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`MeasureConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The timed phase must have a positive budget.
    ZeroDuration,
    /// `now + duration` does not fit the monotonic clock.
    DurationOverflow {
        /// The configured duration.
        duration: Duration,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDuration => write!(f, "measurement duration must be greater than zero"),
            Self::DurationOverflow { duration } => {
                write!(f, "measurement duration {duration:?} overflows the monotonic clock")
            }
        }
    }
}

impl Error for ConfigError {}

// ── MeasureConfig ──────────────────────────────────────────────────

/// Parameters of the two-phase measurement protocol.
///
/// Fixed for a whole run; every scenario is measured under the same
/// configuration so the numbers are comparable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureConfig {
    /// Untimed workload calls before the timed phase. Default: 1000.
    pub warmup_iterations: u64,
    /// Wall-clock budget of the timed phase. Default: 10 s.
    pub duration: Duration,
    /// Optional cap on timed-phase iterations. Default: `None` (the
    /// deadline alone ends the loop).
    pub max_iterations: Option<NonZeroU64>,
}

impl Default for MeasureConfig {
    fn default() -> Self {
        Self {
            warmup_iterations: DEFAULT_WARMUP_ITERATIONS,
            duration: DEFAULT_DURATION,
            max_iterations: None,
        }
    }
}

impl MeasureConfig {
    /// Validate all invariants.
    ///
    /// A negative warm-up count is unrepresentable, so only the duration
    /// needs checking.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        if Instant::now().checked_add(self.duration).is_none() {
            return Err(ConfigError::DurationOverflow {
                duration: self.duration,
            });
        }
        Ok(())
    }

    /// The timed-phase budget in milliseconds.
    pub fn duration_millis(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let cfg = MeasureConfig::default();
        assert_eq!(cfg.warmup_iterations, 1000);
        assert_eq!(cfg.duration, Duration::from_secs(10));
        assert_eq!(cfg.max_iterations, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn zero_duration_rejected() {
        let cfg = MeasureConfig {
            duration: Duration::ZERO,
            ..MeasureConfig::default()
        };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDuration));
    }

    #[test]
    fn overflowing_duration_rejected() {
        let cfg = MeasureConfig {
            duration: Duration::MAX,
            ..MeasureConfig::default()
        };
        match cfg.validate() {
            Err(ConfigError::DurationOverflow { duration }) => assert_eq!(duration, Duration::MAX),
            other => panic!("expected DurationOverflow, got {other:?}"),
        }
    }

    #[test]
    fn zero_warmup_is_valid() {
        let cfg = MeasureConfig {
            warmup_iterations: 0,
            duration: Duration::from_nanos(1),
            max_iterations: None,
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn duration_millis_converts() {
        let cfg = MeasureConfig {
            duration: Duration::from_micros(1500),
            ..MeasureConfig::default()
        };
        assert!((cfg.duration_millis() - 1.5).abs() < 1e-12);
    }
}
