//! Error types shared across the noisebench workspace.
//!
//! Organized by the component that raises them: workloads (the function
//! under test failing), the scenario registry, and raw result construction.

use std::error::Error;
use std::fmt;

/// A workload (or the function it wraps) failed during a call.
///
/// Returned by [`Workload::run`](crate::Workload::run). The engine never
/// catches it: the failure propagates and aborts the current scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl WorkloadError {
    /// Create a workload error from any displayable reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for WorkloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "workload failed: {}", self.reason)
    }
}

impl Error for WorkloadError {}

/// Errors from building a [`Registry`](crate::Registry).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A scenario with this label is already registered.
    DuplicateLabel {
        /// The label that was registered twice.
        label: String,
    },
    /// The label is empty or whitespace only.
    EmptyLabel,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateLabel { label } => {
                write!(f, "scenario '{label}' is already registered")
            }
            Self::EmptyLabel => write!(f, "scenario label must not be empty"),
        }
    }
}

impl Error for RegistryError {}

/// A [`RawResult`](crate::RawResult) would violate its invariants.
#[derive(Clone, Debug, PartialEq)]
pub enum RawResultError {
    /// Zero iterations make every derived rate undefined.
    ZeroIterations,
    /// Elapsed time is zero, negative, NaN or infinite.
    InvalidElapsed {
        /// The rejected value, in milliseconds.
        elapsed_millis: f64,
    },
}

impl fmt::Display for RawResultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterations => write!(f, "iteration count must be at least 1"),
            Self::InvalidElapsed { elapsed_millis } => {
                write!(
                    f,
                    "elapsed time must be finite and positive, got {elapsed_millis} ms"
                )
            }
        }
    }
}

impl Error for RawResultError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workload_error_display_includes_reason() {
        let e = WorkloadError::new("coordinate out of range");
        assert_eq!(e.to_string(), "workload failed: coordinate out of range");
    }

    #[test]
    fn registry_error_display() {
        let e = RegistryError::DuplicateLabel {
            label: "noise2D".to_string(),
        };
        assert_eq!(e.to_string(), "scenario 'noise2D' is already registered");
        assert_eq!(
            RegistryError::EmptyLabel.to_string(),
            "scenario label must not be empty"
        );
    }

    #[test]
    fn raw_result_error_display() {
        let e = RawResultError::InvalidElapsed {
            elapsed_millis: -1.0,
        };
        assert!(e.to_string().contains("-1 ms"));
        assert!(RawResultError::ZeroIterations
            .to_string()
            .contains("at least 1"));
    }
}
