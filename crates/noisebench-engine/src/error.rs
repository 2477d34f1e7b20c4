//! Errors from measuring a scenario.

use std::error::Error;
use std::fmt;

use noisebench_core::{RawResultError, WorkloadError};

use crate::config::ConfigError;

/// Which phase of the protocol a failure happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Untimed warm-up calls.
    Warmup,
    /// The count-until-deadline loop.
    Timed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warmup => write!(f, "warm-up"),
            Self::Timed => write!(f, "timed"),
        }
    }
}

/// A scenario could not be measured.
///
/// No partial result accompanies any variant: a failing scenario yields
/// nothing but this error.
#[derive(Clone, Debug, PartialEq)]
pub enum MeasureError {
    /// The measurement configuration is invalid.
    Config(ConfigError),
    /// The workload failed and the remaining iterations were abandoned.
    Workload {
        /// Label of the failing scenario.
        label: String,
        /// Phase in which the failure occurred.
        phase: Phase,
        /// Calls completed in that phase before the failure.
        completed: u64,
        /// The workload's own error.
        source: WorkloadError,
    },
    /// The measured counts violated the raw result invariants.
    InvalidResult(RawResultError),
}

impl MeasureError {
    /// Label of the failing scenario, when known.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Workload { label, .. } => Some(label),
            _ => None,
        }
    }
}

impl fmt::Display for MeasureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Workload {
                label,
                phase,
                completed,
                source,
            } => write!(
                f,
                "scenario '{label}' failed during {phase} phase after {completed} calls: {source}"
            ),
            Self::InvalidResult(e) => write!(f, "invalid result: {e}"),
        }
    }
}

impl Error for MeasureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Workload { source, .. } => Some(source),
            Self::InvalidResult(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MeasureError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RawResultError> for MeasureError {
    fn from(e: RawResultError) -> Self {
        Self::InvalidResult(e)
    }
}
