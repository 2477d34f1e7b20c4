//! Measurement engine for the noisebench harness.
//!
//! [`measure`] runs the two-phase protocol for one workload: a warm-up of
//! a fixed number of untimed calls, then a count-until-deadline loop
//! against the monotonic clock. [`Harness`] applies it to every scenario
//! of a [`Registry`](noisebench_core::Registry), strictly sequentially.
//!
//! The engine is agnostic to what a workload computes; it only counts
//! completed calls and elapsed time.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod harness;
pub mod measure;

pub use config::{ConfigError, MeasureConfig};
pub use error::{MeasureError, Phase};
pub use harness::{FailurePolicy, Harness, ScenarioOutcome};
pub use measure::{measure, Measurement, StopReason};
