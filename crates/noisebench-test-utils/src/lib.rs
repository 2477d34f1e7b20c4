//! Test utilities and mock workloads for noisebench development.
//!
//! Provides fixture implementations of [`Workload`](noisebench_core::Workload)
//! that make the engine's timing contract observable from tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    ConstWorkload, CountingWorkload, FailingWorkload, RecordingWorkload, SpinWorkload,
};
