//! Core types and traits for the noisebench harness.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the engine, the report generator and the
//! scenario profiles: the [`Workload`] capability, the shared
//! [`Accumulator`], the ordered scenario [`Registry`], the immutable
//! [`RawResult`] and the error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accumulator;
pub mod error;
pub mod registry;
pub mod result;
pub mod workload;

pub use accumulator::Accumulator;
pub use error::{RawResultError, RegistryError, WorkloadError};
pub use registry::{Registry, Scenario};
pub use result::RawResult;
pub use workload::Workload;
