//! Report generation for noisebench.
//!
//! Measurement and presentation are kept apart. [`DerivedResult::project`]
//! is the pure numeric step from a [`RawResult`](noisebench_core::RawResult)
//! to rates and averages; [`Report`] collects derived rows in declaration
//! order and renders them as a per-scenario summary and a pipe-delimited
//! table. Number formatting lives in [`format`] and never consults the
//! process locale.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod derived;
pub mod format;
pub mod render;
pub mod report;

pub use derived::DerivedResult;
pub use format::{fixed2, group_thousands};
pub use render::{render_preamble, Summary, Table};
pub use report::{Report, ReportRow};
