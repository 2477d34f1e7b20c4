//! noisebench: a fixed-duration throughput harness for seeded simplex noise.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all noisebench sub-crates. It also ships the `noisebench` binary, which
//! runs the three reference scenarios and prints a summary and a table.
//!
//! # Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use noisebench::prelude::*;
//!
//! let sink = Accumulator::new();
//! let mut registry = Registry::new();
//! let noise = Simplex2::new(42);
//! let acc = sink.clone();
//! registry
//!     .register("noise2D (1 call)", move || -> Result<(), WorkloadError> {
//!         acc.fold(noise.sample(0.3, 0.7));
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! let config = MeasureConfig {
//!     warmup_iterations: 10,
//!     duration: Duration::from_millis(5),
//!     max_iterations: None,
//! };
//! let outcomes = Harness::new(config).unwrap().run(&mut registry).unwrap();
//! let report = Report::from_outcomes(1, &outcomes);
//! assert!(report.render_table().contains("| noise2D (1 call) |"));
//! assert!(!sink.is_identity());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `noisebench-core` | `Workload`, `Accumulator`, `Registry`, `RawResult` |
//! | [`noise`] | `noisebench-noise` | Seeded simplex noise in 2D, 3D and 4D |
//! | [`engine`] | `noisebench-engine` | Warm-up and fixed-duration measurement |
//! | [`report`] | `noisebench-report` | Derived rates and text rendering |
//! | [`profiles`] | `noisebench-bench` | Coordinate batches and the reference scenarios |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`noisebench-core`).
pub use noisebench_core as types;

/// Seeded simplex noise, the function under test (`noisebench-noise`).
pub use noisebench_noise as noise;

/// Measurement engine (`noisebench-engine`).
///
/// [`engine::measure`] for a single workload, [`engine::Harness`] for a
/// whole registry.
pub use noisebench_engine as engine;

/// Derived statistics and rendering (`noisebench-report`).
pub use noisebench_report as report;

/// Reference scenario profiles (`noisebench-bench`).
pub use noisebench_bench as profiles;

/// Common imports for typical noisebench usage.
pub mod prelude {
    // Core
    pub use noisebench_core::{Accumulator, RawResult, Registry, Scenario, Workload, WorkloadError};

    // Noise
    pub use noisebench_noise::{Noise2D, Noise3D, Noise4D, Simplex2, Simplex3, Simplex4};

    // Engine
    pub use noisebench_engine::{
        measure, FailurePolicy, Harness, MeasureConfig, MeasureError, Measurement,
        ScenarioOutcome,
    };

    // Report
    pub use noisebench_report::{DerivedResult, Report, ReportRow};

    // Profiles
    pub use noisebench_bench::{noise_registry, DEFAULT_SEED, GRID_DENSITY};
}
