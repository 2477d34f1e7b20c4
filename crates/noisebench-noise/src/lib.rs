//! Seeded simplex noise: the function under test.
//!
//! The harness treats these evaluators as opaque black boxes; any type
//! implementing [`Noise2D`], [`Noise3D`] or [`Noise4D`] (closures included)
//! can be measured in their place. [`Simplex2`], [`Simplex3`] and
//! [`Simplex4`] wrap the `noise` crate's seeded simplex implementation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod simplex;

pub use simplex::{Simplex2, Simplex3, Simplex4};

/// Two-dimensional coordinate-to-scalar evaluator.
pub trait Noise2D {
    /// Evaluate at `(x, y)`. Nominal range `[-1, 1]`.
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// Three-dimensional coordinate-to-scalar evaluator.
pub trait Noise3D {
    /// Evaluate at `(x, y, z)`. Nominal range `[-1, 1]`.
    fn sample(&self, x: f64, y: f64, z: f64) -> f64;
}

/// Four-dimensional coordinate-to-scalar evaluator.
pub trait Noise4D {
    /// Evaluate at `(x, y, z, w)`. Nominal range `[-1, 1]`.
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64;
}

impl<F: Fn(f64, f64) -> f64> Noise2D for F {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

impl<F: Fn(f64, f64, f64) -> f64> Noise3D for F {
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

impl<F: Fn(f64, f64, f64, f64) -> f64> Noise4D for F {
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self(x, y, z, w)
    }
}
