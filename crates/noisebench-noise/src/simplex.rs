//! Seeded simplex evaluators backed by the `noise` crate.
//!
//! `noise::Simplex` implements `NoiseFn` for every arity at once, so each
//! arity gets its own newtype here. That keeps `sample` unambiguous at the
//! call site and lets the harness depend only on [`Noise2D`], [`Noise3D`]
//! and [`Noise4D`].

use noise::{NoiseFn, Simplex};

use crate::{Noise2D, Noise3D, Noise4D};

/// Seeded 2D simplex noise.
#[derive(Clone, Debug)]
pub struct Simplex2(Simplex);

/// Seeded 3D simplex noise.
#[derive(Clone, Debug)]
pub struct Simplex3(Simplex);

/// Seeded 4D simplex noise.
#[derive(Clone, Debug)]
pub struct Simplex4(Simplex);

impl Simplex2 {
    /// Create an evaluator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self(Simplex::new(seed))
    }
}

impl Simplex3 {
    /// Create an evaluator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self(Simplex::new(seed))
    }
}

impl Simplex4 {
    /// Create an evaluator seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self(Simplex::new(seed))
    }
}

impl Noise2D for Simplex2 {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.0.get([x, y])
    }
}

impl Noise3D for Simplex3 {
    #[inline]
    fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        self.0.get([x, y, z])
    }
}

impl Noise4D for Simplex4 {
    #[inline]
    fn sample(&self, x: f64, y: f64, z: f64, w: f64) -> f64 {
        self.0.get([x, y, z, w])
    }
}
