//! Scenario profiles for the noisebench harness.
//!
//! - [`coordinate_batch`]: the fixed `density³` grid every workload walks
//! - [`noise_registry`]: the three reference scenarios (2D, 3D, 4D simplex)
//!
//! Batches are built once when the registry is constructed, never inside
//! a timed region.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use noisebench_core::{Accumulator, Registry, RegistryError, WorkloadError};
use noisebench_noise::{Noise2D, Noise3D, Noise4D, Simplex2, Simplex3, Simplex4};

/// Grid points per axis in the reference batch (8³ = 512 calls).
pub const GRID_DENSITY: u32 = 8;

/// Seed of the reference noise generator.
pub const DEFAULT_SEED: u32 = 42;

/// All `(x/d, y/d, z/d)` for `x, y, z` in `0..d`, x-major.
pub fn coordinate_batch(density: u32) -> Vec<[f64; 3]> {
    let d = f64::from(density);
    let mut coords = Vec::with_capacity(batch_size(density) as usize);
    for x in 0..density {
        for y in 0..density {
            for z in 0..density {
                coords.push([f64::from(x) / d, f64::from(y) / d, f64::from(z) / d]);
            }
        }
    }
    coords
}

/// Primitive calls per workload invocation for a grid of `density`.
pub fn batch_size(density: u32) -> u64 {
    u64::from(density).pow(3)
}

/// Build the reference scenarios in their canonical order.
///
/// Each workload owns a copy of the coordinate batch, sums one noise call
/// per coordinate into a local total, then folds that total into `sink`
/// once per invocation. The 4D scenario derives `w = (x + y) / 2`.
///
/// # Errors
///
/// Only if registration rejects a label, which cannot happen for the
/// generated labels; the error is passed through rather than hidden.
pub fn noise_registry(
    seed: u32,
    density: u32,
    sink: &Accumulator,
) -> Result<Registry, RegistryError> {
    let calls = batch_size(density);
    let coords = coordinate_batch(density);
    let mut registry = Registry::new();

    let noise = Simplex2::new(seed);
    let batch = coords.clone();
    let acc = sink.clone();
    registry.register(format!("noise2D ({calls} calls)"), move || -> Result<(), WorkloadError> {
        let mut total = 0.0;
        for &[x, y, _] in &batch {
            total += noise.sample(x, y);
        }
        acc.fold(total);
        Ok(())
    })?;

    let noise = Simplex3::new(seed);
    let batch = coords.clone();
    let acc = sink.clone();
    registry.register(format!("noise3D ({calls} calls)"), move || -> Result<(), WorkloadError> {
        let mut total = 0.0;
        for &[x, y, z] in &batch {
            total += noise.sample(x, y, z);
        }
        acc.fold(total);
        Ok(())
    })?;

    let noise = Simplex4::new(seed);
    let batch = coords;
    let acc = sink.clone();
    registry.register(format!("noise4D ({calls} calls)"), move || -> Result<(), WorkloadError> {
        let mut total = 0.0;
        for &[x, y, z] in &batch {
            total += noise.sample(x, y, z, (x + y) / 2.0);
        }
        acc.fold(total);
        Ok(())
    })?;

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_batch_has_512_points_in_x_major_order() {
        let coords = coordinate_batch(GRID_DENSITY);
        assert_eq!(coords.len(), 512);
        assert_eq!(batch_size(GRID_DENSITY), 512);
        assert_eq!(coords[0], [0.0, 0.0, 0.0]);
        assert_eq!(coords[1], [0.0, 0.0, 0.125]);
        assert_eq!(coords[8], [0.0, 0.125, 0.0]);
        assert_eq!(coords[64], [0.125, 0.0, 0.0]);
        assert_eq!(coords[511], [0.875, 0.875, 0.875]);
    }

    #[test]
    fn registry_labels_in_canonical_order() {
        let acc = Accumulator::new();
        let reg = noise_registry(DEFAULT_SEED, GRID_DENSITY, &acc).unwrap();
        let labels: Vec<&str> = reg.labels().collect();
        assert_eq!(
            labels,
            ["noise2D (512 calls)", "noise3D (512 calls)", "noise4D (512 calls)"]
        );
    }

    #[test]
    fn every_workload_moves_the_accumulator() {
        let acc = Accumulator::new();
        let mut reg = noise_registry(DEFAULT_SEED, GRID_DENSITY, &acc).unwrap();
        for (label, workload) in reg.iter_mut() {
            let before = acc.value();
            workload.run().unwrap();
            assert_ne!(acc.value(), before, "{label} folded an identity total");
        }
        assert!(!acc.is_identity());
    }

    #[test]
    fn workloads_share_one_accumulator() {
        let acc = Accumulator::new();
        let _reg = noise_registry(DEFAULT_SEED, 2, &acc).unwrap();
        // The caller's handle plus one per scenario.
        assert_eq!(acc.handle_count(), 4);
    }

    #[test]
    fn same_seed_same_totals() {
        let a = Accumulator::new();
        let b = Accumulator::new();
        let mut ra = noise_registry(7, 4, &a).unwrap();
        let mut rb = noise_registry(7, 4, &b).unwrap();
        for ((_, wa), (_, wb)) in ra.iter_mut().zip(rb.iter_mut()) {
            wa.run().unwrap();
            wb.run().unwrap();
        }
        assert_eq!(a.value().to_bits(), b.value().to_bits());
    }
}
