//! Shared data builders for the Petri benchmarks.
//!
//! Positions are index-derived rather than random so every benchmark
//! run aggregates identical data.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use petri_core::{Observation, ObservationSet};
use petri_scene::{CellSpec, EnvironmentSpec, MoleculeSpec, SceneConfig};

/// A scene with two cell types and one molecule in a 100-unit cube.
pub fn bench_scene() -> SceneConfig {
    SceneConfig {
        environment: EnvironmentSpec {
            width: 100.0,
            height: 100.0,
            length: 100.0,
        },
        cells: vec![
            CellSpec::new("bacteria", 1.0),
            CellSpec::new("macrophage", 4.0),
        ],
        molecules: vec![MoleculeSpec::new("glucose", 0.05, 3.2)],
    }
}

/// `timesteps * per_step` observations scattered deterministically
/// through the cube, cycling entity types.
pub fn bench_observations(timesteps: i64, per_step: usize) -> ObservationSet {
    let names = ["bacteria", "macrophage", "glucose"];
    let mut rows = Vec::with_capacity(timesteps as usize * per_step);
    for t in 0..timesteps {
        for n in 0..per_step {
            // Low-discrepancy-ish scatter from the row index.
            let a = (n as f64 * 0.754877 + t as f64 * 0.1) % 1.0;
            let b = (n as f64 * 0.569840) % 1.0;
            let c = (n as f64 * 0.928747 + t as f64 * 0.03) % 1.0;
            rows.push(Observation::new(
                names[n % names.len()],
                t,
                a * 99.0,
                b * 99.0,
                c * 99.0,
            ));
        }
    }
    ObservationSet::new(rows)
}
