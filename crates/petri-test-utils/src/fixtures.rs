//! Canonical test scenarios.

use petri_core::{Observation, ObservationSet};
use petri_scene::{CellSpec, EnvironmentSpec, MoleculeSpec, SceneConfig};

/// The eight octant centers of the unit cube, row-major.
pub fn octant_positions() -> Vec<[f64; 3]> {
    let mut out = Vec::with_capacity(8);
    for &x in &[0.25, 0.75] {
        for &y in &[0.25, 0.75] {
            for &z in &[0.25, 0.75] {
                out.push([x, y, z]);
            }
        }
    }
    out
}

/// One `bacteria` entity per octant of the unit cube at timestep 0, and
/// none afterward.
///
/// Two extra rows named `boundary-marker` pin the observed extent to the
/// full `[0, 1]` cube. The marker name is deliberately absent from every
/// scene fixture: unknown names shape the grid extents but are never
/// counted, so each octant entity sits strictly inside its sector and
/// every sector counts exactly one bacteria. The marker at `(1, 1, 1)`
/// sits on every axis maximum and is unassignable under the half-open
/// rule.
pub fn octant_observations() -> ObservationSet {
    let mut rows: Vec<Observation> = octant_positions()
        .into_iter()
        .map(|p| Observation::new("bacteria", 0, p[0], p[1], p[2]))
        .collect();
    rows.push(Observation::new("boundary-marker", 0, 0.0, 0.0, 0.0));
    rows.push(Observation::new("boundary-marker", 0, 1.0, 1.0, 1.0));
    ObservationSet::new(rows)
}

/// A unit environment with a single unit-radius cell type, `bacteria`.
pub fn unit_cell_scene() -> SceneConfig {
    SceneConfig {
        environment: EnvironmentSpec {
            width: 1.0,
            height: 1.0,
            length: 1.0,
        },
        cells: vec![CellSpec::new("bacteria", 1.0)],
        molecules: vec![],
    }
}

/// A scene with one cell type and one molecule type.
pub fn two_type_scene() -> SceneConfig {
    SceneConfig {
        environment: EnvironmentSpec {
            width: 10.0,
            height: 10.0,
            length: 10.0,
        },
        cells: vec![CellSpec::new("bacteria", 1.0)],
        molecules: vec![MoleculeSpec::new("glucose", 0.1, 2.5)],
    }
}
