//! Forward-looking label precomputation.

use crate::counts::CountGrid;
use indexmap::IndexMap;
use petri_core::{EntityTypeId, ObservationSet, Timestep};
use petri_grid::{GridPartition, SectorIndex};
use petri_scene::Geometry;

/// Per-timestep lookup of entity counts at `timestep + horizon`.
///
/// Fully materialized in one pass over the dataset before aggregation
/// begins, and read-only afterward — the aggregation pass (and any
/// parallel workers) only ever call [`count`](Self::count).
///
/// A present timestep whose future counterpart has no observations gets
/// an all-zero grid: absence is a valid label, not an error. Negative
/// horizons look backward.
#[derive(Clone, Debug)]
pub struct TargetTable {
    horizon: i64,
    by_timestep: IndexMap<Timestep, CountGrid>,
}

impl TargetTable {
    /// Build the table for every distinct timestep in the dataset, in
    /// ascending timestep order.
    pub fn build(
        observations: &ObservationSet,
        grid: &GridPartition,
        geometry: &Geometry,
        horizon: i64,
    ) -> Self {
        let mut by_timestep = IndexMap::with_capacity(observations.timesteps().len());
        for &timestep in observations.timesteps() {
            let future = observations.at(timestep.offset(horizon));
            let (counts, _) = CountGrid::tally(future, grid, geometry);
            by_timestep.insert(timestep, counts);
        }
        Self {
            horizon,
            by_timestep,
        }
    }

    /// The timestep offset this table was built with.
    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    /// Label count for `(timestep, sector, type)`; 0 when the key was
    /// never materialized.
    pub fn count(&self, timestep: Timestep, sector: SectorIndex, ty: EntityTypeId) -> u64 {
        self.by_timestep
            .get(&timestep)
            .map_or(0, |grid| grid.at(sector, ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::Observation;
    use petri_grid::BinPolicy;
    use petri_scene::{CellSpec, SceneConfig};

    fn geometry() -> Geometry {
        Geometry::resolve(&SceneConfig {
            cells: vec![CellSpec::new("c", 1.0)],
            ..SceneConfig::default()
        })
        .unwrap()
    }

    fn two_step_set() -> ObservationSet {
        ObservationSet::new(vec![
            Observation::new("c", 0, 0.25, 0.25, 0.25),
            Observation::new("c", 1, 0.25, 0.25, 0.25),
            Observation::new("c", 1, 0.75, 0.25, 0.25),
            // Corner rows pin the extent to the unit cube.
            Observation::new("c", 0, 0.0, 0.0, 0.0),
            Observation::new("c", 0, 0.999, 0.999, 0.999),
        ])
    }

    #[test]
    fn labels_come_from_the_future_timestep() {
        let set = two_step_set();
        let grid = GridPartition::fit(&set, 2, BinPolicy::HalfOpen).unwrap();
        let geometry = geometry();
        let targets = TargetTable::build(&set, &grid, &geometry, 1);
        let c = geometry.id_of("c").unwrap();
        let origin = SectorIndex { i: 0, j: 0, k: 0 };
        let east = SectorIndex { i: 1, j: 0, k: 0 };
        // Timestep 0 is labeled with timestep 1's counts.
        assert_eq!(targets.count(Timestep(0), origin, c), 1);
        assert_eq!(targets.count(Timestep(0), east, c), 1);
        // Timestep 1 has no future; everything is zero.
        assert_eq!(targets.count(Timestep(1), origin, c), 0);
    }

    #[test]
    fn negative_horizon_looks_backward() {
        let set = two_step_set();
        let grid = GridPartition::fit(&set, 2, BinPolicy::HalfOpen).unwrap();
        let geometry = geometry();
        let targets = TargetTable::build(&set, &grid, &geometry, -1);
        let c = geometry.id_of("c").unwrap();
        let origin = SectorIndex { i: 0, j: 0, k: 0 };
        // Timestep 1 is labeled with timestep 0's counts: the 0.25-cube
        // row and the 0.0 corner row share the origin sector.
        assert_eq!(targets.count(Timestep(1), origin, c), 2);
        assert_eq!(targets.count(Timestep(0), origin, c), 0);
    }

    #[test]
    fn unmaterialized_timestep_defaults_to_zero() {
        let set = two_step_set();
        let grid = GridPartition::fit(&set, 2, BinPolicy::HalfOpen).unwrap();
        let geometry = geometry();
        let targets = TargetTable::build(&set, &grid, &geometry, 1);
        let c = geometry.id_of("c").unwrap();
        assert_eq!(
            targets.count(Timestep(42), SectorIndex { i: 0, j: 0, k: 0 }, c),
            0
        );
    }
}
