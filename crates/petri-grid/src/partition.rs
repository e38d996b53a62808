//! The three-axis grid partition and sector location.

use crate::edges::{AxisEdges, BinPolicy};
use petri_core::{DataError, ObservationSet};
use std::fmt;

/// Index triple identifying one sector of the grid, each component in
/// `[0, divisions)`.
///
/// Spatial identity is the triple; the row-major [`flat`](Self::flat)
/// counter exists for output labeling only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectorIndex {
    /// X-axis bin.
    pub i: usize,
    /// Y-axis bin.
    pub j: usize,
    /// Z-axis bin.
    pub k: usize,
}

impl SectorIndex {
    /// Row-major flat index: `i` outermost, `k` innermost.
    pub fn flat(&self, divisions: usize) -> usize {
        (self.i * divisions + self.j) * divisions + self.k
    }
}

impl fmt::Display for SectorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.i, self.j, self.k)
    }
}

/// Axis-aligned partition of observed space into `divisions^3` sectors.
///
/// Fit once per run from whole-dataset extents (not per timestep);
/// immutable afterward, shared read-only by every aggregation pass.
///
/// # Examples
///
/// ```
/// use petri_core::{Observation, ObservationSet};
/// use petri_grid::{BinPolicy, GridPartition, SectorIndex};
///
/// let set = ObservationSet::new(vec![
///     Observation::new("c", 0, 0.0, 0.0, 0.0),
///     Observation::new("c", 0, 10.0, 10.0, 10.0),
/// ]);
/// let grid = GridPartition::fit(&set, 2, BinPolicy::HalfOpen).unwrap();
///
/// assert_eq!(grid.sector_count(), 8);
/// assert_eq!(
///     grid.locate(&[1.0, 6.0, 1.0]),
///     Some(SectorIndex { i: 0, j: 1, k: 0 }),
/// );
/// // The dataset maximum sits on the final edges and matches no sector.
/// assert_eq!(grid.locate(&[10.0, 10.0, 10.0]), None);
/// ```
#[derive(Clone, Debug)]
pub struct GridPartition {
    x: AxisEdges,
    y: AxisEdges,
    z: AxisEdges,
    divisions: usize,
    policy: BinPolicy,
}

impl GridPartition {
    /// Fit bin edges to the observed extents of the dataset.
    ///
    /// Every observation participates in the extent computation, whether
    /// or not its entity name is known to the geometry.
    pub fn fit(
        observations: &ObservationSet,
        divisions: usize,
        policy: BinPolicy,
    ) -> Result<Self, DataError> {
        if divisions < 1 {
            return Err(DataError::InvalidDivisions { value: divisions });
        }
        let mut axes = Vec::with_capacity(3);
        for axis in 0..3 {
            let (min, max) = observations
                .axis_extent(axis)
                .ok_or(DataError::EmptyObservations)?;
            axes.push(AxisEdges::linear(min, max, divisions));
        }
        let z = axes.pop().expect("three axes fitted");
        let y = axes.pop().expect("three axes fitted");
        let x = axes.pop().expect("three axes fitted");
        Ok(Self {
            x,
            y,
            z,
            divisions,
            policy,
        })
    }

    /// Number of bins per axis.
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// Total number of sectors, `divisions^3`.
    pub fn sector_count(&self) -> usize {
        self.divisions * self.divisions * self.divisions
    }

    /// The boundary policy in force.
    pub fn policy(&self) -> BinPolicy {
        self.policy
    }

    /// Edges for one axis (0 = x, 1 = y, 2 = z).
    pub fn axis(&self, axis: usize) -> &AxisEdges {
        match axis {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }

    /// Assign a position to its sector, or `None` if any axis fails to
    /// match (notably a coordinate exactly at the axis maximum under
    /// [`BinPolicy::HalfOpen`]). Unmatched positions contribute to none
    /// of the aggregates.
    pub fn locate(&self, position: &[f64; 3]) -> Option<SectorIndex> {
        let i = self.x.bin(position[0], self.policy)?;
        let j = self.y.bin(position[1], self.policy)?;
        let k = self.z.bin(position[2], self.policy)?;
        Some(SectorIndex { i, j, k })
    }

    /// Iterate all sector triples in row-major order (`i` outer, `j`
    /// middle, `k` inner) — the canonical output ordering.
    pub fn sector_indices(&self) -> impl Iterator<Item = SectorIndex> + '_ {
        let n = self.divisions;
        (0..n).flat_map(move |i| {
            (0..n).flat_map(move |j| (0..n).map(move |k| SectorIndex { i, j, k }))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petri_core::Observation;
    use proptest::prelude::*;

    fn corner_set() -> ObservationSet {
        ObservationSet::new(vec![
            Observation::new("c", 0, 0.0, 0.0, 0.0),
            Observation::new("c", 0, 1.0, 1.0, 1.0),
        ])
    }

    #[test]
    fn fit_rejects_zero_divisions() {
        match GridPartition::fit(&corner_set(), 0, BinPolicy::HalfOpen) {
            Err(DataError::InvalidDivisions { value: 0 }) => {}
            other => panic!("expected InvalidDivisions, got {other:?}"),
        }
    }

    #[test]
    fn fit_rejects_empty_set() {
        let empty = ObservationSet::new(vec![]);
        match GridPartition::fit(&empty, 2, BinPolicy::HalfOpen) {
            Err(DataError::EmptyObservations) => {}
            other => panic!("expected EmptyObservations, got {other:?}"),
        }
    }

    #[test]
    fn octant_positions_locate_to_distinct_sectors() {
        let grid = GridPartition::fit(&corner_set(), 2, BinPolicy::HalfOpen).unwrap();
        let mut seen = Vec::new();
        for &x in &[0.25, 0.75] {
            for &y in &[0.25, 0.75] {
                for &z in &[0.25, 0.75] {
                    let sector = grid.locate(&[x, y, z]).unwrap();
                    seen.push(sector.flat(2));
                }
            }
        }
        seen.sort_unstable();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn flat_index_is_row_major() {
        let grid = GridPartition::fit(&corner_set(), 3, BinPolicy::HalfOpen).unwrap();
        let flats: Vec<usize> = grid
            .sector_indices()
            .map(|s| s.flat(grid.divisions()))
            .collect();
        assert_eq!(flats, (0..27).collect::<Vec<_>>());
        assert_eq!(
            SectorIndex { i: 1, j: 2, k: 0 }.flat(3),
            1 * 9 + 2 * 3
        );
    }

    #[test]
    fn maximum_corner_is_unassignable_half_open() {
        let grid = GridPartition::fit(&corner_set(), 2, BinPolicy::HalfOpen).unwrap();
        assert_eq!(grid.locate(&[1.0, 0.25, 0.25]), None);
        assert_eq!(grid.locate(&[1.0, 1.0, 1.0]), None);
    }

    #[test]
    fn maximum_corner_is_assignable_closed_max() {
        let grid = GridPartition::fit(&corner_set(), 2, BinPolicy::ClosedMax).unwrap();
        assert_eq!(
            grid.locate(&[1.0, 1.0, 1.0]),
            Some(SectorIndex { i: 1, j: 1, k: 1 }),
        );
    }

    #[test]
    fn edges_ignore_row_order() {
        let forward = corner_set();
        let reversed = ObservationSet::new(vec![
            Observation::new("c", 0, 1.0, 1.0, 1.0),
            Observation::new("c", 0, 0.0, 0.0, 0.0),
        ]);
        let a = GridPartition::fit(&forward, 4, BinPolicy::HalfOpen).unwrap();
        let b = GridPartition::fit(&reversed, 4, BinPolicy::HalfOpen).unwrap();
        for axis in 0..3 {
            assert_eq!(a.axis(axis).values(), b.axis(axis).values());
        }
    }

    proptest! {
        #[test]
        fn located_sector_is_in_range(
            x in 0.0f64..0.999,
            y in 0.0f64..0.999,
            z in 0.0f64..0.999,
            n in 1usize..8,
        ) {
            let grid = GridPartition::fit(&corner_set(), n, BinPolicy::HalfOpen).unwrap();
            let sector = grid.locate(&[x, y, z]).unwrap();
            prop_assert!(sector.i < n && sector.j < n && sector.k < n);
            prop_assert!(sector.flat(n) < grid.sector_count());
        }
    }
}
