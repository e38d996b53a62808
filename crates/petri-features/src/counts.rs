//! Per-sector, per-type entity counts for one timestep.

use petri_core::{EntityTypeId, Observation};
use petri_grid::{GridPartition, SectorIndex};
use petri_scene::Geometry;

/// Flat `sectors x types` count tensor for a single timestep slice.
///
/// Sectors are laid out in row-major order; the per-sector stride is the
/// number of resolved entity types. Built in one pass over the slice
/// (one sector assignment per row, then grouped counting) rather than
/// one spatial membership scan per sector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountGrid {
    divisions: usize,
    types: usize,
    counts: Vec<u64>,
}

impl CountGrid {
    /// An all-zero grid, used when a timestep has no observations.
    pub fn zero(divisions: usize, types: usize) -> Self {
        Self {
            divisions,
            types,
            counts: vec![0; divisions * divisions * divisions * types],
        }
    }

    /// Count one timestep's rows into a fresh grid.
    ///
    /// Returns the grid together with the number of rows that matched no
    /// sector (soft condition: those rows contribute to nothing). Rows
    /// whose entity name is unknown to the geometry are never tallied.
    pub fn tally(
        rows: &[Observation],
        grid: &GridPartition,
        geometry: &Geometry,
    ) -> (Self, u64) {
        let mut counts = Self::zero(grid.divisions(), geometry.len());
        let mut unassigned = 0u64;
        for row in rows {
            let Some(sector) = grid.locate(&row.position) else {
                unassigned += 1;
                continue;
            };
            if let Some(ty) = geometry.id_of(&row.name) {
                let slot = counts.slot(sector, ty);
                counts.counts[slot] += 1;
            }
        }
        (counts, unassigned)
    }

    fn slot(&self, sector: SectorIndex, ty: EntityTypeId) -> usize {
        sector.flat(self.divisions) * self.types + ty.0 as usize
    }

    /// Count for one sector and entity type.
    pub fn at(&self, sector: SectorIndex, ty: EntityTypeId) -> u64 {
        self.counts[self.slot(sector, ty)]
    }

    /// Sum of one type's counts over all sectors.
    pub fn total(&self, ty: EntityTypeId) -> u64 {
        self.counts
            .iter()
            .skip(ty.0 as usize)
            .step_by(self.types.max(1))
            .sum()
    }
}
