//! The main sector aggregation pass.

use crate::counts::CountGrid;
use crate::targets::TargetTable;
use petri_core::{Observation, Timestep};
use petri_grid::{GridPartition, SectorIndex};
use petri_scene::Geometry;

/// Aggregated statistics for one entity type within one sector-timestep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeStats {
    /// Number of entities of this type observed in the sector.
    pub num: u64,
    /// `num` times the type's resolved spherical volume.
    pub occupied: f64,
    /// Exterior diffusion rate annotation; present for molecules only.
    pub diffusion_rate: Option<f64>,
    /// Entity count in the spatially corresponding sector at
    /// `timestep + horizon`.
    pub target: u64,
}

/// One output row before flattening: a (timestep, sector) aggregate.
///
/// Created once during the aggregation pass and never mutated afterward;
/// `stats` is ordered by geometry declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectorRecord {
    /// The observed timestep.
    pub timestep: Timestep,
    /// Flat sector counter, restarting at 0 each timestep, row-major.
    pub sector: u32,
    /// Spatial identity of the sector.
    pub index: SectorIndex,
    /// Per-type statistics in geometry order.
    pub stats: Vec<TypeStats>,
    /// Nominal per-sector environment volume minus total occupied
    /// volume. May be negative when declared geometry volumes exceed the
    /// nominal share; that is a valid output.
    pub empty_space: f64,
}

/// Aggregate one timestep into `divisions^3` sector records.
///
/// Tallies the timestep's rows in a single assignment pass, then walks
/// sectors in row-major order reading the tallied counts — `O(rows +
/// sectors * types)` for the whole timestep. Returns the records plus
/// the number of rows that matched no sector.
///
/// `sector_volume` is the nominal per-sector share of the environment
/// volume (`total / divisions^3`), not derived from the observed grid
/// extents.
pub fn aggregate_timestep(
    timestep: Timestep,
    rows: &[Observation],
    grid: &GridPartition,
    geometry: &Geometry,
    targets: &TargetTable,
    sector_volume: f64,
) -> (Vec<SectorRecord>, u64) {
    let (counts, unassigned) = CountGrid::tally(rows, grid, geometry);
    let mut records = Vec::with_capacity(grid.sector_count());

    for (sector, index) in grid.sector_indices().enumerate() {
        let mut stats = Vec::with_capacity(geometry.len());
        let mut occupied_total = 0.0;
        for (ty, _) in geometry.iter() {
            let num = counts.at(index, ty);
            let occupied = num as f64 * geometry.volume(ty);
            occupied_total += occupied;
            stats.push(TypeStats {
                num,
                occupied,
                diffusion_rate: geometry.diffusion_rate(ty),
                target: targets.count(timestep, index, ty),
            });
        }
        records.push(SectorRecord {
            timestep,
            sector: sector as u32,
            index,
            stats,
            empty_space: sector_volume - occupied_total,
        });
    }

    (records, unassigned)
}
