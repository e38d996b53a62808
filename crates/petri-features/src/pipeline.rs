//! End-to-end orchestration of the feature pipeline.

use crate::aggregate::{aggregate_timestep, SectorRecord};
use crate::metrics::RunMetrics;
use crate::table::{FeatureSchema, FeatureTable};
use crate::targets::TargetTable;
use crossbeam_channel::unbounded;
use petri_core::{ObservationSet, PipelineError};
use petri_grid::{BinPolicy, GridPartition};
use petri_scene::{Geometry, SceneConfig};
use std::thread;

/// Output of a pipeline run: the feature table plus run counters.
#[derive(Clone, Debug, PartialEq)]
pub struct RunResult {
    /// The assembled feature table, one row per (timestep, sector).
    pub table: FeatureTable,
    /// Counters collected during the run.
    pub metrics: RunMetrics,
}

/// Configuration and entry point for a full feature-extraction run.
///
/// A run either completes with the full table or fails with a
/// configuration/data error before any aggregation; there is nothing to
/// retry. Identical inputs always produce identical tables.
///
/// # Examples
///
/// ```
/// use petri_features::Pipeline;
/// use petri_test_utils::{octant_observations, unit_cell_scene};
///
/// let result = Pipeline::new(2, 1)
///     .run(&octant_observations(), &unit_cell_scene())
///     .unwrap();
///
/// assert_eq!(result.metrics.timesteps, 1);
/// assert_eq!(result.table.len(), 8);
/// assert_eq!(result.metrics.unassigned, 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pipeline {
    /// Grid resolution per axis.
    pub divisions: usize,
    /// Timestep offset for the forward-looking label; may be negative.
    pub horizon: i64,
    /// Boundary rule for the final bin on each axis.
    pub policy: BinPolicy,
    /// Worker threads for the aggregation pass. `None` or `Some(1)` runs
    /// serially; the output is identical either way.
    pub workers: Option<usize>,
}

impl Pipeline {
    /// A serial pipeline with the default (half-open) boundary policy.
    pub fn new(divisions: usize, horizon: i64) -> Self {
        Self {
            divisions,
            horizon,
            policy: BinPolicy::default(),
            workers: None,
        }
    }

    /// Override the boundary policy.
    pub fn with_policy(mut self, policy: BinPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Aggregate timesteps on a worker pool.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Execute the run.
    ///
    /// Order of passes: resolve geometry, fit the grid to observed
    /// extents, fully materialize the target table (a barrier — no
    /// aggregation reads it before it is complete), aggregate every
    /// timestep in ascending order, flatten. Timesteps are independent
    /// once the target table exists, so the aggregation pass may fan out
    /// across workers sharing the immutable tables; results merge back
    /// in timestep order, keeping the output identical to a serial run.
    pub fn run(
        &self,
        observations: &ObservationSet,
        scene: &SceneConfig,
    ) -> Result<RunResult, PipelineError> {
        let geometry = Geometry::resolve(scene)?;
        let total_volume = scene.environment.volume()?;
        let grid = GridPartition::fit(observations, self.divisions, self.policy)?;
        let sector_volume = total_volume / grid.sector_count() as f64;
        let targets = TargetTable::build(observations, &grid, &geometry, self.horizon);

        let workers = self
            .workers
            .unwrap_or(1)
            .clamp(1, observations.timesteps().len().max(1));
        let (records, unassigned) = if workers > 1 {
            aggregate_parallel(
                observations,
                &grid,
                &geometry,
                &targets,
                sector_volume,
                workers,
            )
        } else {
            aggregate_serial(observations, &grid, &geometry, &targets, sector_volume)
        };

        let schema = FeatureSchema::new(&geometry);
        let table = schema.assemble(&records);
        let metrics = RunMetrics {
            observations: observations.len(),
            timesteps: observations.timesteps().len(),
            sectors: grid.sector_count(),
            unassigned,
            rows: table.len(),
        };
        Ok(RunResult { table, metrics })
    }
}

fn aggregate_serial(
    observations: &ObservationSet,
    grid: &GridPartition,
    geometry: &Geometry,
    targets: &TargetTable,
    sector_volume: f64,
) -> (Vec<SectorRecord>, u64) {
    let mut records = Vec::new();
    let mut unassigned = 0u64;
    for &timestep in observations.timesteps() {
        let (batch, missed) = aggregate_timestep(
            timestep,
            observations.at(timestep),
            grid,
            geometry,
            targets,
            sector_volume,
        );
        records.extend(batch);
        unassigned += missed;
    }
    (records, unassigned)
}

/// Fan the per-timestep aggregation out over scoped worker threads.
///
/// Workers share read-only references to the grid, geometry, and target
/// table; nothing is mutated concurrently, so no locking is needed.
/// Each worker tags its batches with the timestep's position so the
/// collector can merge deterministically.
fn aggregate_parallel(
    observations: &ObservationSet,
    grid: &GridPartition,
    geometry: &Geometry,
    targets: &TargetTable,
    sector_volume: f64,
    workers: usize,
) -> (Vec<SectorRecord>, u64) {
    let timesteps = observations.timesteps();
    let chunk = timesteps.len().div_ceil(workers);
    let (tx, rx) = unbounded();

    let mut slots: Vec<Option<Vec<SectorRecord>>> = vec![None; timesteps.len()];
    let mut unassigned = 0u64;

    thread::scope(|scope| {
        for (w, slice) in timesteps.chunks(chunk).enumerate() {
            let tx = tx.clone();
            scope.spawn(move || {
                for (offset, &timestep) in slice.iter().enumerate() {
                    let batch = aggregate_timestep(
                        timestep,
                        observations.at(timestep),
                        grid,
                        geometry,
                        targets,
                        sector_volume,
                    );
                    tx.send((w * chunk + offset, batch))
                        .expect("collector outlives workers");
                }
            });
        }
        drop(tx);

        for (position, (batch, missed)) in rx {
            slots[position] = Some(batch);
            unassigned += missed;
        }
    });

    let records = slots.into_iter().flatten().flatten().collect();
    (records, unassigned)
}
