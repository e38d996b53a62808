//! Petri: spatial-temporal feature aggregation for simulated cultures.
//!
//! Petri turns raw per-timestep entity position records and a static
//! scene description into labeled training examples for a regression
//! model: space is partitioned into a fixed 3D grid, per-sector
//! occupancy statistics are aggregated at every observed timestep, and
//! each row carries a forward-looking label — the entity counts in the
//! spatially corresponding sector at `timestep + horizon`.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Petri sub-crates. For most users, adding `petri` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use petri::prelude::*;
//!
//! // Two timesteps of one cell type drifting through a 10-unit cube.
//! let observations = ObservationSet::new(vec![
//!     Observation::new("bacteria", 0, 1.0, 1.0, 1.0),
//!     Observation::new("bacteria", 0, 8.0, 8.0, 8.0),
//!     Observation::new("bacteria", 1, 2.0, 1.5, 1.0),
//!     Observation::new("bacteria", 1, 8.5, 8.0, 8.0),
//! ]);
//! let scene = SceneConfig {
//!     environment: EnvironmentSpec { width: 10.0, height: 10.0, length: 10.0 },
//!     cells: vec![CellSpec::new("bacteria", 1.0)],
//!     molecules: vec![],
//! };
//!
//! let result = Pipeline::new(2, 1).run(&observations, &scene).unwrap();
//!
//! // One row per (timestep, sector): 2 timesteps x 8 sectors.
//! assert_eq!(result.table.len(), 16);
//! let counts = result.table.column("Num bacteria").unwrap();
//! // The far-corner rows touch an axis maximum and drop out under the
//! // default half-open rule; the two near-corner rows are counted.
//! assert_eq!(counts.iter().sum::<f64>(), 2.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `petri-core` | IDs, observations, errors, Trainer seams |
//! | [`scene`] | `petri-scene` | Scene configuration and geometry resolution |
//! | [`grid`] | `petri-grid` | Grid partitioning and sector location |
//! | [`features`] | `petri-features` | Targets, aggregation, feature table, pipeline |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and collaborator traits (`petri-core`).
///
/// Contains the observation records, typed IDs, the error taxonomy, and
/// the [`types::Trainer`] / [`types::PerformanceSink`] seams to the
/// external learner and plotting collaborators.
pub use petri_core as types;

/// Scene configuration and geometry resolution (`petri-scene`).
///
/// Declares environment extents plus cell and molecule types; resolves
/// them into the static [`scene::Geometry`] attribute tables.
pub use petri_scene as scene;

/// Grid partitioning and sector location (`petri-grid`).
///
/// Fits [`grid::GridPartition`] to observed extents and assigns
/// positions to [`grid::SectorIndex`] triples under a
/// [`grid::BinPolicy`].
pub use petri_grid as grid;

/// Aggregation passes and pipeline orchestration (`petri-features`).
///
/// Builds the [`features::TargetTable`], runs the sector aggregation
/// pass, and assembles the [`features::FeatureTable`].
pub use petri_features as features;

/// Common imports for typical Petri usage.
///
/// ```rust
/// use petri::prelude::*;
/// ```
pub mod prelude {
    // Observations and IDs
    pub use petri_core::{EntityTypeId, Observation, ObservationSet, Timestep};

    // Errors
    pub use petri_core::{ConfigError, DataError, PipelineError, TrainError};

    // Trainer seam
    pub use petri_core::{FitOutcome, PerformanceSink, Predictor, Trainer, TrainSplit};

    // Scene
    pub use petri_scene::{
        CellSpec, DiffusionSpec, EnvironmentSpec, Geometry, MoleculeSpec, SceneConfig,
    };

    // Grid
    pub use petri_grid::{BinPolicy, GridPartition, SectorIndex};

    // Features
    pub use petri_features::{
        FeatureSchema, FeatureTable, Pipeline, RunMetrics, RunResult, TargetTable,
    };
}
