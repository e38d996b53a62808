//! Aggregation passes for the Petri feature pipeline.
//!
//! Data flow: an [`ObservationSet`](petri_core::ObservationSet) plus a
//! resolved [`Geometry`](petri_scene::Geometry) and fitted
//! [`GridPartition`](petri_grid::GridPartition) feed the
//! [`TargetTable`] (one full pass over future timesteps), then the
//! sector aggregation pass (one pass over present timesteps), and
//! finally the [`FeatureTable`] assembler. [`Pipeline`] wires the whole
//! run together and reports [`RunMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod counts;
pub mod metrics;
pub mod pipeline;
pub mod table;
pub mod targets;

pub use aggregate::{aggregate_timestep, SectorRecord, TypeStats};
pub use counts::CountGrid;
pub use metrics::RunMetrics;
pub use pipeline::{Pipeline, RunResult};
pub use table::{FeatureSchema, FeatureTable};
pub use targets::TargetTable;
