//! 3D grid partitioning for Petri.
//!
//! This crate turns the observed coordinate extents of a dataset into an
//! axis-aligned grid of `n^3` sectors and assigns positions to sectors:
//!
//! - [`AxisEdges`]: `n + 1` evenly spaced bin edges on one axis.
//! - [`BinPolicy`]: how the final bin treats the axis maximum.
//! - [`GridPartition`]: the three-axis partition, fit once per run.
//! - [`SectorIndex`]: an `(i, j, k)` sector triple with its row-major
//!   flat index.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edges;
pub mod partition;

pub use edges::{AxisEdges, BinPolicy};
pub use partition::{GridPartition, SectorIndex};
