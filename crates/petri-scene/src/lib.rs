//! Scene configuration and geometry resolution for Petri.
//!
//! A [`SceneConfig`] mirrors the simulation's scene description: nominal
//! environment extents plus the cell and molecule type declarations. The
//! [`Geometry`] resolver turns those declarations into the static
//! per-type attribute tables (spherical volume, exterior diffusion rate)
//! that the aggregation passes read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod geometry;

pub use config::{CellSpec, DiffusionSpec, EnvironmentSpec, MoleculeSpec, SceneConfig};
pub use geometry::Geometry;
