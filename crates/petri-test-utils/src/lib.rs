//! Test fixtures and scenario builders for Petri development.
//!
//! Provides the canonical octant scenario (eight entities, one per
//! octant of the unit cube) and small scene builders used across the
//! workspace's test suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    octant_observations, octant_positions, two_type_scene, unit_cell_scene,
};
