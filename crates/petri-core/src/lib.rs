//! Core types and traits for the Petri feature pipeline.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Petri workspace:
//! typed IDs, observation records, the error taxonomy, and the seams
//! to the external Trainer and visualization collaborators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod observation;
pub mod traits;

pub use error::{ConfigError, DataError, PipelineError, TrainError};
pub use id::{EntityTypeId, Timestep};
pub use observation::{Observation, ObservationSet};
pub use traits::{FitOutcome, PerformanceSink, Predictor, Trainer, TrainSplit};
