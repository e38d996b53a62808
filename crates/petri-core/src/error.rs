//! Error types for the Petri feature pipeline.
//!
//! The pipeline is a deterministic batch job: configuration and data errors
//! abort the run before any aggregation and are never retried. Soft
//! conditions (empty sectors, unassignable entities) are normal outputs and
//! have no error variants.

use std::error::Error;
use std::fmt;

/// Errors from scene configuration resolution.
///
/// All variants are fatal: aggregation cannot proceed with incomplete
/// geometry, so these are raised before any pass over the data.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A cell spec carries neither a `cellName` nor a `name` field.
    MissingCellName,
    /// An entity type spec has no radius; its volume cannot be resolved.
    MissingRadius {
        /// Name of the incomplete entity type.
        name: String,
    },
    /// A molecule spec has no exterior diffusion rate.
    MissingDiffusionRate {
        /// Name of the incomplete molecule type.
        name: String,
    },
    /// The same name appears more than once across the union of cell and
    /// molecule types. Silent overwrite would lose a radius, so this
    /// fails fast instead.
    DuplicateEntityName {
        /// The colliding name.
        name: String,
    },
    /// An environment dimension is non-finite or not positive.
    InvalidEnvironment {
        /// Description of the offending dimension.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCellName => write!(f, "cell spec has neither cellName nor name"),
            Self::MissingRadius { name } => write!(f, "entity type '{name}' has no radius"),
            Self::MissingDiffusionRate { name } => {
                write!(f, "molecule '{name}' has no exterior diffusion rate")
            }
            Self::DuplicateEntityName { name } => {
                write!(f, "entity type name '{name}' appears more than once")
            }
            Self::InvalidEnvironment { reason } => {
                write!(f, "invalid environment: {reason}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors from the observation data or grid parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum DataError {
    /// The requested division count is below 1.
    InvalidDivisions {
        /// The configured value that was rejected.
        value: usize,
    },
    /// The observation set is empty, so no grid extent can be derived.
    EmptyObservations,
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDivisions { value } => {
                write!(f, "n_divisions must be at least 1, got {value}")
            }
            Self::EmptyObservations => {
                write!(f, "observation set is empty; grid extent is undefined")
            }
        }
    }
}

impl Error for DataError {}

/// Umbrella error for a full pipeline run.
#[derive(Clone, Debug, PartialEq)]
pub enum PipelineError {
    /// Scene configuration was malformed.
    Config(ConfigError),
    /// Observation data or grid parameters were malformed.
    Data(DataError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration: {e}"),
            Self::Data(e) => write!(f, "data: {e}"),
        }
    }
}

impl Error for PipelineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Data(e) => Some(e),
        }
    }
}

impl From<ConfigError> for PipelineError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<DataError> for PipelineError {
    fn from(e: DataError) -> Self {
        Self::Data(e)
    }
}

/// Opaque failure at the external Trainer seam.
///
/// Search convergence and fitting failures are outside this core's
/// responsibility; implementations report whatever detail they have.
#[derive(Clone, Debug, PartialEq)]
pub struct TrainError {
    /// Human-readable description of the failure.
    pub reason: String,
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "training failed: {}", self.reason)
    }
}

impl Error for TrainError {}
