//! Raw scene configuration records.
//!
//! These structs mirror the scene description as exported by the
//! simulation: optional fields stay optional so that an incomplete spec
//! surfaces as a structured [`ConfigError`](petri_core::ConfigError)
//! during resolution rather than a parse failure upstream.

use petri_core::ConfigError;

/// Nominal extents of the simulated environment.
///
/// Defines the total volume used for residual empty-space accounting.
/// Deliberately independent of the observed coordinate extents that the
/// grid partitioner tiles — the two spatial references need not coincide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnvironmentSpec {
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
    /// Extent along z.
    pub length: f64,
}

impl EnvironmentSpec {
    /// Total nominal volume, `width * height * length`.
    ///
    /// Rejects non-finite or non-positive dimensions; a zero-volume
    /// environment would make every sector's empty-space share
    /// meaningless.
    pub fn volume(&self) -> Result<f64, ConfigError> {
        for (label, v) in [
            ("width", self.width),
            ("height", self.height),
            ("length", self.length),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ConfigError::InvalidEnvironment {
                    reason: format!("{label} must be finite and positive, got {v}"),
                });
            }
        }
        Ok(self.width * self.height * self.length)
    }
}

/// Declaration of one cell type.
///
/// Exports key cells under either `cellName` or a generic `name` field;
/// both are accepted, with `cell_name` preferred when both are present.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CellSpec {
    /// Cell-specific identifier field.
    pub cell_name: Option<String>,
    /// Generic identifier field.
    pub name: Option<String>,
    /// Radius of the (spherical) cell.
    pub radius: Option<f64>,
}

impl CellSpec {
    /// A fully-specified cell declaration.
    pub fn new(name: impl Into<String>, radius: f64) -> Self {
        Self {
            cell_name: Some(name.into()),
            name: None,
            radius: Some(radius),
        }
    }

    /// The effective identifier, if any.
    pub fn identifier(&self) -> Option<&str> {
        self.cell_name.as_deref().or(self.name.as_deref())
    }
}

/// Diffusion rates of a molecule per compartment.
///
/// Only the exterior rate is consumed by the feature pipeline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DiffusionSpec {
    /// Diffusion rate outside cells.
    pub exterior: Option<f64>,
    /// Diffusion rate inside cells. Unused by this core.
    pub interior: Option<f64>,
}

/// Declaration of one diffusible molecule type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MoleculeSpec {
    /// Molecule identifier.
    pub name: String,
    /// Radius of the (spherical) molecule.
    pub radius: Option<f64>,
    /// Per-compartment diffusion rates.
    pub diffusion: Option<DiffusionSpec>,
}

impl MoleculeSpec {
    /// A fully-specified molecule declaration.
    pub fn new(name: impl Into<String>, radius: f64, exterior_rate: f64) -> Self {
        Self {
            name: name.into(),
            radius: Some(radius),
            diffusion: Some(DiffusionSpec {
                exterior: Some(exterior_rate),
                interior: None,
            }),
        }
    }
}

/// Complete static scene description.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SceneConfig {
    /// Nominal environment extents.
    pub environment: EnvironmentSpec,
    /// Cell type declarations.
    pub cells: Vec<CellSpec>,
    /// Molecule type declarations.
    pub molecules: Vec<MoleculeSpec>,
}

impl Default for EnvironmentSpec {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
            length: 1.0,
        }
    }
}
