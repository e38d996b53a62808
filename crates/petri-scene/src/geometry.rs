//! Geometry resolution: static per-type attribute tables.

use crate::config::SceneConfig;
use indexmap::IndexMap;
use petri_core::{ConfigError, EntityTypeId};
use std::f64::consts::PI;

/// Spherical volume for a given radius, `4/3 * pi * r^3`.
pub fn sphere_volume(radius: f64) -> f64 {
    4.0 / 3.0 * PI * radius.powi(3)
}

/// Resolved static attributes for every entity type in the scene.
///
/// Types are interned in declaration order, cells first then molecules;
/// [`EntityTypeId`] indexes the parallel attribute tables. Immutable once
/// resolved — every aggregation pass reads it, none writes it.
///
/// # Examples
///
/// ```
/// use petri_scene::{CellSpec, Geometry, MoleculeSpec, SceneConfig};
///
/// let scene = SceneConfig {
///     cells: vec![CellSpec::new("bacteria", 1.0)],
///     molecules: vec![MoleculeSpec::new("glucose", 0.1, 2.5)],
///     ..SceneConfig::default()
/// };
/// let geometry = Geometry::resolve(&scene).unwrap();
///
/// assert_eq!(geometry.len(), 2);
/// let glucose = geometry.id_of("glucose").unwrap();
/// assert_eq!(geometry.diffusion_rate(glucose), Some(2.5));
/// assert!(geometry.is_molecule(glucose));
/// ```
#[derive(Clone, Debug)]
pub struct Geometry {
    index: IndexMap<String, EntityTypeId>,
    volumes: Vec<f64>,
    diffusion_rates: Vec<Option<f64>>,
}

impl Geometry {
    /// Resolve attribute tables from a scene configuration.
    ///
    /// Fails on a missing identifier, missing radius, missing exterior
    /// diffusion rate, or any name collision in the cell/molecule union.
    pub fn resolve(scene: &SceneConfig) -> Result<Self, ConfigError> {
        let mut geometry = Geometry {
            index: IndexMap::new(),
            volumes: Vec::new(),
            diffusion_rates: Vec::new(),
        };

        for cell in &scene.cells {
            let name = cell.identifier().ok_or(ConfigError::MissingCellName)?;
            let radius = cell.radius.ok_or_else(|| ConfigError::MissingRadius {
                name: name.to_string(),
            })?;
            geometry.intern(name, sphere_volume(radius), None)?;
        }

        for molecule in &scene.molecules {
            let radius = molecule.radius.ok_or_else(|| ConfigError::MissingRadius {
                name: molecule.name.clone(),
            })?;
            let rate = molecule
                .diffusion
                .and_then(|d| d.exterior)
                .ok_or_else(|| ConfigError::MissingDiffusionRate {
                    name: molecule.name.clone(),
                })?;
            geometry.intern(&molecule.name, sphere_volume(radius), Some(rate))?;
        }

        Ok(geometry)
    }

    fn intern(
        &mut self,
        name: &str,
        volume: f64,
        diffusion_rate: Option<f64>,
    ) -> Result<(), ConfigError> {
        if self.index.contains_key(name) {
            return Err(ConfigError::DuplicateEntityName {
                name: name.to_string(),
            });
        }
        let id = EntityTypeId(self.volumes.len() as u32);
        self.index.insert(name.to_string(), id);
        self.volumes.push(volume);
        self.diffusion_rates.push(diffusion_rate);
        Ok(())
    }

    /// Number of resolved entity types.
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Returns `true` if the scene declared no entity types.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// Look up the ID for a type name.
    pub fn id_of(&self, name: &str) -> Option<EntityTypeId> {
        self.index.get(name).copied()
    }

    /// The name of a resolved type.
    pub fn name(&self, id: EntityTypeId) -> &str {
        self.index
            .get_index(id.0 as usize)
            .map(|(name, _)| name.as_str())
            .unwrap_or("")
    }

    /// Resolved spherical volume for a type.
    pub fn volume(&self, id: EntityTypeId) -> f64 {
        self.volumes[id.0 as usize]
    }

    /// Exterior diffusion rate; `None` for cell types.
    pub fn diffusion_rate(&self, id: EntityTypeId) -> Option<f64> {
        self.diffusion_rates[id.0 as usize]
    }

    /// Whether this type was declared as a molecule.
    pub fn is_molecule(&self, id: EntityTypeId) -> bool {
        self.diffusion_rates[id.0 as usize].is_some()
    }

    /// Iterate `(id, name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityTypeId, &str)> {
        self.index.iter().map(|(name, id)| (*id, name.as_str()))
    }
}
