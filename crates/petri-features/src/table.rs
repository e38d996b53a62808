//! Fixed-schema flattening of sector records.

use crate::aggregate::SectorRecord;
use indexmap::IndexMap;
use petri_scene::Geometry;
use smallvec::SmallVec;

/// Inline capacity for one row's values; spills to the heap for scenes
/// with many entity types.
type Row = SmallVec<[f64; 16]>;

/// The fixed column layout of the output table.
///
/// Derived once from the geometry union and shared by every row:
/// `Timestep, Sector`, then per type `Num <name>`, `OccupiedSpace
/// <name>`, `Diffusion Rate <name>` (molecules only), `Target <name>`,
/// and finally `EmptySpace Sector`. Column presence never varies with
/// the data — a type absent from a sector contributes zeros.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: IndexMap<String, usize>,
}

impl FeatureSchema {
    /// Compute the column layout for a resolved geometry.
    pub fn new(geometry: &Geometry) -> Self {
        let mut columns = vec!["Timestep".to_string(), "Sector".to_string()];
        for (ty, name) in geometry.iter() {
            columns.push(format!("Num {name}"));
            columns.push(format!("OccupiedSpace {name}"));
            if geometry.is_molecule(ty) {
                columns.push(format!("Diffusion Rate {name}"));
            }
            columns.push(format!("Target {name}"));
        }
        columns.push("EmptySpace Sector".to_string());
        let index = columns
            .iter()
            .enumerate()
            .map(|(n, c)| (c.clone(), n))
            .collect();
        Self { columns, index }
    }

    /// Column names in layout order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Flatten records into a table, in generation order.
    ///
    /// Pure structural flattening; all aggregation happened upstream.
    pub fn assemble(&self, records: &[SectorRecord]) -> FeatureTable {
        let mut rows = Vec::with_capacity(records.len());
        for record in records {
            let mut row = Row::with_capacity(self.width());
            row.push(record.timestep.0 as f64);
            row.push(f64::from(record.sector));
            for stats in &record.stats {
                row.push(stats.num as f64);
                row.push(stats.occupied);
                if let Some(rate) = stats.diffusion_rate {
                    row.push(rate);
                }
                row.push(stats.target as f64);
            }
            row.push(record.empty_space);
            debug_assert_eq!(row.len(), self.width());
            rows.push(row);
        }
        FeatureTable {
            schema: self.clone(),
            rows,
        }
    }
}

/// The assembled tabular dataset: one row per (timestep, sector) pair.
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
/// let table = result.table;
///
/// assert_eq!(table.len(), 8);
/// let num = table.column("Num bacteria").unwrap();
/// assert!(num.iter().all(|&v| v == 1.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTable {
    schema: FeatureSchema,
    rows: Vec<Row>,
}

impl FeatureTable {
    /// The column layout.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate rows as value slices in generation order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Extract one column by name.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let at = self.schema.column_index(name)?;
        Some(self.rows.iter().map(|r| r[at]).collect())
    }

    /// Split into a row-major feature matrix and a target vector for the
    /// Trainer.
    ///
    /// The selected `Target <name>` column becomes the label vector; all
    /// other target columns are dropped from the features (they are
    /// labels for sibling models, not predictors). Returns `(features,
    /// width, targets)` or `None` if the column does not exist.
    pub fn design_matrix(&self, target_column: &str) -> Option<(Vec<f64>, usize, Vec<f64>)> {
        let target_at = self.schema.column_index(target_column)?;
        let keep: Vec<usize> = (0..self.schema.width())
            .filter(|&n| !self.schema.columns()[n].starts_with("Target "))
            .collect();
        let width = keep.len();
        let mut features = Vec::with_capacity(width * self.rows.len());
        let mut targets = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            for &n in &keep {
                features.push(row[n]);
            }
            targets.push(row[target_at]);
        }
        Some((features, width, targets))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::TypeStats;
    use petri_core::Timestep;
    use petri_grid::SectorIndex;
    use petri_scene::{CellSpec, MoleculeSpec, SceneConfig};

    fn geometry() -> Geometry {
        Geometry::resolve(&SceneConfig {
            cells: vec![CellSpec::new("c", 1.0)],
            molecules: vec![MoleculeSpec::new("m", 0.5, 2.0)],
            ..SceneConfig::default()
        })
        .unwrap()
    }

    fn record() -> SectorRecord {
        SectorRecord {
            timestep: Timestep(3),
            sector: 0,
            index: SectorIndex { i: 0, j: 0, k: 0 },
            stats: vec![
                TypeStats {
                    num: 2,
                    occupied: 8.0,
                    diffusion_rate: None,
                    target: 1,
                },
                TypeStats {
                    num: 0,
                    occupied: 0.0,
                    diffusion_rate: Some(2.0),
                    target: 0,
                },
            ],
            empty_space: -7.875,
        }
    }

    #[test]
    fn schema_lists_molecule_diffusion_but_not_cell() {
        let schema = FeatureSchema::new(&geometry());
        assert_eq!(
            schema.columns(),
            &[
                "Timestep",
                "Sector",
                "Num c",
                "OccupiedSpace c",
                "Target c",
                "Num m",
                "OccupiedSpace m",
                "Diffusion Rate m",
                "Target m",
                "EmptySpace Sector",
            ]
        );
    }

    #[test]
    fn assemble_keeps_row_width_fixed() {
        let schema = FeatureSchema::new(&geometry());
        let table = schema.assemble(&[record(), record()]);
        assert_eq!(table.len(), 2);
        for row in table.rows() {
            assert_eq!(row.len(), schema.width());
        }
    }

    #[test]
    fn absent_types_contribute_zero_not_absence() {
        let schema = FeatureSchema::new(&geometry());
        let table = schema.assemble(&[record()]);
        assert_eq!(table.column("Num m").unwrap(), vec![0.0]);
        // Annotation columns stay populated regardless of counts.
        assert_eq!(table.column("Diffusion Rate m").unwrap(), vec![2.0]);
    }

    #[test]
    fn design_matrix_drops_all_target_columns() {
        let schema = FeatureSchema::new(&geometry());
        let table = schema.assemble(&[record()]);
        let (features, width, targets) = table.design_matrix("Target c").unwrap();
        // 10 columns minus 2 target columns.
        assert_eq!(width, 8);
        assert_eq!(features.len(), 8);
        assert_eq!(targets, vec![1.0]);
    }

    #[test]
    fn unknown_column_is_none() {
        let schema = FeatureSchema::new(&geometry());
        let table = schema.assemble(&[record()]);
        assert!(table.column("Num ghost").is_none());
        assert!(table.design_matrix("Target ghost").is_none());
    }
}
