//! Raw entity observations and the immutable observation set.

use crate::id::Timestep;
use indexmap::IndexMap;

/// One entity sighting: a named entity at a position at a timestep.
///
/// Produced externally (simulation export); immutable once ingested.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// Entity type name as it appears in the scene configuration.
    pub name: String,
    /// Timestep at which the entity was observed.
    pub timestep: Timestep,
    /// Position in simulation space, `[x, y, z]`.
    pub position: [f64; 3],
}

impl Observation {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, timestep: i64, x: f64, y: f64, z: f64) -> Self {
        Self {
            name: name.into(),
            timestep: Timestep(timestep),
            position: [x, y, z],
        }
    }
}

/// An immutable collection of observations, grouped by timestep once at
/// construction.
///
/// Grouping preserves the relative order of rows within each timestep.
/// Timesteps are exposed in ascending sorted order so that every pass over
/// the data iterates the same temporal universe.
///
/// # Examples
///
/// ```
/// use petri_core::{Observation, ObservationSet, Timestep};
///
/// let set = ObservationSet::new(vec![
///     Observation::new("bacteria", 1, 0.5, 0.5, 0.5),
///     Observation::new("bacteria", 0, 0.1, 0.2, 0.3),
/// ]);
///
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.timesteps(), &[Timestep(0), Timestep(1)]);
/// assert_eq!(set.at(Timestep(0)).len(), 1);
/// assert!(set.at(Timestep(7)).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct ObservationSet {
    groups: IndexMap<Timestep, Vec<Observation>>,
    timesteps: Vec<Timestep>,
    len: usize,
}

impl ObservationSet {
    /// Build a set from raw rows, grouping by timestep.
    pub fn new(rows: Vec<Observation>) -> Self {
        let len = rows.len();
        let mut groups: IndexMap<Timestep, Vec<Observation>> = IndexMap::new();
        for row in rows {
            groups.entry(row.timestep).or_default().push(row);
        }
        groups.sort_keys();
        let timesteps = groups.keys().copied().collect();
        Self {
            groups,
            timesteps,
            len,
        }
    }

    /// Total number of observations across all timesteps.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the set holds no observations.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Distinct timesteps in ascending order.
    pub fn timesteps(&self) -> &[Timestep] {
        &self.timesteps
    }

    /// The observations recorded at one timestep, in ingestion order.
    /// Empty slice if the timestep was never observed.
    pub fn at(&self, timestep: Timestep) -> &[Observation] {
        self.groups.get(&timestep).map_or(&[], Vec::as_slice)
    }

    /// Iterate all observations, grouped by ascending timestep.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.groups.values().flatten()
    }

    /// Minimum and maximum of one coordinate axis (0 = x, 1 = y, 2 = z)
    /// across the entire dataset. `None` if the set is empty.
    ///
    /// Every row participates, including rows whose entity name is unknown
    /// to the geometry — the grid tiles the region where data actually
    /// falls, not just the region occupied by known types.
    pub fn axis_extent(&self, axis: usize) -> Option<(f64, f64)> {
        let mut iter = self.iter().map(|o| o.position[axis]);
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for v in iter {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_sorted_by_timestep() {
        let set = ObservationSet::new(vec![
            Observation::new("a", 5, 0.0, 0.0, 0.0),
            Observation::new("a", 1, 1.0, 0.0, 0.0),
            Observation::new("b", 5, 2.0, 0.0, 0.0),
        ]);
        assert_eq!(set.timesteps(), &[Timestep(1), Timestep(5)]);
        assert_eq!(set.at(Timestep(5)).len(), 2);
    }

    #[test]
    fn within_timestep_order_is_ingestion_order() {
        let set = ObservationSet::new(vec![
            Observation::new("b", 0, 0.0, 0.0, 0.0),
            Observation::new("a", 0, 1.0, 0.0, 0.0),
        ]);
        let names: Vec<&str> = set.at(Timestep(0)).iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn axis_extent_spans_whole_dataset() {
        let set = ObservationSet::new(vec![
            Observation::new("a", 0, -3.0, 0.0, 10.0),
            Observation::new("a", 9, 7.0, 0.0, -2.0),
        ]);
        assert_eq!(set.axis_extent(0), Some((-3.0, 7.0)));
        assert_eq!(set.axis_extent(1), Some((0.0, 0.0)));
        assert_eq!(set.axis_extent(2), Some((-2.0, 10.0)));
    }

    #[test]
    fn axis_extent_empty_is_none() {
        let set = ObservationSet::new(vec![]);
        assert!(set.is_empty());
        assert_eq!(set.axis_extent(0), None);
    }

    proptest::proptest! {
        #[test]
        fn axis_extent_is_permutation_invariant(
            coords in proptest::collection::vec(
                (-1e6f64..1e6, -1e6f64..1e6, -1e6f64..1e6),
                1..64,
            ),
        ) {
            let rows: Vec<Observation> = coords
                .iter()
                .enumerate()
                .map(|(n, &(x, y, z))| Observation::new("e", (n % 5) as i64, x, y, z))
                .collect();
            let mut shuffled = rows.clone();
            shuffled.reverse();
            let a = ObservationSet::new(rows);
            let b = ObservationSet::new(shuffled);
            for axis in 0..3 {
                let (min, max) = a.axis_extent(axis).unwrap();
                proptest::prop_assert!(min <= max);
                proptest::prop_assert_eq!(a.axis_extent(axis), b.axis_extent(axis));
            }
        }
    }
}
