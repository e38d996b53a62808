//! Strongly-typed identifiers for entity types and simulation time.

use std::fmt;

/// Identifies an entity type (cell or molecule) within a resolved geometry.
///
/// Types are registered during geometry resolution and assigned sequential
/// IDs in declaration order: cells first, then molecules. `EntityTypeId(n)`
/// corresponds to the n-th name in the union.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityTypeId(pub u32);

impl fmt::Display for EntityTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityTypeId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// A simulation timestep.
///
/// Signed so that horizon arithmetic (`timestep + horizon`) is closed even
/// for negative (backward-looking) horizons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestep(pub i64);

impl Timestep {
    /// The timestep whose entity counts label this one, under the given
    /// horizon offset.
    pub fn offset(self, horizon: i64) -> Timestep {
        Timestep(self.0 + horizon)
    }
}

impl fmt::Display for Timestep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Timestep {
    fn from(v: i64) -> Self {
        Self(v)
    }
}
