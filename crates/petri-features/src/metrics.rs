//! Run-level counters for a pipeline execution.

/// Counters collected over one pipeline run.
///
/// Populated by [`Pipeline::run`](crate::Pipeline::run); consumers read
/// them for telemetry and sanity checks. `unassigned` meters the soft
/// boundary condition: rows whose coordinates matched no sector during
/// the present-timestep pass and therefore contributed to no aggregate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunMetrics {
    /// Total observations ingested.
    pub observations: usize,
    /// Distinct timesteps enumerated.
    pub timesteps: usize,
    /// Sectors per timestep (`divisions^3`).
    pub sectors: usize,
    /// Rows excluded from all aggregates by the boundary rule.
    pub unassigned: u64,
    /// Rows emitted into the feature table.
    pub rows: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = RunMetrics::default();
        assert_eq!(m.observations, 0);
        assert_eq!(m.unassigned, 0);
        assert_eq!(m.rows, 0);
    }
}
