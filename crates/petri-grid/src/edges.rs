//! Bin edges for one axis and the boundary policy for the final bin.

/// How the final bin on each axis treats a coordinate equal to the axis
/// maximum.
///
/// Every interior bin is half-open, `edges[i] <= c < edges[i+1]`. The
/// historical aggregation applied the same rule to the last bin, so a
/// coordinate sitting exactly on the maximum edge matched no sector and
/// silently dropped out of every count. Callers choose whether to keep
/// that behavior or close the interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BinPolicy {
    /// Half-open final bin. A coordinate equal to the axis maximum is
    /// unassignable (excluded from all aggregates).
    #[default]
    HalfOpen,
    /// Closed final bin: `edges[n-1] <= c <= edges[n]`. The axis maximum
    /// lands in the last bin.
    ClosedMax,
}

/// Ordered bin edges for a single axis: `n + 1` evenly spaced values
/// spanning the observed `[min, max]` of that axis.
///
/// A pure function of `(min, max, n)` — identical inputs always produce
/// identical edges, and permuting the observations that produced the
/// extent changes nothing.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisEdges {
    edges: Vec<f64>,
}

impl AxisEdges {
    /// Evenly spaced edges from `min` to `max` inclusive, `divisions + 1`
    /// values. Endpoints are exact; interior edges interpolate.
    ///
    /// If `min == max` every edge is equal and membership degenerates to
    /// an exact match governed by the [`BinPolicy`].
    pub fn linear(min: f64, max: f64, divisions: usize) -> Self {
        let mut edges = Vec::with_capacity(divisions + 1);
        edges.push(min);
        for i in 1..divisions {
            let t = i as f64 / divisions as f64;
            edges.push(min + t * (max - min));
        }
        edges.push(max);
        Self { edges }
    }

    /// The edge values, ascending.
    pub fn values(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bins on this axis.
    pub fn divisions(&self) -> usize {
        self.edges.len() - 1
    }

    /// Bin index for a coordinate, or `None` if no bin matches.
    ///
    /// Resolves the bin with a single `partition_point` rather than one
    /// range test per bin: the result is the unique `i` with
    /// `edges[i] <= c < edges[i+1]`, which is exactly what the chained
    /// predicates selected. Under [`BinPolicy::ClosedMax`] a coordinate
    /// equal to the final edge maps to the last bin.
    pub fn bin(&self, coord: f64, policy: BinPolicy) -> Option<usize> {
        let n = self.divisions();
        let below_or_at = self.edges.partition_point(|e| *e <= coord);
        if below_or_at == 0 {
            return None; // coord < min
        }
        let i = below_or_at - 1;
        if i < n {
            return Some(i);
        }
        // coord >= max edge.
        match policy {
            BinPolicy::HalfOpen => None,
            BinPolicy::ClosedMax if coord == self.edges[n] => Some(n - 1),
            BinPolicy::ClosedMax => None,
        }
    }
}
