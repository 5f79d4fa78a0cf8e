//! Percentile cut points for one (dataset, year) slice.

use crate::scheme::Scheme;

/// The cut points splitting one year's values into ordinal risk buckets.
///
/// Cut points are non-decreasing by construction and belong to exactly one
/// scheme. Owned and cached alongside the (dataset, year) pair that produced
/// them; recomputed only if the underlying slice changes.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskThresholds {
    scheme: Scheme,
    cuts: Vec<f64>,
}

impl RiskThresholds {
    /// Creates thresholds from computed cut points.
    ///
    /// Debug-asserts that the cut count matches the scheme and that cuts are
    /// non-decreasing; both hold whenever the cuts come out of
    /// [`compute_thresholds`](crate::compute_thresholds).
    pub(crate) fn new(scheme: Scheme, cuts: Vec<f64>) -> Self {
        debug_assert_eq!(cuts.len(), scheme.cut_fractions().len());
        debug_assert!(cuts.windows(2).all(|w| w[0] <= w[1]));
        Self { scheme, cuts }
    }

    /// The scheme these thresholds were computed for.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// The cut points, ascending, one per scheme percentile.
    pub fn cuts(&self) -> &[f64] {
        &self.cuts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let t = RiskThresholds::new(Scheme::ThreeLevel, vec![4.0, 7.0]);
        assert_eq!(t.scheme(), Scheme::ThreeLevel);
        assert_eq!(t.cuts(), &[4.0, 7.0]);
    }
}
