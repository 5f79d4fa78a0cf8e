//! Threshold computation and value classification.

use std::cmp::Ordering;

use crate::error::ClassifyError;
use crate::risk_class::RiskClass;
use crate::scheme::Scheme;
use crate::thresholds::RiskThresholds;

/// Computes percentile thresholds from one slice's values.
///
/// Non-finite values (NaN, ±inf) are filtered out FIRST; feeding a sentinel
/// into the percentile math would skew every cut point, so the filter is not
/// optional. Percentiles use linear interpolation between order statistics
/// ([`boreas_stats::percentile`]).
///
/// # Errors
///
/// [`ClassifyError::InsufficientData`] if no finite value remains. Callers
/// must treat that as "thresholds unavailable", not as a default class.
pub fn compute_thresholds(values: &[f64], scheme: Scheme) -> Result<RiskThresholds, ClassifyError> {
    let mut finite = boreas_stats::filter_finite(values);
    if finite.is_empty() {
        return Err(ClassifyError::InsufficientData);
    }
    finite.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let cuts = scheme
        .cut_fractions()
        .iter()
        .map(|&p| boreas_stats::percentile(&finite, p))
        .collect();
    Ok(RiskThresholds::new(scheme, cuts))
}

/// Assigns the ordinal risk class for one value.
///
/// NaN returns [`RiskClass::Missing`] regardless of thresholds. Otherwise
/// the bound at each cut is inclusive: `value <= cuts[i]` yields level
/// `i + 1`, and anything above the last cut yields the highest level. The
/// same walk serves both schemes; only the cut count differs.
pub fn classify(value: f64, thresholds: &RiskThresholds) -> RiskClass {
    if value.is_nan() {
        return RiskClass::Missing;
    }
    for (i, &cut) in thresholds.cuts().iter().enumerate() {
        if value <= cut {
            return RiskClass::Level(i as u8 + 1);
        }
    }
    RiskClass::Level(thresholds.scheme().n_classes())
}
