//! Per-(dataset, year) threshold cache.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use boreas_classify::RiskThresholds;

/// Memoised threshold computations keyed by dataset name and year.
///
/// `None` records a year whose slice had no finite values: thresholds are
/// unavailable and everything classifies as missing, so there is no point
/// rescanning the slice on every query.
///
/// Reads share an `RwLock`; writes insert fully-built values. Because the
/// computation is deterministic and side-effect-free, two concurrent first
/// queries for the same key may both compute, and whichever insert lands
/// last leaves the identical value behind.
#[derive(Debug, Default)]
pub(crate) struct ThresholdCache {
    inner: RwLock<HashMap<String, HashMap<i32, Option<RiskThresholds>>>>,
}

impl ThresholdCache {
    /// Returns the cached entry for (name, year): `Some(None)` means
    /// "computed, unavailable"; outer `None` means "not yet computed".
    pub(crate) fn get(&self, name: &str, year: i32) -> Option<Option<RiskThresholds>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .and_then(|by_year| by_year.get(&year))
            .cloned()
    }

    /// Stores a computed entry.
    pub(crate) fn insert(&self, name: &str, year: i32, thresholds: Option<RiskThresholds>) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(name.to_string())
            .or_default()
            .insert(year, thresholds);
    }

    /// Drops every entry for one dataset. Called when a dataset is replaced
    /// or removed so stale thresholds can never serve a fresh grid.
    pub(crate) fn invalidate(&self, name: &str) {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boreas_classify::{Scheme, compute_thresholds};

    fn thresholds() -> RiskThresholds {
        compute_thresholds(&[1.0, 2.0, 3.0], Scheme::ThreeLevel).expect("thresholds")
    }

    #[test]
    fn get_miss_then_hit() {
        let cache = ThresholdCache::default();
        assert_eq!(cache.get("wind", 2025), None);

        cache.insert("wind", 2025, Some(thresholds()));
        assert_eq!(cache.get("wind", 2025), Some(Some(thresholds())));
    }

    #[test]
    fn unavailable_years_are_remembered() {
        let cache = ThresholdCache::default();
        cache.insert("wind", 2025, None);
        assert_eq!(cache.get("wind", 2025), Some(None));
    }

    #[test]
    fn keys_are_independent() {
        let cache = ThresholdCache::default();
        cache.insert("wind", 2025, Some(thresholds()));
        assert_eq!(cache.get("wind", 2026), None);
        assert_eq!(cache.get("precip", 2025), None);
    }

    #[test]
    fn invalidate_drops_only_one_dataset() {
        let cache = ThresholdCache::default();
        cache.insert("wind", 2025, Some(thresholds()));
        cache.insert("wind", 2026, None);
        cache.insert("precip", 2025, Some(thresholds()));

        cache.invalidate("wind");
        assert_eq!(cache.get("wind", 2025), None);
        assert_eq!(cache.get("wind", 2026), None);
        assert_eq!(cache.get("precip", 2025), Some(Some(thresholds())));
    }
}
