//! The multi-dataset query engine.

use std::collections::BTreeMap;

use tracing::debug;

use boreas_classify::{RiskClass, RiskThresholds, Scheme, classify, compute_thresholds};
use boreas_grid::{GridDataset, GridPoint};
use boreas_nearest::nearest;

use crate::cache::ThresholdCache;
use crate::error::EngineError;
use crate::geocode::Geocoder;
use crate::result::QueryResult;

/// Orchestrates point queries over N independent hazard datasets.
///
/// Datasets are registered under stable names; every query runs each dataset
/// independently and reports per-key outcomes, so one missing year or broken
/// dataset never empties the whole answer.
///
/// Thresholds are computed once per (dataset, year) and cached. This is a
/// performance invariant, not an optional optimisation: both the percentile
/// scan and the nearest-neighbor scan visit every cell, and only the former
/// can be amortised without an index.
#[derive(Debug)]
pub struct QueryEngine {
    datasets: BTreeMap<String, GridDataset>,
    scheme: Scheme,
    cache: ThresholdCache,
}

impl QueryEngine {
    /// Creates an empty engine using `scheme` for every classification.
    pub fn new(scheme: Scheme) -> Self {
        Self {
            datasets: BTreeMap::new(),
            scheme,
            cache: ThresholdCache::default(),
        }
    }

    /// The classification scheme in effect for this engine.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// Registers (or replaces) a dataset under `name`.
    ///
    /// Any cached thresholds for that name are invalidated, so a reloaded
    /// grid can never be classified against the old grid's cuts.
    pub fn insert_dataset(&mut self, name: impl Into<String>, dataset: GridDataset) {
        let name = name.into();
        self.cache.invalidate(&name);
        self.datasets.insert(name, dataset);
    }

    /// Removes the dataset registered under `name`, dropping its cache
    /// entries. Returns the dataset if it was present.
    pub fn remove_dataset(&mut self, name: &str) -> Option<GridDataset> {
        self.cache.invalidate(name);
        self.datasets.remove(name)
    }

    /// Registered dataset names, in iteration (sorted) order.
    pub fn dataset_names(&self) -> Vec<&str> {
        self.datasets.keys().map(String::as_str).collect()
    }

    /// Looks up a registered dataset.
    pub fn dataset(&self, name: &str) -> Option<&GridDataset> {
        self.datasets.get(name)
    }

    /// Runs a point query against every registered dataset.
    ///
    /// The returned map has one entry per dataset; a failure in one
    /// dataset's lookup (typically [`GridError::YearNotFound`]) becomes an
    /// error entry for that key and never aborts the others.
    ///
    /// [`GridError::YearNotFound`]: boreas_grid::GridError::YearNotFound
    pub fn query(
        &self,
        year: i32,
        lat: f64,
        lon: f64,
    ) -> BTreeMap<String, Result<QueryResult, EngineError>> {
        self.datasets
            .keys()
            .map(|name| (name.clone(), self.query_dataset(name, year, lat, lon)))
            .collect()
    }

    /// Geocodes `place` through the collaborator, then queries every
    /// dataset at the resolved coordinate.
    ///
    /// # Errors
    ///
    /// [`EngineError::CoordinateNotFound`] (or any other geocoder failure)
    /// is terminal: no datasets are consulted.
    pub fn query_place(
        &self,
        geocoder: &dyn Geocoder,
        place: &str,
        year: i32,
    ) -> Result<BTreeMap<String, Result<QueryResult, EngineError>>, EngineError> {
        let coord = geocoder.geocode(place)?;
        Ok(self.query(year, coord.lat, coord.lon))
    }

    /// Runs a point query against a single named dataset.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownDataset`] if `name` is not registered
    /// - [`EngineError::Grid`] for missing years
    /// - [`EngineError::Nearest`] for resolution failures
    pub fn query_dataset(
        &self,
        name: &str,
        year: i32,
        lat: f64,
        lon: f64,
    ) -> Result<QueryResult, EngineError> {
        let dataset = self
            .datasets
            .get(name)
            .ok_or_else(|| EngineError::UnknownDataset {
                name: name.to_string(),
            })?;

        let points = dataset.slice(year)?;
        let resolved = nearest(&points, lat, lon)?;
        let thresholds = self.thresholds_for_slice(name, year, &points);

        let risk = match &thresholds {
            Some(t) => classify(resolved.value(), t),
            None => RiskClass::Missing,
        };

        Ok(QueryResult::new(
            name.to_string(),
            year,
            lat,
            lon,
            resolved.lat(),
            resolved.lon(),
            resolved.distance_deg(),
            resolved.value(),
            risk,
            self.scheme,
        ))
    }

    /// The classified value at the cell nearest to `(lat, lon)` for every
    /// year the dataset carries, in year order.
    ///
    /// # Errors
    ///
    /// [`EngineError::UnknownDataset`] if `name` is not registered; other
    /// failures propagate from the per-year queries.
    pub fn query_history(
        &self,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<QueryResult>, EngineError> {
        let dataset = self
            .datasets
            .get(name)
            .ok_or_else(|| EngineError::UnknownDataset {
                name: name.to_string(),
            })?;

        let years: Vec<i32> = dataset.years().to_vec();
        years
            .into_iter()
            .map(|year| self.query_dataset(name, year, lat, lon))
            .collect()
    }

    /// Returns the thresholds for (name, year), computing and caching them
    /// on first use. `None` means the year's slice had no finite values.
    ///
    /// # Errors
    ///
    /// - [`EngineError::UnknownDataset`] if `name` is not registered
    /// - [`EngineError::Grid`] if the year is absent
    pub fn thresholds_for(&self, name: &str, year: i32) -> Result<Option<RiskThresholds>, EngineError> {
        if let Some(cached) = self.cache.get(name, year) {
            return Ok(cached);
        }
        let dataset = self
            .datasets
            .get(name)
            .ok_or_else(|| EngineError::UnknownDataset {
                name: name.to_string(),
            })?;
        let points = dataset.slice(year)?;
        Ok(self.thresholds_for_slice(name, year, &points))
    }

    /// Cache-or-compute over an already-materialised slice.
    fn thresholds_for_slice(
        &self,
        name: &str,
        year: i32,
        points: &[GridPoint],
    ) -> Option<RiskThresholds> {
        if let Some(cached) = self.cache.get(name, year) {
            debug!(dataset = name, year, "threshold cache hit");
            return cached;
        }

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let thresholds = compute_thresholds(&values, self.scheme).ok();
        debug!(
            dataset = name,
            year,
            available = thresholds.is_some(),
            "computed thresholds"
        );
        self.cache.insert(name, year, thresholds.clone());
        thresholds
    }
}
