//! The per-dataset query result record.

use boreas_classify::{RiskClass, Scheme, catalog_entry};
use serde::Serialize;

/// Outcome of one point query against one dataset.
///
/// Immutable record, created fresh per query; serializes with the risk class
/// as its numeric rank (0 = missing) alongside the catalog label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    /// Name the dataset is registered under.
    pub dataset: String,
    /// Queried year.
    pub year: i32,
    /// Latitude the caller asked about.
    pub query_lat: f64,
    /// Longitude the caller asked about.
    pub query_lon: f64,
    /// Latitude of the resolved grid cell.
    pub resolved_lat: f64,
    /// Longitude of the resolved grid cell.
    pub resolved_lon: f64,
    /// Planar distance from query to resolved cell, in degrees.
    pub distance_deg: f64,
    /// Hazard value at the resolved cell; `None` when the cell is missing.
    pub raw_value: Option<f64>,
    /// Ordinal risk class (serialized as its rank).
    pub risk: RiskClass,
    /// Catalog label for the risk class.
    pub risk_label: &'static str,
}

impl QueryResult {
    /// Assembles a result, deriving `raw_value` and the catalog label.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        dataset: String,
        year: i32,
        query_lat: f64,
        query_lon: f64,
        resolved_lat: f64,
        resolved_lon: f64,
        distance_deg: f64,
        value: f64,
        risk: RiskClass,
        scheme: Scheme,
    ) -> Self {
        Self {
            dataset,
            year,
            query_lat,
            query_lon,
            resolved_lat,
            resolved_lon,
            distance_deg,
            raw_value: if value.is_nan() { None } else { Some(value) },
            risk,
            risk_label: catalog_entry(scheme, risk).label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QueryResult {
        QueryResult::new(
            "wind".to_string(),
            2025,
            48.85,
            2.35,
            48.8,
            2.4,
            0.0707,
            12.0,
            RiskClass::Level(3),
            Scheme::ThreeLevel,
        )
    }

    #[test]
    fn derives_label_from_catalog() {
        let r = sample();
        assert_eq!(r.risk_label, "High");
        assert_eq!(r.raw_value, Some(12.0));
    }

    #[test]
    fn missing_value_becomes_none() {
        let r = QueryResult::new(
            "wind".to_string(),
            2025,
            0.0,
            0.0,
            0.0,
            0.0,
            0.0,
            f64::NAN,
            RiskClass::Missing,
            Scheme::ThreeLevel,
        );
        assert_eq!(r.raw_value, None);
        assert_eq!(r.risk_label, "Missing Data");
    }

    #[test]
    fn serializes_rank_and_label() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(json["risk"], 3);
        assert_eq!(json["risk_label"], "High");
        assert_eq!(json["dataset"], "wind");
        assert_eq!(json["raw_value"], 12.0);
    }
}
