//! # boreas-engine
//!
//! Orchestrates point queries across several independent hazard datasets.
//! For each dataset the engine resolves the year slice, finds the nearest
//! grid sample, classifies its value against cached per-(dataset, year)
//! percentile thresholds, and assembles a [`QueryResult`]; one dataset's
//! failure never blocks the others.
//!
//! This is the only boundary presentation code should cross: callers hand
//! in `(year, lat, lon)` and render what comes back, without reaching into
//! dataset internals.
//!
//! # Architecture
//!
//! ```text
//! QueryEngine::query()
//!   └─ per dataset (independent):
//!        ├─ GridDataset::slice(year)        (boreas-grid)
//!        ├─ nearest()                       (boreas-nearest)
//!        ├─ thresholds: cache or compute    (cache.rs / boreas-classify)
//!        ├─ classify()                      (boreas-classify)
//!        └─ QueryResult                     (result.rs)
//! ```

mod cache;
mod engine;
mod error;
mod geocode;
mod result;

pub use engine::QueryEngine;
pub use error::EngineError;
pub use geocode::{Coordinate, Geocoder};
pub use result::QueryResult;
