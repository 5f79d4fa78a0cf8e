//! # boreas-grid
//!
//! Immutable in-memory representation of one gridded hazard variable over
//! (time, lat, lon), loaded from NetCDF. Bridges external file formats into
//! Boreas's internal `&[f64]` slice-based APIs.
//!
//! A [`GridDataset`] is constructed once from a source file and is read-only
//! thereafter: there is no mutation API, and [`GridDataset::slice`] hands out
//! owned copies rather than views. Missing cells are carried as `f64::NAN`,
//! never coerced to zero.

mod config;
mod dataset;
mod error;
mod netcdf_read;
mod point;

pub use config::LoadConfig;
pub use dataset::GridDataset;
pub use error::GridError;
pub use point::GridPoint;
