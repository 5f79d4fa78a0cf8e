//! # boreas-classify
//!
//! Percentile-threshold risk classification. One year's worth of hazard
//! values is reduced to a small set of percentile cut points
//! ([`RiskThresholds`]), and every value is bucketed into an ordinal
//! [`RiskClass`] with a single inclusive-upper-bound rule shared by the
//! 3-level and 5-level schemes.
//!
//! Thresholds are deliberately per-slice: hazard magnitude distributions
//! drift year to year under climate scenarios, so a cut computed globally
//! would misrepresent relative risk within a single year's spatial pattern.
//!
//! # Quick start
//!
//! ```
//! use boreas_classify::{RiskClass, Scheme, classify, compute_thresholds};
//!
//! let values: Vec<f64> = (1..=10).map(f64::from).collect();
//! let thresholds = compute_thresholds(&values, Scheme::ThreeLevel).unwrap();
//!
//! assert_eq!(classify(3.0, &thresholds), RiskClass::Level(1));
//! assert_eq!(classify(9.0, &thresholds), RiskClass::Level(3));
//! assert_eq!(classify(f64::NAN, &thresholds), RiskClass::Missing);
//! ```

mod catalog;
mod classify;
mod error;
mod risk_class;
mod scheme;
mod thresholds;

pub use catalog::{ClassEntry, MISSING_ENTRY, catalog_entries, catalog_entry};
pub use classify::{classify, compute_thresholds};
pub use error::ClassifyError;
pub use risk_class::RiskClass;
pub use scheme::Scheme;
pub use thresholds::RiskThresholds;
