//! # boreas-nearest
//!
//! Resolves an arbitrary (lat, lon) query to the closest sampled grid cell
//! of one year slice.
//!
//! The metric is planar Euclidean distance on raw degree coordinates, not
//! geodesic distance: a deliberate simplification kept for compatibility
//! with prior outputs. Ties go to the first point in input order, which for
//! [`GridDataset::slice`](boreas_grid::GridDataset::slice) output means
//! row-major (lat-major, then lon) order, deterministically across runs.
//!
//! No spatial index is built: per-year grids are small (tens of thousands of
//! cells at most), so a single O(n) scan per query is acceptable.
//!
//! # Quick start
//!
//! ```
//! use boreas_grid::GridPoint;
//! use boreas_nearest::nearest;
//!
//! let points = vec![
//!     GridPoint::new(48.8, 2.4, 12.0),
//!     GridPoint::new(48.8, 2.9, 7.0),
//! ];
//! let m = nearest(&points, 48.85, 2.35).unwrap();
//! assert_eq!(m.lat(), 48.8);
//! assert_eq!(m.lon(), 2.4);
//! ```

mod distance;
mod error;
mod resolver;
mod result;

pub use error::NearestError;
pub use resolver::nearest;
pub use result::NearestMatch;
