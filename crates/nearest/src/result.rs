//! Output type for nearest-sample queries.

use boreas_grid::GridPoint;

/// The resolved grid sample for one query coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestMatch {
    point: GridPoint,
    distance_deg: f64,
}

impl NearestMatch {
    /// Creates a new match.
    pub(crate) fn new(point: GridPoint, distance_deg: f64) -> Self {
        Self {
            point,
            distance_deg,
        }
    }

    /// Latitude of the resolved cell.
    pub fn lat(&self) -> f64 {
        self.point.lat
    }

    /// Longitude of the resolved cell.
    pub fn lon(&self) -> f64 {
        self.point.lon
    }

    /// Hazard value at the resolved cell, NaN when missing.
    pub fn value(&self) -> f64 {
        self.point.value
    }

    /// Planar distance from the query to the resolved cell, in degrees.
    pub fn distance_deg(&self) -> f64 {
        self.distance_deg
    }

    /// The resolved cell as a [`GridPoint`].
    pub fn point(&self) -> GridPoint {
        self.point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let m = NearestMatch::new(GridPoint::new(48.8, 2.4, 12.0), 0.07);
        assert_eq!(m.lat(), 48.8);
        assert_eq!(m.lon(), 2.4);
        assert_eq!(m.value(), 12.0);
        assert_eq!(m.distance_deg(), 0.07);
        assert_eq!(m.point(), GridPoint::new(48.8, 2.4, 12.0));
    }
}
