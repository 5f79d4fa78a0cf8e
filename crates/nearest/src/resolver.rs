//! The nearest-sample scan.

use boreas_grid::GridPoint;

use crate::distance::sq_degree_distance;
use crate::error::NearestError;
use crate::result::NearestMatch;

/// Finds the sample closest to `(query_lat, query_lon)` under planar degree
/// distance.
///
/// Equidistant candidates resolve to the first one encountered in input
/// order: the scan keeps the incumbent unless a strictly smaller distance
/// appears, so the result is reproducible across runs for identical input.
/// Missing-value cells participate like any other sample; classification
/// decides what a NaN value means, not the resolver.
///
/// # Errors
///
/// - [`NearestError::EmptyDataset`] if `points` is empty
/// - [`NearestError::NonFiniteQuery`] if a query coordinate is NaN/infinite
pub fn nearest(
    points: &[GridPoint],
    query_lat: f64,
    query_lon: f64,
) -> Result<NearestMatch, NearestError> {
    if !query_lat.is_finite() {
        return Err(NearestError::NonFiniteQuery { coord: "lat" });
    }
    if !query_lon.is_finite() {
        return Err(NearestError::NonFiniteQuery { coord: "lon" });
    }

    let (first, rest) = points.split_first().ok_or(NearestError::EmptyDataset)?;

    let mut best = first;
    let mut best_d2 = sq_degree_distance(first.lat, first.lon, query_lat, query_lon);
    for point in rest {
        let d2 = sq_degree_distance(point.lat, point.lon, query_lat, query_lon);
        if d2 < best_d2 {
            best = point;
            best_d2 = d2;
        }
    }

    Ok(NearestMatch::new(*best, best_d2.sqrt()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn single_point() {
        let points = [GridPoint::new(10.0, 20.0, 1.0)];
        let m = nearest(&points, 0.0, 0.0).expect("non-empty");
        assert_eq!(m.lat(), 10.0);
        assert_abs_diff_eq!(m.distance_deg(), (500.0_f64).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn picks_minimum() {
        let points = [
            GridPoint::new(0.0, 0.0, 1.0),
            GridPoint::new(1.0, 1.0, 2.0),
            GridPoint::new(0.1, 0.1, 3.0),
        ];
        let m = nearest(&points, 0.2, 0.2).expect("non-empty");
        assert_eq!(m.value(), 3.0);
    }

    #[test]
    fn tie_goes_to_first_in_order() {
        // Both points at distance 1.0 from the query.
        let points = [
            GridPoint::new(0.0, 1.0, 10.0),
            GridPoint::new(0.0, -1.0, 20.0),
        ];
        let m = nearest(&points, 0.0, 0.0).expect("non-empty");
        assert_eq!(m.value(), 10.0);

        // Reversing the input flips the winner.
        let reversed = [points[1], points[0]];
        let m = nearest(&reversed, 0.0, 0.0).expect("non-empty");
        assert_eq!(m.value(), 20.0);
    }

    #[test]
    fn empty_input() {
        let err = nearest(&[], 0.0, 0.0).unwrap_err();
        assert!(matches!(err, NearestError::EmptyDataset));
    }

    #[test]
    fn non_finite_query_rejected() {
        let points = [GridPoint::new(0.0, 0.0, 1.0)];
        assert!(matches!(
            nearest(&points, f64::NAN, 0.0),
            Err(NearestError::NonFiniteQuery { coord: "lat" })
        ));
        assert!(matches!(
            nearest(&points, 0.0, f64::INFINITY),
            Err(NearestError::NonFiniteQuery { coord: "lon" })
        ));
    }

    #[test]
    fn missing_value_cell_can_win() {
        let points = [
            GridPoint::new(5.0, 5.0, f64::NAN),
            GridPoint::new(9.0, 9.0, 1.0),
        ];
        let m = nearest(&points, 5.1, 5.1).expect("non-empty");
        assert!(m.value().is_nan());
    }
}
