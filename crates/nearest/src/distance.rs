//! Planar squared-distance computation on degree coordinates.

/// Squared planar Euclidean distance in degrees².
///
/// ```text
/// d² = (lat − query_lat)² + (lon − query_lon)²
/// ```
///
/// Degrees of longitude shrink toward the poles, so this metric distorts
/// with latitude. It is kept exactly as-is for result compatibility; see
/// the crate docs.
#[inline]
pub(crate) fn sq_degree_distance(lat: f64, lon: f64, query_lat: f64, query_lon: f64) -> f64 {
    let dlat = lat - query_lat;
    let dlon = lon - query_lon;
    dlat * dlat + dlon * dlon
}
