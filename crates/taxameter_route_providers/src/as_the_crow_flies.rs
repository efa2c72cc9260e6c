use geo::{Distance, Haversine};

use crate::route_estimate::{RouteEstimate, RouteEstimateError};

/// Assumed city traffic average for offline estimates.
pub const DEFAULT_SPEED_KMH: f64 = 50.0;

/// Great-circle estimate: haversine distance between the points, travel
/// time derived from a constant speed.
pub fn as_the_crow_flies_estimate(
    from: geo_types::Point,
    to: geo_types::Point,
    speed_kmh: f64,
) -> Result<RouteEstimate, RouteEstimateError> {
    let distance_km = Haversine.distance(from, to) / 1000.0;
    let duration_minutes = distance_km / speed_kmh * 60.0;

    RouteEstimate::new(distance_km, duration_minutes)
}
