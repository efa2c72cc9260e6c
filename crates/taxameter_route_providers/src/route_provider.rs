use crate::mapbox_api::MapboxProfile;
use crate::route_estimate::RouteEstimate;

/// Strategy for resolving the distance and duration of a trip.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum RouteProvider {
    /// https://docs.mapbox.com/api/navigation/directions/
    MapboxDirections { profile: MapboxProfile },

    /// Haversine distance at an assumed average speed. Works offline.
    AsTheCrowFlies { speed_kmh: f64 },

    /// Numbers already known, from manual entry or a finished trip.
    Fixed { estimate: RouteEstimate },
}
