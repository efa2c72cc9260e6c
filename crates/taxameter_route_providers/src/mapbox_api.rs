use std::fmt::Display;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::route_estimate::{RouteEstimate, RouteEstimateError};

pub const MAPBOX_DIRECTIONS_API_URL: &str = "https://api.mapbox.com/directions/v5/mapbox";

/// Routing profile of the Mapbox Directions API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum MapboxProfile {
    #[default]
    Driving,
    DrivingTraffic,
    Walking,
    Cycling,
}

impl Display for MapboxProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MapboxProfile::Driving => "driving",
            MapboxProfile::DrivingTraffic => "driving-traffic",
            MapboxProfile::Walking => "walking",
            MapboxProfile::Cycling => "cycling",
        };

        write!(f, "{label}")
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown Mapbox profile {0:?}, expected driving, driving-traffic, walking or cycling")]
pub struct UnknownMapboxProfile(pub String);

impl FromStr for MapboxProfile {
    type Err = UnknownMapboxProfile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "driving" => Ok(MapboxProfile::Driving),
            "driving-traffic" => Ok(MapboxProfile::DrivingTraffic),
            "walking" => Ok(MapboxProfile::Walking),
            "cycling" => Ok(MapboxProfile::Cycling),
            other => Err(UnknownMapboxProfile(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum MapboxDirectionsError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("no route found between the given points")]
    NoRouteFound,

    #[error("route rejected: {0}")]
    Estimate(#[from] RouteEstimateError),
}

#[derive(Deserialize, Debug)]
struct DirectionsResponse {
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Deserialize, Debug)]
struct DirectionsRoute {
    /// Route length in meters.
    distance: f64,
    /// Travel time in seconds.
    duration: f64,
}

impl DirectionsRoute {
    /// Reduces the raw route to quote inputs: kilometers at 0.1 km
    /// precision, whole minutes.
    fn estimate(&self) -> Result<RouteEstimate, RouteEstimateError> {
        let distance_km = (self.distance / 1000.0 * 10.0).round() / 10.0;
        let duration_minutes = (self.duration / 60.0).round();

        RouteEstimate::new(distance_km, duration_minutes)
    }
}

pub struct MapboxDirectionsClientParams {
    pub access_token: String,
}

pub struct MapboxDirectionsClient {
    params: MapboxDirectionsClientParams,
    client: reqwest::Client,
}

impl MapboxDirectionsClient {
    pub fn new(params: MapboxDirectionsClientParams) -> Self {
        Self {
            params,
            client: reqwest::Client::new(),
        }
    }

    /// Requests the best route between two points. Coordinates go on the
    /// path as `lng,lat` pairs, which is the order `geo` points already
    /// use for `x`/`y`.
    pub async fn fetch_estimate(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        profile: MapboxProfile,
    ) -> Result<RouteEstimate, MapboxDirectionsError> {
        let url = format!(
            "{}/{}/{},{};{},{}",
            MAPBOX_DIRECTIONS_API_URL,
            profile,
            from.x(),
            from.y(),
            to.x(),
            to.y()
        );

        debug!("MapboxDirections: requesting {profile} route");

        let response = self
            .client
            .get(url)
            .query(&[
                ("access_token", self.params.access_token.as_str()),
                ("overview", "false"),
            ])
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> Result<RouteEstimate, MapboxDirectionsError> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();

            return Err(MapboxDirectionsError::Api { status, message });
        }

        let directions: DirectionsResponse = response.json().await?;

        let route = directions
            .routes
            .first()
            .ok_or(MapboxDirectionsError::NoRouteFound)?;

        debug!(
            "MapboxDirections: best route is {}m in {}s",
            route.distance, route.duration
        );

        Ok(route.estimate()?)
    }
}
