use thiserror::Error;

use crate::as_the_crow_flies::as_the_crow_flies_estimate;
use crate::mapbox_api::{
    MapboxDirectionsClient, MapboxDirectionsClientParams, MapboxDirectionsError,
};
use crate::route_estimate::{RouteEstimate, RouteEstimateError};
use crate::route_provider::RouteProvider;

pub const MAPBOX_TOKEN_VAR: &str = "MAPBOX_TOKEN";

#[derive(Debug, Error)]
pub enum RouteProviderError {
    #[error("MAPBOX_TOKEN is not set, required by the Mapbox Directions provider")]
    MissingAccessToken,

    #[error("Mapbox Directions failed: {0}")]
    Mapbox(#[from] MapboxDirectionsError),

    #[error("estimate rejected: {0}")]
    Estimate(#[from] RouteEstimateError),
}

/// Resolves route estimates through whichever provider a request names.
/// The Mapbox client only exists when the environment carries a token;
/// the offline providers never need one.
pub struct RouteClient {
    mapbox_client: Option<MapboxDirectionsClient>,
}

impl RouteClient {
    pub fn new(mapbox_client: Option<MapboxDirectionsClient>) -> Self {
        RouteClient { mapbox_client }
    }

    pub fn from_env() -> Self {
        let mapbox_client = std::env::var(MAPBOX_TOKEN_VAR).ok().map(|access_token| {
            MapboxDirectionsClient::new(MapboxDirectionsClientParams { access_token })
        });

        RouteClient::new(mapbox_client)
    }

    pub async fn fetch_estimate(
        &self,
        from: geo_types::Point,
        to: geo_types::Point,
        provider: RouteProvider,
    ) -> Result<RouteEstimate, RouteProviderError> {
        match provider {
            RouteProvider::MapboxDirections { profile } => {
                let client = self
                    .mapbox_client
                    .as_ref()
                    .ok_or(RouteProviderError::MissingAccessToken)?;

                Ok(client.fetch_estimate(from, to, profile).await?)
            }
            RouteProvider::AsTheCrowFlies { speed_kmh } => {
                Ok(as_the_crow_flies_estimate(from, to, speed_kmh)?)
            }
            RouteProvider::Fixed { estimate } => Ok(estimate),
        }
    }
}
