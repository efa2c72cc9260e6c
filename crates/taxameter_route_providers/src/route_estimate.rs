use serde::Serialize;
use thiserror::Error;

/// The two numbers a quote consumes: route length in kilometers and
/// expected travel time in minutes. Both must be positive and finite.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct RouteEstimate {
    distance_km: f64,
    duration_minutes: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum RouteEstimateError {
    #[error("route distance must be positive and finite, got {0} km")]
    InvalidDistance(f64),

    #[error("route duration must be positive and finite, got {0} minutes")]
    InvalidDuration(f64),
}

impl RouteEstimate {
    pub fn new(distance_km: f64, duration_minutes: f64) -> Result<Self, RouteEstimateError> {
        if !distance_km.is_finite() || distance_km <= 0.0 {
            return Err(RouteEstimateError::InvalidDistance(distance_km));
        }

        if !duration_minutes.is_finite() || duration_minutes <= 0.0 {
            return Err(RouteEstimateError::InvalidDuration(duration_minutes));
        }

        Ok(RouteEstimate {
            distance_km,
            duration_minutes,
        })
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_minutes(&self) -> f64 {
        self.duration_minutes
    }
}
