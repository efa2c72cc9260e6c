use jiff::civil::DateTime;

use crate::{
    error::QuoteError,
    tariff::{car_class::CarClass, company::CompanyId},
};

/// One ride to price. Distance and duration come from the route collaborator
/// or manual entry; both must be positive and finite.
#[derive(Debug, Copy, Clone)]
pub struct QuoteRequest {
    pub company: CompanyId,
    pub car_class: CarClass,
    pub pickup_at: DateTime,
    pub distance_km: f64,
    pub duration_minutes: f64,
}

impl QuoteRequest {
    pub fn validate(&self) -> Result<(), QuoteError> {
        if !(self.distance_km.is_finite() && self.distance_km > 0.0) {
            return Err(QuoteError::InvalidDistance(self.distance_km));
        }

        if !(self.duration_minutes.is_finite() && self.duration_minutes > 0.0) {
            return Err(QuoteError::InvalidDuration(self.duration_minutes));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::datetime;

    use super::*;

    fn request(distance_km: f64, duration_minutes: f64) -> QuoteRequest {
        QuoteRequest {
            company: CompanyId::Tor,
            car_class: CarClass::Small,
            pickup_at: datetime(2025, 6, 11, 10, 0, 0, 0),
            distance_km,
            duration_minutes,
        }
    }

    #[test]
    fn accepts_positive_finite_inputs() {
        assert!(request(10.0, 20.0).validate().is_ok());
        assert!(request(0.1, 0.5).validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_distance() {
        assert_eq!(
            request(0.0, 20.0).validate(),
            Err(QuoteError::InvalidDistance(0.0))
        );
        assert!(matches!(
            request(-3.0, 20.0).validate(),
            Err(QuoteError::InvalidDistance(_))
        ));
    }

    #[test]
    fn rejects_non_finite_inputs() {
        assert!(matches!(
            request(f64::NAN, 20.0).validate(),
            Err(QuoteError::InvalidDistance(_))
        ));
        assert!(matches!(
            request(10.0, f64::INFINITY).validate(),
            Err(QuoteError::InvalidDuration(_))
        ));
    }

    #[test]
    fn rejects_non_positive_duration() {
        assert_eq!(
            request(10.0, 0.0).validate(),
            Err(QuoteError::InvalidDuration(0.0))
        );
    }
}
