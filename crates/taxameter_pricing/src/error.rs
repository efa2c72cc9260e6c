use thiserror::Error;

use crate::tariff::{car_class::CarClass, company::CompanyId};

/// Pricing failures surfaced to callers. Once a pairing has any configured
/// rules the selector always yields a tariff (the first-rule fallback closes
/// window gaps), so the only catalog-side failure is the empty pairing.
#[derive(Debug, Error, PartialEq)]
pub enum QuoteError {
    #[error("no tariff configured for {company}/{car_class}")]
    NoTariffConfigured {
        company: CompanyId,
        car_class: CarClass,
    },

    #[error("distance must be positive and finite, got {0} km")]
    InvalidDistance(f64),

    #[error("duration must be positive and finite, got {0} minutes")]
    InvalidDuration(f64),
}
