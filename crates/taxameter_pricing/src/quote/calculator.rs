use jiff::civil::DateTime;

use crate::{
    error::QuoteError,
    quote::{
        breakdown::PriceBreakdown,
        request::QuoteRequest,
        select::{SelectedTariff, select_tariff},
    },
    tariff::{car_class::CarClass, catalog::TariffCatalog, company::CompanyId},
};

/// Prices rides against a fixed catalog. Configuration enters once, at
/// construction; afterwards the calculator is read-only and can be shared
/// across threads without coordination.
pub struct PriceCalculator {
    catalog: TariffCatalog,
}

impl PriceCalculator {
    pub fn new(catalog: TariffCatalog) -> Self {
        PriceCalculator { catalog }
    }

    /// Calculator over the built-in SEK tariff table.
    pub fn builtin() -> Self {
        PriceCalculator::new(TariffCatalog::builtin())
    }

    pub fn catalog(&self) -> &TariffCatalog {
        &self.catalog
    }

    pub fn select_tariff(
        &self,
        company: CompanyId,
        car_class: CarClass,
        at: DateTime,
    ) -> Option<SelectedTariff<'_>> {
        select_tariff(&self.catalog, company, car_class, at)
    }

    /// Prices one ride: validates the numeric inputs, selects the tariff in
    /// force at pickup time, applies its linear formula and rounds for
    /// display.
    pub fn quote(&self, request: &QuoteRequest) -> Result<PriceBreakdown, QuoteError> {
        request.validate()?;

        let selected = self
            .select_tariff(request.company, request.car_class, request.pickup_at)
            .ok_or(QuoteError::NoTariffConfigured {
                company: request.company,
                car_class: request.car_class,
            })?;

        let rule = selected.rule;
        Ok(PriceBreakdown::from_parts(
            rule,
            selected.basis,
            rule.base_fare(),
            rule.time_amount(request.duration_minutes),
            rule.distance_amount(request.distance_km),
        ))
    }
}
