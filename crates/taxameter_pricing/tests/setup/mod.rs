#![allow(dead_code)]

use jiff::civil::{DateTime, datetime};
use taxameter_pricing::tariff::{
    car_class::CarClass,
    catalog::{TariffCatalog, TariffCatalogBuilder},
    company::CompanyId,
    rule::{TariffKind, TariffRule, TariffRuleBuilder},
    time_window::TimeWindow,
};

pub fn rule(
    kind: TariffKind,
    window: Option<(&str, &str)>,
    base_fare: f64,
    hourly_rate: f64,
    per_km_rate: f64,
) -> TariffRule {
    let mut builder = TariffRuleBuilder::default();
    builder
        .set_kind(kind)
        .set_base_fare(base_fare)
        .set_hourly_rate(hourly_rate)
        .set_per_km_rate(per_km_rate)
        .set_description(format!("{kind} test tariff"));

    if let Some((from, to)) = window {
        builder.set_window(TimeWindow::from_hm(from, to));
    }

    builder.build()
}

pub fn catalog_of(rules: Vec<TariffRule>) -> TariffCatalog {
    let mut builder = TariffCatalogBuilder::default();
    for rule in rules {
        builder.add_rule(CompanyId::Tor, CarClass::Small, rule);
    }
    builder.build()
}

/// Day and night windows that leave 12:00-14:00 uncovered.
pub fn gapped_catalog() -> TariffCatalog {
    catalog_of(vec![
        rule(TariffKind::Day, Some(("06:00", "12:00")), 10.0, 60.0, 5.0),
        rule(TariffKind::Night, Some(("14:00", "06:00")), 20.0, 120.0, 8.0),
    ])
}

// 2025-06-09 through 2025-06-15 runs Monday through Sunday.

pub fn monday(hour: i8, minute: i8) -> DateTime {
    datetime(2025, 6, 9, hour, minute, 0, 0)
}

pub fn wednesday(hour: i8, minute: i8) -> DateTime {
    datetime(2025, 6, 11, hour, minute, 0, 0)
}

pub fn friday(hour: i8, minute: i8) -> DateTime {
    datetime(2025, 6, 13, hour, minute, 0, 0)
}

pub fn saturday(hour: i8, minute: i8) -> DateTime {
    datetime(2025, 6, 14, hour, minute, 0, 0)
}

pub fn sunday(hour: i8, minute: i8) -> DateTime {
    datetime(2025, 6, 15, hour, minute, 0, 0)
}
