use fxhash::FxHashMap;
use jiff::civil::Time;
use schemars::JsonSchema;
use serde::Deserialize;
use thiserror::Error;

use crate::tariff::{
    car_class::CarClass,
    catalog::{TariffCatalog, TariffCatalogBuilder},
    company::CompanyId,
    rule::{TariffKind, TariffRule, TariffRuleBuilder},
    time_window::TimeWindow,
};

/// Catalog file shape: company, then car class, then the ordered rule list.
/// Rule fields mirror the built-in table; `from`/`to` are wall-clock times
/// and are required for every kind except `all`.
#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "TariffCatalog")]
pub struct JsonTariffCatalog {
    pub companies: FxHashMap<CompanyId, JsonCompanyTariffs>,
}

#[derive(Deserialize, JsonSchema)]
#[serde(rename = "CompanyTariffs")]
pub struct JsonCompanyTariffs(pub FxHashMap<CarClass, Vec<JsonTariffRule>>);

#[derive(Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "TariffRule")]
pub struct JsonTariffRule {
    #[serde(rename = "type")]
    pub kind: TariffKind,
    pub from: Option<Time>,
    pub to: Option<Time>,
    pub base: f64,
    pub hour: f64,
    pub km: f64,
    pub description: Option<String>,
}

#[derive(Debug, Error, PartialEq)]
pub enum JsonCatalogError {
    #[error("{company}/{car_class}: {kind} tariff requires both from and to times")]
    MissingWindow {
        company: CompanyId,
        car_class: CarClass,
        kind: TariffKind,
    },

    #[error("{company}/{car_class}: all-day tariff cannot carry from/to times")]
    UnexpectedWindow {
        company: CompanyId,
        car_class: CarClass,
    },

    #[error("{company}/{car_class}: {field} must be a non-negative number, got {value}")]
    InvalidAmount {
        company: CompanyId,
        car_class: CarClass,
        field: &'static str,
        value: f64,
    },

    #[error("{company}/{car_class}: rule list is empty")]
    EmptyRules {
        company: CompanyId,
        car_class: CarClass,
    },
}

impl JsonTariffCatalog {
    pub fn create_catalog(self) -> Result<TariffCatalog, JsonCatalogError> {
        let mut builder = TariffCatalogBuilder::default();

        for (company, tariffs) in self.companies {
            for (car_class, rules) in tariffs.0 {
                if rules.is_empty() {
                    return Err(JsonCatalogError::EmptyRules { company, car_class });
                }

                for rule in rules {
                    builder.add_rule(company, car_class, rule.build_rule(company, car_class)?);
                }
            }
        }

        Ok(builder.build())
    }
}

impl JsonTariffRule {
    fn build_rule(
        self,
        company: CompanyId,
        car_class: CarClass,
    ) -> Result<TariffRule, JsonCatalogError> {
        for (field, value) in [("base", self.base), ("hour", self.hour), ("km", self.km)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(JsonCatalogError::InvalidAmount {
                    company,
                    car_class,
                    field,
                    value,
                });
            }
        }

        let mut builder = TariffRuleBuilder::default();
        builder
            .set_kind(self.kind)
            .set_base_fare(self.base)
            .set_hourly_rate(self.hour)
            .set_per_km_rate(self.km);

        if let Some(description) = self.description {
            builder.set_description(description);
        }

        match (self.kind, self.from, self.to) {
            (TariffKind::AllDay, None, None) => {}
            (TariffKind::AllDay, _, _) => {
                return Err(JsonCatalogError::UnexpectedWindow { company, car_class });
            }
            (_, Some(from), Some(to)) => {
                builder.set_window(TimeWindow::new(from, to));
            }
            (kind, _, _) => {
                return Err(JsonCatalogError::MissingWindow {
                    company,
                    car_class,
                    kind,
                });
            }
        }

        Ok(builder.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_catalog_file() {
        let input = r#"{
            "companies": {
                "tor": {
                    "small": [
                        { "type": "day", "from": "07:00", "to": "15:00", "base": 39, "hour": 720, "km": 18, "description": "Day tariff (07:00–15:00)" },
                        { "type": "night", "from": "15:00", "to": "07:00", "base": 75, "hour": 1136, "km": 14 }
                    ],
                    "big": [
                        { "type": "all", "base": 95, "hour": 1600, "km": 32, "description": "24h tariff" }
                    ]
                }
            }
        }"#;

        let json: JsonTariffCatalog = serde_json::from_str(input).unwrap();
        let catalog = json.create_catalog().unwrap();

        let rules = catalog.lookup(CompanyId::Tor, CarClass::Small);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].kind(), TariffKind::Day);
        assert_eq!(rules[0].description(), "Day tariff (07:00–15:00)");
        assert_eq!(rules[1].description(), "");

        let big = catalog.lookup(CompanyId::Tor, CarClass::Big);
        assert_eq!(big[0].kind(), TariffKind::AllDay);
        assert!(big[0].window().is_none());
    }

    #[test]
    fn rejects_unknown_kind_and_unknown_fields() {
        let unknown_kind = r#"{
            "companies": { "tor": { "small": [ { "type": "rush-hour", "base": 1, "hour": 1, "km": 1 } ] } }
        }"#;
        assert!(serde_json::from_str::<JsonTariffCatalog>(unknown_kind).is_err());

        let unknown_field = r#"{
            "companies": { "tor": { "small": [ { "type": "all", "base": 1, "hour": 1, "km": 1, "surge": 2 } ] } }
        }"#;
        assert!(serde_json::from_str::<JsonTariffCatalog>(unknown_field).is_err());
    }

    #[test]
    fn windowed_kind_without_times_is_rejected() {
        let input = r#"{
            "companies": { "vib": { "small": [ { "type": "day", "from": "09:00", "base": 61, "hour": 590, "km": 16.82 } ] } }
        }"#;

        let json: JsonTariffCatalog = serde_json::from_str(input).unwrap();
        assert_eq!(
            json.create_catalog().unwrap_err(),
            JsonCatalogError::MissingWindow {
                company: CompanyId::Vib,
                car_class: CarClass::Small,
                kind: TariffKind::Day,
            }
        );
    }

    #[test]
    fn all_day_with_times_is_rejected() {
        let input = r#"{
            "companies": { "gtt": { "big": [ { "type": "all", "from": "09:00", "to": "15:00", "base": 97, "hour": 1400, "km": 34.3 } ] } }
        }"#;

        let json: JsonTariffCatalog = serde_json::from_str(input).unwrap();
        assert_eq!(
            json.create_catalog().unwrap_err(),
            JsonCatalogError::UnexpectedWindow {
                company: CompanyId::Gtt,
                car_class: CarClass::Big,
            }
        );
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let input = r#"{
            "companies": { "gtt": { "small": [ { "type": "all", "base": -75, "hour": 760, "km": 20 } ] } }
        }"#;

        let json: JsonTariffCatalog = serde_json::from_str(input).unwrap();
        assert_eq!(
            json.create_catalog().unwrap_err(),
            JsonCatalogError::InvalidAmount {
                company: CompanyId::Gtt,
                car_class: CarClass::Small,
                field: "base",
                value: -75.0,
            }
        );
    }

    #[test]
    fn empty_rule_list_is_rejected() {
        let input = r#"{ "companies": { "click": { "small": [] } } }"#;

        let json: JsonTariffCatalog = serde_json::from_str(input).unwrap();
        assert_eq!(
            json.create_catalog().unwrap_err(),
            JsonCatalogError::EmptyRules {
                company: CompanyId::Click,
                car_class: CarClass::Small,
            }
        );
    }
}
