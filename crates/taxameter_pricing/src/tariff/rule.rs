use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tariff::time_window::TimeWindow;

/// Monetary amount in SEK.
pub type Amount = f64;

/// Labels for when a rule applies. `Day` and `Night` are matched purely by
/// their window; `WeekdayDay` and `NightWeekend` form the Monday-Thursday
/// versus rest-of-week pair and are matched by weekday classification.
#[derive(Deserialize, Serialize, JsonSchema, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TariffKind {
    #[serde(rename = "all")]
    AllDay,
    #[serde(rename = "day")]
    Day,
    #[serde(rename = "night")]
    Night,
    #[serde(rename = "weekday-day")]
    WeekdayDay,
    #[serde(rename = "night-weekend")]
    NightWeekend,
}

impl TariffKind {
    pub fn is_weekday_sensitive(&self) -> bool {
        matches!(self, TariffKind::WeekdayDay | TariffKind::NightWeekend)
    }
}

impl Display for TariffKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TariffKind::AllDay => "all",
                TariffKind::Day => "day",
                TariffKind::Night => "night",
                TariffKind::WeekdayDay => "weekday-day",
                TariffKind::NightWeekend => "night-weekend",
            }
        )
    }
}

/// One pricing rule: a fixed base fare plus linear hourly and per-kilometer
/// rates, valid under the rule's kind/window condition.
#[derive(Serialize, Debug, Clone)]
pub struct TariffRule {
    kind: TariffKind,
    window: Option<TimeWindow>,
    base_fare: Amount,
    hourly_rate: Amount,
    per_km_rate: Amount,
    description: String,
}

impl TariffRule {
    pub fn kind(&self) -> TariffKind {
        self.kind
    }

    pub fn window(&self) -> Option<TimeWindow> {
        self.window
    }

    pub fn base_fare(&self) -> Amount {
        self.base_fare
    }

    pub fn hourly_rate(&self) -> Amount {
        self.hourly_rate
    }

    pub fn per_km_rate(&self) -> Amount {
        self.per_km_rate
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unrounded time charge for a ride of the given length in minutes.
    pub fn time_amount(&self, duration_minutes: f64) -> Amount {
        self.hourly_rate * (duration_minutes / 60.0)
    }

    /// Unrounded distance charge for a ride of the given length in km.
    pub fn distance_amount(&self, distance_km: f64) -> Amount {
        self.per_km_rate * distance_km
    }
}

#[derive(Default)]
pub struct TariffRuleBuilder {
    kind: Option<TariffKind>,
    window: Option<TimeWindow>,
    base_fare: Option<Amount>,
    hourly_rate: Option<Amount>,
    per_km_rate: Option<Amount>,
    description: Option<String>,
}

impl TariffRuleBuilder {
    pub fn set_kind(&mut self, kind: TariffKind) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    pub fn set_window(&mut self, window: TimeWindow) -> &mut Self {
        self.window = Some(window);
        self
    }

    pub fn set_base_fare(&mut self, base_fare: Amount) -> &mut Self {
        self.base_fare = Some(base_fare);
        self
    }

    pub fn set_hourly_rate(&mut self, hourly_rate: Amount) -> &mut Self {
        self.hourly_rate = Some(hourly_rate);
        self
    }

    pub fn set_per_km_rate(&mut self, per_km_rate: Amount) -> &mut Self {
        self.per_km_rate = Some(per_km_rate);
        self
    }

    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Panics when a required field is missing or when a windowed kind has
    /// no window. File-loaded rules are checked before reaching this point.
    pub fn build(self) -> TariffRule {
        let kind = self.kind.expect("Tariff rule requires a kind");

        if kind != TariffKind::AllDay {
            assert!(
                self.window.is_some(),
                "{kind} tariff rule requires a time window"
            );
        }

        TariffRule {
            kind,
            window: self.window,
            base_fare: self.base_fare.expect("Tariff rule requires a base fare"),
            hourly_rate: self
                .hourly_rate
                .expect("Tariff rule requires an hourly rate"),
            per_km_rate: self
                .per_km_rate
                .expect("Tariff rule requires a per-km rate"),
            description: self.description.unwrap_or_default(),
        }
    }
}
