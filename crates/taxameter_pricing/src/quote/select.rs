use std::fmt::Display;

use jiff::civil::{DateTime, Weekday};
use serde::Serialize;

use crate::tariff::{
    car_class::CarClass,
    catalog::TariffCatalog,
    company::CompanyId,
    rule::{TariffKind, TariffRule},
    time_window::TimeWindow,
};

/// Why a rule was selected. `FirstRuleFallback` marks the lenient path taken
/// when no window covered the time of day: gapped catalogs still price, and
/// the fallback is named instead of silent.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MatchBasis {
    OnlyAllDayRule,
    WeekdayDaytime,
    NightOrWeekend,
    WindowMatch,
    FirstRuleFallback,
}

impl Display for MatchBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MatchBasis::OnlyAllDayRule => "only-all-day-rule",
            MatchBasis::WeekdayDaytime => "weekday-daytime",
            MatchBasis::NightOrWeekend => "night-or-weekend",
            MatchBasis::WindowMatch => "window-match",
            MatchBasis::FirstRuleFallback => "first-rule-fallback",
        };

        write!(f, "{label}")
    }
}

/// Selector outcome: the winning rule and the reason it won.
#[derive(Debug, Copy, Clone)]
pub struct SelectedTariff<'a> {
    pub rule: &'a TariffRule,
    pub basis: MatchBasis,
}

/// True for Friday and Saturday. Sunday counts as a regular day; the
/// night-and-weekend tariffs are written around the Fri/Sat nightlife.
pub fn is_weekend_day(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Friday | Weekday::Saturday)
}

/// Monday through Thursday inside the window. Friday, Saturday and Sunday
/// never qualify, whatever the hour.
pub fn is_weekday_daytime(at: DateTime, window: TimeWindow) -> bool {
    if is_weekend_day(at.weekday()) || at.weekday() == Weekday::Sunday {
        return false;
    }

    window.contains(at.time())
}

/// Picks the applicable rule for a company/class pairing at a point in time.
/// Returns `None` only when the pairing has no rules at all.
pub fn select_tariff<'a>(
    catalog: &'a TariffCatalog,
    company: CompanyId,
    car_class: CarClass,
    at: DateTime,
) -> Option<SelectedTariff<'a>> {
    let candidates = catalog.lookup(company, car_class);
    if candidates.is_empty() {
        return None;
    }

    if candidates.len() == 1 && candidates[0].kind() == TariffKind::AllDay {
        return Some(SelectedTariff {
            rule: &candidates[0],
            basis: MatchBasis::OnlyAllDayRule,
        });
    }

    if candidates
        .iter()
        .any(|rule| rule.kind().is_weekday_sensitive())
    {
        return select_weekday_pair(candidates, at);
    }

    for rule in candidates {
        if rule.kind() == TariffKind::AllDay {
            return Some(SelectedTariff {
                rule,
                basis: MatchBasis::WindowMatch,
            });
        }

        if let Some(window) = rule.window() {
            if window.contains(at.time()) {
                return Some(SelectedTariff {
                    rule,
                    basis: MatchBasis::WindowMatch,
                });
            }
        }
    }

    // Windows that leave gaps in the day still price: first rule wins.
    Some(SelectedTariff {
        rule: &candidates[0],
        basis: MatchBasis::FirstRuleFallback,
    })
}

/// The weekday rule applies on Monday-Thursday daytimes; every other moment
/// belongs to the night/weekend rule, with no further window check.
fn select_weekday_pair<'a>(
    candidates: &'a [TariffRule],
    at: DateTime,
) -> Option<SelectedTariff<'a>> {
    let weekday_rule = candidates
        .iter()
        .find(|rule| rule.kind() == TariffKind::WeekdayDay);
    let night_weekend_rule = candidates
        .iter()
        .find(|rule| rule.kind() == TariffKind::NightWeekend);

    if let Some(rule) = weekday_rule {
        if let Some(window) = rule.window() {
            if is_weekday_daytime(at, window) {
                return Some(SelectedTariff {
                    rule,
                    basis: MatchBasis::WeekdayDaytime,
                });
            }
        }
    }

    night_weekend_rule.map(|rule| SelectedTariff {
        rule,
        basis: MatchBasis::NightOrWeekend,
    })
}
