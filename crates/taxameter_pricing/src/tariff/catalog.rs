use fxhash::FxHashMap;
use smallvec::SmallVec;

use crate::tariff::{
    car_class::CarClass,
    company::CompanyId,
    rule::{Amount, TariffKind, TariffRule, TariffRuleBuilder},
    time_window::TimeWindow,
};

type RuleList = SmallVec<[TariffRule; 2]>;

/// Rules of one company, per car class. Every present list is non-empty;
/// a missing class simply means the company does not serve it.
#[derive(Default, Debug, Clone)]
pub struct CompanyTariffSet {
    rules: FxHashMap<CarClass, RuleList>,
}

impl CompanyTariffSet {
    #[inline]
    pub fn rules(&self, car_class: CarClass) -> &[TariffRule] {
        self.rules
            .get(&car_class)
            .map(|rules| rules.as_slice())
            .unwrap_or(&[])
    }

    pub fn car_classes(&self) -> impl Iterator<Item = CarClass> + '_ {
        CarClass::ALL
            .into_iter()
            .filter(|car_class| self.rules.contains_key(car_class))
    }
}

/// Read-only tariff table. Built once, from the built-in definition or a
/// catalog file, and shared freely afterwards.
#[derive(Debug, Clone)]
pub struct TariffCatalog {
    companies: FxHashMap<CompanyId, CompanyTariffSet>,
}

impl TariffCatalog {
    /// Ordered rules for a company/class pairing. An unknown pairing yields
    /// the empty slice; callers decide whether that is an error.
    #[inline]
    pub fn lookup(&self, company: CompanyId, car_class: CarClass) -> &[TariffRule] {
        self.companies
            .get(&company)
            .map(|set| set.rules(car_class))
            .unwrap_or(&[])
    }

    pub fn company(&self, company: CompanyId) -> Option<&CompanyTariffSet> {
        self.companies.get(&company)
    }

    /// Configured companies in declaration order.
    pub fn companies(&self) -> impl Iterator<Item = CompanyId> + '_ {
        CompanyId::ALL
            .into_iter()
            .filter(|company| self.companies.contains_key(company))
    }

    /// Tariff table of the five operators of the group, amounts in SEK.
    /// Click runs small cars only.
    pub fn builtin() -> Self {
        use CarClass::{Big, Small};
        use CompanyId::{Click, Gtt, Kurir, Tor, Vib};
        use TariffKind::{Day, Night, NightWeekend, WeekdayDay};

        let mut builder = TariffCatalogBuilder::default();

        builder
            .add_rule(
                Vib,
                Small,
                windowed(Day, "09:00", "15:00", 61.0, 590.0, 16.82, "Day tariff (09:00–15:00)"),
            )
            .add_rule(
                Vib,
                Small,
                windowed(Night, "15:00", "09:00", 61.0, 597.67, 19.66, "Night tariff (15:00–09:00)"),
            )
            .add_rule(
                Vib,
                Big,
                windowed(Day, "09:00", "15:00", 89.0, 885.0, 25.23, "Day tariff (09:00–15:00)"),
            )
            .add_rule(
                Vib,
                Big,
                windowed(Night, "15:00", "09:00", 84.0, 895.0, 29.49, "Night tariff (15:00–09:00)"),
            );

        builder
            .add_rule(
                Tor,
                Small,
                windowed(Day, "07:00", "15:00", 39.0, 720.0, 18.0, "Day tariff (07:00–15:00)"),
            )
            .add_rule(
                Tor,
                Small,
                windowed(Night, "15:00", "07:00", 75.0, 1136.0, 14.0, "Night tariff (15:00–07:00)"),
            )
            .add_rule(Tor, Big, all_day(95.0, 1600.0, 32.0, "24h tariff"));

        builder
            .add_rule(Gtt, Small, all_day(75.0, 760.0, 20.0, "24h tariff"))
            .add_rule(Gtt, Big, all_day(97.0, 1400.0, 34.3, "24h tariff"));

        builder
            .add_rule(
                Kurir,
                Small,
                windowed(WeekdayDay, "09:00", "15:00", 54.0, 590.0, 19.7, "Workday tariff (09:00–15:00)"),
            )
            .add_rule(
                Kurir,
                Small,
                windowed(
                    NightWeekend,
                    "15:00",
                    "09:00",
                    54.0,
                    655.0,
                    20.65,
                    "Night & weekend tariff (15:00–09:00 + Fri + Sat)",
                ),
            )
            .add_rule(
                Kurir,
                Big,
                windowed(WeekdayDay, "09:00", "15:00", 82.0, 885.0, 27.2, "Workday tariff (09:00–15:00)"),
            )
            .add_rule(
                Kurir,
                Big,
                windowed(
                    NightWeekend,
                    "15:00",
                    "09:00",
                    82.0,
                    1085.0,
                    27.2,
                    "Night & weekend tariff (15:00–09:00 + Fri + Sat)",
                ),
            );

        builder
            .add_rule(
                Click,
                Small,
                windowed(Day, "07:00", "15:00", 75.0, 836.0, 18.0, "Day tariff (07:00–15:00)"),
            )
            .add_rule(
                Click,
                Small,
                windowed(Night, "15:00", "07:00", 75.0, 1136.0, 14.0, "Night tariff (15:00–07:00)"),
            );

        builder.build()
    }
}

fn windowed(
    kind: TariffKind,
    from: &str,
    to: &str,
    base_fare: Amount,
    hourly_rate: Amount,
    per_km_rate: Amount,
    description: &str,
) -> TariffRule {
    let mut builder = TariffRuleBuilder::default();
    builder
        .set_kind(kind)
        .set_window(TimeWindow::from_hm(from, to))
        .set_base_fare(base_fare)
        .set_hourly_rate(hourly_rate)
        .set_per_km_rate(per_km_rate)
        .set_description(description);
    builder.build()
}

fn all_day(
    base_fare: Amount,
    hourly_rate: Amount,
    per_km_rate: Amount,
    description: &str,
) -> TariffRule {
    let mut builder = TariffRuleBuilder::default();
    builder
        .set_kind(TariffKind::AllDay)
        .set_base_fare(base_fare)
        .set_hourly_rate(hourly_rate)
        .set_per_km_rate(per_km_rate)
        .set_description(description);
    builder.build()
}

#[derive(Default)]
pub struct TariffCatalogBuilder {
    companies: FxHashMap<CompanyId, CompanyTariffSet>,
}

impl TariffCatalogBuilder {
    /// Rules keep insertion order per (company, class); that order is the
    /// selector's scan and fallback order.
    pub fn add_rule(
        &mut self,
        company: CompanyId,
        car_class: CarClass,
        rule: TariffRule,
    ) -> &mut Self {
        self.companies
            .entry(company)
            .or_default()
            .rules
            .entry(car_class)
            .or_default()
            .push(rule);
        self
    }

    pub fn build(self) -> TariffCatalog {
        TariffCatalog {
            companies: self.companies,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_the_five_companies() {
        let catalog = TariffCatalog::builtin();
        let companies: Vec<_> = catalog.companies().collect();

        assert_eq!(companies.len(), 5);
        for company in CompanyId::ALL {
            assert!(!catalog.lookup(company, CarClass::Small).is_empty());
        }
    }

    #[test]
    fn click_has_no_big_cars() {
        let catalog = TariffCatalog::builtin();

        assert!(catalog.lookup(CompanyId::Click, CarClass::Big).is_empty());
        let classes: Vec<_> = catalog
            .company(CompanyId::Click)
            .unwrap()
            .car_classes()
            .collect();
        assert_eq!(classes, vec![CarClass::Small]);
    }

    #[test]
    fn lookup_preserves_rule_order() {
        let catalog = TariffCatalog::builtin();
        let rules = catalog.lookup(CompanyId::Tor, CarClass::Small);

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].kind(), TariffKind::Day);
        assert_eq!(rules[1].kind(), TariffKind::Night);
        assert_eq!(rules[0].base_fare(), 39.0);
        assert_eq!(rules[1].hourly_rate(), 1136.0);
    }

    #[test]
    fn single_rule_pairs_are_all_day() {
        let catalog = TariffCatalog::builtin();

        for (company, car_class) in [
            (CompanyId::Tor, CarClass::Big),
            (CompanyId::Gtt, CarClass::Small),
            (CompanyId::Gtt, CarClass::Big),
        ] {
            let rules = catalog.lookup(company, car_class);
            assert_eq!(rules.len(), 1);
            assert_eq!(rules[0].kind(), TariffKind::AllDay);
        }
    }

    #[test]
    fn kurir_carries_the_weekday_pair() {
        let catalog = TariffCatalog::builtin();

        for car_class in CarClass::ALL {
            let rules = catalog.lookup(CompanyId::Kurir, car_class);
            assert_eq!(rules[0].kind(), TariffKind::WeekdayDay);
            assert_eq!(rules[1].kind(), TariffKind::NightWeekend);
        }
    }
}
