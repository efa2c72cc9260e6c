use serde::Serialize;

use crate::{
    quote::select::MatchBasis,
    tariff::rule::{Amount, TariffRule},
};

/// Priced ride. The three parts are rounded to whole öre (2 decimals) for
/// display; `total` is rounded to whole SEK from the unrounded sum, half
/// away from zero. The displayed parts can therefore differ from `total`
/// by a fraction of an öre, which is expected and stays uncorrected.
#[derive(Serialize, Debug, Clone)]
pub struct PriceBreakdown {
    pub base_part: Amount,
    pub time_part: Amount,
    pub distance_part: Amount,
    pub total: i64,
    pub tariff: TariffRule,
    pub basis: MatchBasis,
}

impl PriceBreakdown {
    pub(crate) fn from_parts(
        rule: &TariffRule,
        basis: MatchBasis,
        base: Amount,
        time: Amount,
        distance: Amount,
    ) -> Self {
        PriceBreakdown {
            base_part: round_part(base),
            time_part: round_part(time),
            distance_part: round_part(distance),
            total: round_total(base + time + distance),
            tariff: rule.clone(),
            basis,
        }
    }
}

fn round_part(amount: Amount) -> Amount {
    (amount * 100.0).round() / 100.0
}

fn round_total(amount: Amount) -> i64 {
    amount.round() as i64
}
