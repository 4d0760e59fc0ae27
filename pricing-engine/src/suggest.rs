use rust_decimal::Decimal;

use shared::currency::Currency;

/// Pre-fills an offer input from the market's current best prices: one
/// step above the standing best offer, capped at the lowest list.
/// Display-only; submissions are not validated against this.
pub fn suggested_offer_price(
    lowest_list: Option<Decimal>,
    highest_offer: Option<Decimal>,
    currency: &Currency,
) -> Option<Decimal> {
    let step = currency.offer_step;
    match (lowest_list, highest_offer) {
        (Some(list), Some(offer)) => Some((offer + step).min(list)),
        (Some(list), None) => Some((list - step).max(step)),
        (None, Some(offer)) => Some(offer + step),
        (None, None) => None,
    }
}

/// Mirror of [`suggested_offer_price`]: one step under the lowest
/// standing list, floored at the best offer.
pub fn suggested_list_price(
    lowest_list: Option<Decimal>,
    highest_offer: Option<Decimal>,
    currency: &Currency,
) -> Option<Decimal> {
    let step = currency.list_step;
    match (lowest_list, highest_offer) {
        (Some(list), Some(offer)) => Some((list - step).max(offer)),
        (Some(list), None) => Some((list - step).max(step)),
        (None, Some(offer)) => Some(offer + step),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::{
        currency::{CurrencyId, Locale},
        money::PrecisionUnit,
    };

    fn sgd() -> Currency {
        Currency {
            id: CurrencyId(1),
            code: "SGD".to_string(),
            symbol: "S$".to_string(),
            locale: Locale::EnUs,
            rate: Decimal::ONE,
            precision: PrecisionUnit::Tenth,
            max_decimals: 2,
            insurance_max_free: Decimal::ZERO,
            offer_step: dec!(5),
            list_step: dec!(10),
        }
    }

    #[test]
    fn offer_steps_over_the_best_offer_but_not_past_the_list() {
        let currency = sgd();
        assert_eq!(
            suggested_offer_price(Some(dec!(200)), Some(dec!(180)), &currency),
            Some(dec!(185))
        );
        assert_eq!(
            suggested_offer_price(Some(dec!(182)), Some(dec!(180)), &currency),
            Some(dec!(182))
        );
        assert_eq!(
            suggested_offer_price(Some(dec!(200)), None, &currency),
            Some(dec!(195))
        );
        assert_eq!(
            suggested_offer_price(None, Some(dec!(180)), &currency),
            Some(dec!(185))
        );
        assert_eq!(suggested_offer_price(None, None, &currency), None);
    }

    #[test]
    fn list_undercuts_but_never_crosses_the_best_offer() {
        let currency = sgd();
        assert_eq!(
            suggested_list_price(Some(dec!(200)), Some(dec!(180)), &currency),
            Some(dec!(190))
        );
        assert_eq!(
            suggested_list_price(Some(dec!(185)), Some(dec!(180)), &currency),
            Some(dec!(180))
        );
        assert_eq!(
            suggested_list_price(Some(dec!(200)), None, &currency),
            Some(dec!(190))
        );
        assert_eq!(
            suggested_list_price(None, Some(dec!(180)), &currency),
            Some(dec!(190))
        );
        assert_eq!(suggested_list_price(None, None, &currency), None);
    }

    #[test]
    fn tiny_lists_do_not_suggest_a_non_positive_price() {
        let currency = sgd();
        assert_eq!(
            suggested_offer_price(Some(dec!(3)), None, &currency),
            Some(dec!(5))
        );
    }
}
