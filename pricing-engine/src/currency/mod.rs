mod format;

pub use format::*;

use rust_decimal::Decimal;

use shared::{
    currency::Currency,
    money::{round_to_unit, PrecisionUnit, RoundingMode},
};

/// Converts a base-currency amount into `currency`, snapped to the
/// currency's own precision.
pub fn to_local_currency(amount_base: Decimal, currency: &Currency) -> Decimal {
    round_to_unit(
        amount_base * currency.rate,
        currency.precision,
        RoundingMode::Nearest,
    )
}

/// Base currency is the precise accounting unit, so no rounding here.
pub fn to_base_currency(amount_local: Decimal, currency: &Currency) -> Decimal {
    amount_local / currency.rate
}

/// Re-prices an amount quoted in `from` into `to` via the base-rate
/// ratio. Cost curves are defined in a country's native currency and
/// cross over to the transaction's display currency through here.
pub fn convert(amount: Decimal, from: &Currency, to: &Currency) -> Decimal {
    amount * to.rate / from.rate
}

/// Buyer-facing convention for asking prices: whole units, rounded up.
pub fn to_list_price(amount_base: Decimal, currency: &Currency) -> Decimal {
    round_to_unit(
        to_local_currency(amount_base, currency),
        PrecisionUnit::One,
        RoundingMode::Up,
    )
}

/// Offers round down so a bid never silently rounds in the offerer's
/// favor.
pub fn to_offer_price(amount_base: Decimal, currency: &Currency) -> Decimal {
    round_to_unit(
        to_local_currency(amount_base, currency),
        PrecisionUnit::One,
        RoundingMode::Down,
    )
}

pub fn round_up(amount: Decimal, currency: &Currency) -> Decimal {
    round_to_unit(amount, currency.precision, RoundingMode::Up)
}

pub fn round_down(amount: Decimal, currency: &Currency) -> Decimal {
    round_to_unit(amount, currency.precision, RoundingMode::Down)
}
