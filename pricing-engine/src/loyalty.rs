use lazy_static::lazy_static;
use rust_decimal::prelude::*;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::app::LoyaltyConfig;

/// Points earned on a completed purchase. Computed on base-currency
/// amounts; a promo code reduces the earning base.
pub fn points_earned(
    price_base: Decimal,
    promocode_base: Decimal,
    first_purchase: bool,
    config: &LoyaltyConfig,
) -> u64 {
    let bonus = if first_purchase {
        config.first_purchase_bonus
    } else {
        Decimal::ZERO
    };
    let earned = bonus + config.earn_rate * (price_base - promocode_base);
    earned.max(Decimal::ZERO).ceil().to_u64().unwrap_or(0)
}

lazy_static! {
    /// Welcome discount granted to a referred user, by currency code.
    static ref REFERRAL_WELCOME_DISCOUNTS: HashMap<&'static str, Decimal> = {
        let mut table = HashMap::new();
        table.insert("USD", dec!(15));
        table.insert("SGD", dec!(20));
        table.insert("EUR", dec!(15));
        table.insert("GBP", dec!(12));
        table.insert("AUD", dec!(22));
        table.insert("NZD", dec!(25));
        table.insert("MYR", dec!(65));
        table.insert("IDR", dec!(230000));
        table.insert("TWD", dec!(450));
        table.insert("HKD", dec!(120));
        table.insert("JPY", dec!(1700));
        table
    };
}

/// Referral discounts are fixed per currency, not converted from base,
/// so they land on marketing-friendly round numbers.
pub fn referral_welcome_discount(currency_code: &str) -> Option<Decimal> {
    REFERRAL_WELCOME_DISCOUNTS.get(currency_code).copied()
}
