use rust_decimal::{Decimal, RoundingStrategy};

use shared::currency::{Currency, Locale};

/// Where the currency marker sits relative to the amount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolPosition {
    /// `S$ 120`
    Front,
    /// `120.00 SGD`
    Back,
}

/// Locale-aware display formatting. `decimals` is clamped to the
/// currency's `max_decimals`; unknown locales fall back to plain
/// fixed-point output.
pub fn to_currency_string(
    amount: Decimal,
    currency: &Currency,
    decimals: u32,
    position: SymbolPosition,
) -> String {
    let decimals = decimals.min(currency.max_decimals);
    let amount = amount.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_digits(amount, decimals, currency.locale);
    match position {
        SymbolPosition::Front => format!("{} {}", currency.symbol, digits),
        SymbolPosition::Back => format!("{} {}", digits, currency.code),
    }
}

fn group_digits(amount: Decimal, decimals: u32, locale: Locale) -> String {
    let fixed = format!("{:.*}", decimals as usize, amount);
    let (separator, point) = match locale {
        Locale::EnUs | Locale::EnIn => (',', '.'),
        Locale::EnEu => ('.', ','),
        Locale::Other => return fixed,
    };
    let unsigned = fixed.trim_start_matches('-');
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let grouped = match locale {
        Locale::EnIn => group_indian(int_part, separator),
        _ => group_thousands(int_part, separator),
    };
    let mut out = String::new();
    if fixed.starts_with('-') {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push(point);
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}

/// Indian grouping: the last three digits, then pairs (12,34,567).
fn group_indian(digits: &str, separator: char) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let head_len = head.len();
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    for (i, c) in head.chars().enumerate() {
        if i > 0 && (head_len - i) % 2 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out.push(separator);
    out.push_str(tail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::{currency::CurrencyId, money::PrecisionUnit};

    fn currency(code: &str, symbol: &str, locale: Locale, max_decimals: u32) -> Currency {
        Currency {
            id: CurrencyId(1),
            code: code.to_string(),
            symbol: symbol.to_string(),
            locale,
            rate: Decimal::ONE,
            precision: PrecisionUnit::Hundredth,
            max_decimals,
            insurance_max_free: Decimal::ZERO,
            offer_step: Decimal::ONE,
            list_step: Decimal::ONE,
        }
    }

    #[test]
    fn front_and_back_positions() {
        let usd = currency("USD", "$", Locale::EnUs, 2);
        assert_eq!(
            to_currency_string(dec!(1234.5), &usd, 2, SymbolPosition::Front),
            "$ 1,234.50"
        );
        assert_eq!(
            to_currency_string(dec!(120), &usd, 2, SymbolPosition::Back),
            "120.00 USD"
        );
    }

    #[test]
    fn decimals_clamped_to_currency_max() {
        let jpy = currency("JPY", "¥", Locale::EnUs, 0);
        assert_eq!(
            to_currency_string(dec!(1234.56), &jpy, 4, SymbolPosition::Front),
            "¥ 1,235"
        );
    }

    #[test]
    fn eu_grouping_swaps_separators() {
        let eur = currency("EUR", "€", Locale::EnEu, 2);
        assert_eq!(
            to_currency_string(dec!(1234567.89), &eur, 2, SymbolPosition::Back),
            "1.234.567,89 EUR"
        );
    }

    #[test]
    fn indian_grouping() {
        let inr = currency("INR", "₹", Locale::EnIn, 2);
        assert_eq!(
            to_currency_string(dec!(1234567.89), &inr, 2, SymbolPosition::Front),
            "₹ 12,34,567.89"
        );
        assert_eq!(
            to_currency_string(dec!(123), &inr, 0, SymbolPosition::Front),
            "₹ 123"
        );
    }

    #[test]
    fn unknown_locale_uses_plain_fixed_point() {
        let xyz = currency("XYZ", "X", Locale::Other, 2);
        assert_eq!(
            to_currency_string(dec!(1234567.89), &xyz, 2, SymbolPosition::Back),
            "1234567.89 XYZ"
        );
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        let usd = currency("USD", "$", Locale::EnUs, 2);
        assert_eq!(
            to_currency_string(dec!(-1234.5), &usd, 2, SymbolPosition::Front),
            "$ -1,234.50"
        );
    }
}
