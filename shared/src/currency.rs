use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::PrecisionUnit;

crate::id_wrapper! { CurrencyId }

/// Digit-grouping convention used when rendering amounts. `Other`
/// falls back to plain fixed-point output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    EnUs,
    EnEu,
    EnIn,
    #[serde(other)]
    Other,
}

/// Immutable currency reference entity. `rate` converts base-currency
/// amounts to this currency by multiplication.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Currency {
    pub id: CurrencyId,
    pub code: String,
    pub symbol: String,
    pub locale: Locale,
    pub rate: Decimal,
    pub precision: PrecisionUnit,
    pub max_decimals: u32,
    /// Declared delivery value up to which insurance is free.
    #[serde(default)]
    pub insurance_max_free: Decimal,
    #[serde(default = "default_price_step")]
    pub offer_step: Decimal,
    #[serde(default = "default_price_step")]
    pub list_step: Decimal,
}

fn default_price_step() -> Decimal {
    Decimal::ONE
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserialize_currency() -> anyhow::Result<()> {
        let raw = r#"
            id: 2
            code: SGD
            symbol: S$
            locale: en-us
            rate: "1.35"
            precision: "0.1"
            max_decimals: 2
            insurance_max_free: 100
        "#;
        let currency: Currency = serde_yaml::from_str(raw)?;
        assert_eq!(currency.id, CurrencyId(2));
        assert_eq!(currency.precision, PrecisionUnit::Tenth);
        assert_eq!(currency.rate, dec!(1.35));
        assert_eq!(currency.offer_step, Decimal::ONE);
        Ok(())
    }

    #[test]
    fn unknown_locale_falls_back() -> anyhow::Result<()> {
        let locale: Locale = serde_yaml::from_str("xx-zz")?;
        assert_eq!(locale, Locale::Other);
        Ok(())
    }
}
