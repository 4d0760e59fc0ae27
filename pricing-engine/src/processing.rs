use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionMode {
    Buy,
    Offer,
    Sell,
    List,
}

/// One row of the processing-fee table. Unset fields match any
/// transaction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProcessingFeeRate {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub mode: Option<TransactionMode>,
    pub rate: Decimal,
}

impl ProcessingFeeRate {
    fn matches(&self, country: &str, payment_method: Option<&str>, mode: TransactionMode) -> bool {
        let country_ok = self.country.as_deref().map_or(true, |c| c == country);
        let method_ok = self
            .payment_method
            .as_deref()
            .map_or(true, |m| payment_method == Some(m));
        let mode_ok = self.mode.map_or(true, |m| m == mode);
        country_ok && method_ok && mode_ok
    }
}

/// The largest matching rate wins. Specific rows only beat general
/// fallbacks by being numerically larger; configuration authors must
/// keep overrides above their fallbacks. Mirrors the backend table
/// exactly.
pub fn processing_rate(
    rates: &[ProcessingFeeRate],
    country: &str,
    payment_method: Option<&str>,
    mode: TransactionMode,
) -> Decimal {
    rates
        .iter()
        .filter(|row| row.matches(country, payment_method, mode))
        .map(|row| row.rate)
        .max()
        .unwrap_or(Decimal::ZERO)
}
