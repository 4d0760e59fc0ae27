use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::processing::ProcessingFeeRate;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub processing_fees: Vec<ProcessingFeeRate>,
    #[serde(default)]
    pub insurance: InsuranceConfig,
    #[serde(default)]
    pub loyalty: LoyaltyConfig,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct InsuranceConfig {
    /// Premium charged on declared value above the currency's free
    /// threshold.
    #[serde(default = "default_insurance_rate")]
    pub rate: Decimal,
}

impl Default for InsuranceConfig {
    fn default() -> Self {
        Self {
            rate: default_insurance_rate(),
        }
    }
}

fn default_insurance_rate() -> Decimal {
    dec!(0.03)
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoyaltyConfig {
    #[serde(default = "default_first_purchase_bonus")]
    pub first_purchase_bonus: Decimal,
    /// Points per base-currency unit spent.
    #[serde(default = "default_earn_rate")]
    pub earn_rate: Decimal,
}

impl Default for LoyaltyConfig {
    fn default() -> Self {
        Self {
            first_purchase_bonus: default_first_purchase_bonus(),
            earn_rate: default_earn_rate(),
        }
    }
}

fn default_first_purchase_bonus() -> Decimal {
    dec!(50)
}

fn default_earn_rate() -> Decimal {
    dec!(0.05)
}
