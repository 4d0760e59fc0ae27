use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::country::CountryId;

/// Seller fee tier assigned by the backend.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SellerTier {
    /// Selling-fee percentage for this tier.
    pub value: Decimal,
    #[serde(default = "default_true")]
    pub promotions_applicable: bool,
    #[serde(default = "default_multiplier")]
    pub shipping_fee_multiplier: Decimal,
    #[serde(default)]
    pub power_features: bool,
}

impl Default for SellerTier {
    fn default() -> Self {
        Self {
            value: Decimal::ZERO,
            promotions_applicable: default_true(),
            shipping_fee_multiplier: default_multiplier(),
            power_features: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_multiplier() -> Decimal {
    Decimal::ONE
}

/// Pricing-relevant subset of a user.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub country_id: Option<CountryId>,
    #[serde(default)]
    pub shipping_country_id: Option<CountryId>,
    #[serde(default)]
    pub groups: Vec<String>,
    #[serde(default)]
    pub selling: SellerTier,
    #[serde(default)]
    pub points: u64,
    #[serde(default)]
    pub remote_area: bool,
    #[serde(default)]
    pub first_purchase_promo_eligible: bool,
}
