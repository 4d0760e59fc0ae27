use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pricing-relevant subset of a product. Weights are grams.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub actual_weight_g: u32,
    #[serde(default)]
    pub vol_weight_g: u32,
    #[serde(default)]
    pub collections: Vec<String>,
    #[serde(default)]
    pub category_level_2: Option<String>,
}

/// Optional add-on sold with a product (e.g. protective packaging).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductAddOn {
    /// Unit price in the display currency.
    pub price: Decimal,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub actual_weight_g: u32,
    #[serde(default)]
    pub vol_weight_g: u32,
}

fn default_quantity() -> u32 {
    1
}
