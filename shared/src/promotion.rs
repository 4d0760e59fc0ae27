use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::country::CountryId;

crate::id_wrapper! { PromotionId }

/// Promotion that only applies to sales fulfilled from platform
/// storage, matched by name.
pub const SELL_FROM_STORAGE: &str = "Sell-From-Storage";

/// How a promotion transforms the regular fee it applies to.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "discount_type",
    content = "discount_value",
    rename_all = "kebab-case"
)]
pub enum Discount {
    /// Percentage knocked off the regular fee.
    Percentage(Decimal),
    /// Flat amount subtracted from the regular fee, floored at zero.
    FixedReduction(Decimal),
    /// Flat fee capped at the regular fee.
    Fixed(Decimal),
}

/// A discretionary discount rule. Unset eligibility fields mean "no
/// constraint".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Promotion {
    pub id: PromotionId,
    pub name: String,
    #[serde(flatten)]
    pub discount: Discount,
    /// Consulted instead of `discount` when quoting a listing.
    #[serde(default)]
    pub listing_discount: Option<Discount>,
    #[serde(default)]
    pub country_id: Option<CountryId>,
    #[serde(default)]
    pub user_group: Option<String>,
    #[serde(default)]
    pub minimum_value: Option<Decimal>,
    #[serde(default)]
    pub product_collection: Option<String>,
    #[serde(default)]
    pub valid_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub valid_until: Option<DateTime<Utc>>,
}

impl Promotion {
    pub fn discount_for_listing(&self) -> Discount {
        self.listing_discount.unwrap_or(self.discount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserialize_promotion() -> anyhow::Result<()> {
        let raw = r#"{
            "id": 7,
            "name": "Launch delivery promo",
            "discount_type": "percentage",
            "discount_value": "20",
            "country_id": 3,
            "minimum_value": "50"
        }"#;
        let promotion: Promotion = serde_json::from_str(raw)?;
        assert_eq!(promotion.discount, Discount::Percentage(dec!(20)));
        assert_eq!(promotion.country_id, Some(CountryId(3)));
        assert_eq!(promotion.user_group, None);
        Ok(())
    }

    #[test]
    fn listing_discount_falls_back() {
        let promotion = Promotion {
            id: PromotionId(1),
            name: "Seller promo".to_string(),
            discount: Discount::Percentage(dec!(50)),
            listing_discount: None,
            country_id: None,
            user_group: None,
            minimum_value: None,
            product_collection: None,
            valid_from: None,
            valid_until: None,
        };
        assert_eq!(promotion.discount_for_listing(), Discount::Percentage(dec!(50)));
    }
}
