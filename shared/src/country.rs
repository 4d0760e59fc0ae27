use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::CurrencyId;

crate::id_wrapper! { CountryId }

/// Country reference entity. The delivery and shipping fields define
/// linear cost curves (`base + increment * weight`, in grams) priced in
/// the country's own currency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Country {
    pub id: CountryId,
    pub shortcode: String,
    pub currency_id: CurrencyId,
    pub delivery_base: Decimal,
    pub delivery_increment: Decimal,
    #[serde(default)]
    pub delivery_surcharge: Decimal,
    #[serde(default)]
    pub delivery_surcharge_remote: Decimal,
    #[serde(default)]
    pub delivery_instant: Decimal,
    pub shipping_base: Decimal,
    pub shipping_increment: Decimal,
    #[serde(default)]
    pub shipping_surcharge: Decimal,
}
