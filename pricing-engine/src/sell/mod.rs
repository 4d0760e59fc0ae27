use rust_decimal::Decimal;
use serde::Serialize;

use shared::{product::Product, promotion::PromotionId, refdata::ReferenceData, user::UserProfile};

use crate::{
    app::{PricingConfig, PricingError},
    currency::{convert, round_down, round_up},
    processing::{processing_rate, TransactionMode},
    promotion::{select_best_promotion, PromotionContext},
    weight::{bracket_weight_g, chargeable_weight_g, LARGE_PARCEL_G},
};

/// Fee lines for a sale or listing, all in the display currency. The
/// payout is what the seller actually receives.
#[derive(Clone, Debug, Serialize)]
pub struct SellFeeBreakdown {
    pub processing: Decimal,
    /// Shipping actually deducted (post-promotion; zero for
    /// sell-from-storage).
    pub shipping: Decimal,
    pub shipping_regular: Decimal,
    pub selling: Decimal,
    pub selling_regular: Decimal,
    pub total_payout: Decimal,
    pub shipping_promotion: Option<PromotionId>,
    pub selling_promotion: Option<PromotionId>,
}

pub struct SellFeeCalculator<'a> {
    refdata: &'a ReferenceData,
    config: &'a PricingConfig,
}

impl<'a> SellFeeCalculator<'a> {
    pub fn new(refdata: &'a ReferenceData, config: &'a PricingConfig) -> Self {
        Self { refdata, config }
    }

    pub fn fees(
        &self,
        price: Decimal,
        sale_storage_ref: Option<&str>,
        product: &Product,
        seller: &UserProfile,
        mode: TransactionMode,
    ) -> Result<SellFeeBreakdown, PricingError> {
        let display = self.refdata.current_currency()?;
        let country_id = seller
            .shipping_country_id
            .unwrap_or(self.refdata.current_country_id);
        let country = self.refdata.country(country_id)?;
        let courier = self.refdata.currency(country.currency_id)?;
        let from_storage = sale_storage_ref.is_some();

        let weight = bracket_weight_g(chargeable_weight_g(product, None));
        let curve = (country.shipping_base + country.shipping_increment * Decimal::from(weight))
            * seller.selling.shipping_fee_multiplier;
        let mut shipping_regular = round_up(convert(curve, courier, display), display);
        if weight >= LARGE_PARCEL_G {
            shipping_regular += round_up(
                convert(country.shipping_surcharge, courier, display),
                display,
            );
        }

        let ctx = PromotionContext {
            country_id: Some(country.id),
            user_groups: &seller.groups,
            order_value: price,
            product_collections: &product.collections,
            from_storage,
            promotions_applicable: seller.selling.promotions_applicable,
            as_of: self.refdata.loaded_at,
        };

        let best_shipping = select_best_promotion(
            &self.refdata.shipping_promotions,
            &ctx,
            shipping_regular,
            |promotion| promotion.discount,
        );
        let shipping_promotion = best_shipping.as_ref().map(|applied| applied.promotion.id);
        let shipping_discounted = best_shipping.map_or(shipping_regular, |applied| applied.fee);
        // Storage inventory is already in the warehouse; nothing ships.
        let shipping = if from_storage {
            Decimal::ZERO
        } else {
            shipping_discounted
        };

        let selling_regular = round_up(price * seller.selling.value / Decimal::ONE_HUNDRED, display);
        let best_selling = select_best_promotion(
            &self.refdata.selling_promotions,
            &ctx,
            selling_regular,
            |promotion| {
                if mode == TransactionMode::List {
                    promotion.discount_for_listing()
                } else {
                    promotion.discount
                }
            },
        );
        let selling_promotion = best_selling.as_ref().map(|applied| applied.promotion.id);
        let selling = best_selling.map_or(selling_regular, |applied| applied.fee);

        let rate = processing_rate(
            &self.config.processing_fees,
            &country.shortcode,
            None,
            mode,
        );
        let processing = round_up(rate * price, display);

        let total_payout = round_down(price - selling - processing - shipping, display);

        Ok(SellFeeBreakdown {
            processing,
            shipping,
            shipping_regular,
            selling,
            selling_regular,
            total_payout,
            shipping_promotion,
            selling_promotion,
        })
    }
}
