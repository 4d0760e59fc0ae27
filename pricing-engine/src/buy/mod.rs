use derive_builder::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shared::{
    product::{Product, ProductAddOn},
    promotion::PromotionId,
    refdata::ReferenceData,
    user::UserProfile,
};

use crate::{
    app::{PricingConfig, PricingError},
    currency::{convert, round_up, to_base_currency},
    loyalty,
    processing::{processing_rate, TransactionMode},
    promotion::{select_best_promotion, PromotionContext},
    weight::{bracket_weight_g, chargeable_weight_g, LARGE_PARCEL_G},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliverTo {
    Address,
    /// Hold the purchase in the platform warehouse; the base delivery
    /// fee is deferred to the later withdrawal.
    Storage,
}

/// A promo code that already passed validation upstream. `value` is in
/// the display currency.
#[derive(Clone, Debug)]
pub struct Promocode {
    pub value: Decimal,
}

#[derive(Builder, Clone, Debug)]
pub struct BuyOptions {
    #[builder(default = "TransactionMode::Buy")]
    pub mode: TransactionMode,
    #[builder(default)]
    pub payment_method: Option<String>,
    #[builder(default = "DeliverTo::Address")]
    pub deliver_to: DeliverTo,
    /// Declared parcel value for delivery insurance, in the display
    /// currency.
    #[builder(default)]
    pub declared_value: Option<Decimal>,
    #[builder(default)]
    pub instant_delivery: bool,
}

impl BuyOptions {
    pub fn builder() -> BuyOptionsBuilder {
        BuyOptionsBuilder::default()
    }
}

impl Default for BuyOptions {
    fn default() -> Self {
        Self {
            mode: TransactionMode::Buy,
            payment_method: None,
            deliver_to: DeliverTo::Address,
            declared_value: None,
            instant_delivery: false,
        }
    }
}

/// Fee lines for a purchase or offer, all in the display currency.
/// Recomputed fresh on every price or option change, never mutated.
#[derive(Clone, Debug, Serialize)]
pub struct BuyFeeBreakdown {
    pub processing: Decimal,
    /// Delivery actually charged at checkout (post-promotion; zero for
    /// storage deliveries).
    pub delivery: Decimal,
    /// Pre-promotion delivery fee, for strike-through display.
    pub delivery_regular: Decimal,
    pub delivery_instant: Decimal,
    pub delivery_insurance: Decimal,
    pub promocode_discount: Decimal,
    pub add_on: Decimal,
    pub total_price: Decimal,
    pub delivery_promotion: Option<PromotionId>,
    pub loyalty_points: u64,
}

pub struct BuyFeeCalculator<'a> {
    refdata: &'a ReferenceData,
    config: &'a PricingConfig,
}

impl<'a> BuyFeeCalculator<'a> {
    pub fn new(refdata: &'a ReferenceData, config: &'a PricingConfig) -> Self {
        Self { refdata, config }
    }

    pub fn fees(
        &self,
        price: Decimal,
        product: &Product,
        buyer: &UserProfile,
        promocode: Option<&Promocode>,
        add_on: Option<&ProductAddOn>,
        options: &BuyOptions,
    ) -> Result<BuyFeeBreakdown, PricingError> {
        let display = self.refdata.current_currency()?;
        let country_id = buyer.country_id.unwrap_or(self.refdata.current_country_id);
        let country = self.refdata.country(country_id)?;
        let courier = self.refdata.currency(country.currency_id)?;

        let weight = bracket_weight_g(chargeable_weight_g(product, add_on));
        let curve = country.delivery_base + country.delivery_increment * Decimal::from(weight);
        let mut delivery_regular = round_up(convert(curve, courier, display), display);
        if buyer.remote_area {
            delivery_regular += round_up(
                convert(country.delivery_surcharge_remote, courier, display),
                display,
            );
        }
        if weight >= LARGE_PARCEL_G {
            delivery_regular += round_up(
                convert(country.delivery_surcharge, courier, display),
                display,
            );
        }

        let ctx = PromotionContext {
            country_id: Some(country.id),
            user_groups: &buyer.groups,
            order_value: price,
            product_collections: &product.collections,
            from_storage: false,
            promotions_applicable: true,
            as_of: self.refdata.loaded_at,
        };
        let best = select_best_promotion(
            &self.refdata.delivery_promotions,
            &ctx,
            delivery_regular,
            |promotion| promotion.discount,
        );
        let delivery_promotion = best.as_ref().map(|applied| applied.promotion.id);
        let delivery_discounted = best.map_or(delivery_regular, |applied| applied.fee);

        let delivery_instant = if options.instant_delivery {
            round_up(convert(country.delivery_instant, courier, display), display)
        } else {
            Decimal::ZERO
        };
        let delivery = match options.deliver_to {
            DeliverTo::Storage => Decimal::ZERO,
            DeliverTo::Address => delivery_discounted,
        };

        let rate = processing_rate(
            &self.config.processing_fees,
            &country.shortcode,
            options.payment_method.as_deref(),
            options.mode,
        );
        let processing = round_up(rate * price, display);

        let delivery_insurance = match options.declared_value {
            Some(declared) if declared > display.insurance_max_free => round_up(
                (declared - display.insurance_max_free) * self.config.insurance.rate,
                display,
            ),
            _ => Decimal::ZERO,
        };

        let promocode_discount = promocode.map_or(Decimal::ZERO, |code| code.value);
        let add_on_price =
            add_on.map_or(Decimal::ZERO, |a| a.price * Decimal::from(a.quantity));

        let total_price = round_up(
            price + delivery + delivery_instant + processing + delivery_insurance + add_on_price
                - promocode_discount,
            display,
        );

        let loyalty_points = loyalty::points_earned(
            to_base_currency(price, display),
            to_base_currency(promocode_discount, display),
            buyer.first_purchase_promo_eligible,
            &self.config.loyalty,
        );

        Ok(BuyFeeBreakdown {
            processing,
            delivery,
            delivery_regular,
            delivery_instant,
            delivery_insurance,
            promocode_discount,
            add_on: add_on_price,
            total_price,
            delivery_promotion,
            loyalty_points,
        })
    }
}
