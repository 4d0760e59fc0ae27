mod config;
mod error;

pub use config::*;
pub use error::*;

use rust_decimal::Decimal;
use tracing::instrument;

use shared::{
    product::{Product, ProductAddOn},
    refdata::ReferenceData,
    user::UserProfile,
};

use crate::{
    buy::{BuyFeeBreakdown, BuyFeeCalculator, BuyOptions, Promocode},
    processing::TransactionMode,
    sell::{SellFeeBreakdown, SellFeeCalculator},
};

/// Entry point consumed by view-model code. Holds the injected
/// reference-data snapshot and fee configuration; every computation is
/// synchronous, side-effect free and idempotent, cheap enough to run
/// on each keystroke.
pub struct PricingEngine {
    refdata: ReferenceData,
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(refdata: ReferenceData, config: PricingConfig) -> Result<Self, PricingError> {
        refdata.validate()?;
        Ok(Self { refdata, config })
    }

    pub fn refdata(&self) -> &ReferenceData {
        &self.refdata
    }

    #[instrument(name = "pricing.compute_buy_fees", skip_all, fields(%price))]
    pub fn compute_buy_fees(
        &self,
        price: Decimal,
        product: &Product,
        buyer: &UserProfile,
        promocode: Option<&Promocode>,
        add_on: Option<&ProductAddOn>,
        options: &BuyOptions,
    ) -> Result<BuyFeeBreakdown, PricingError> {
        BuyFeeCalculator::new(&self.refdata, &self.config)
            .fees(price, product, buyer, promocode, add_on, options)
    }

    #[instrument(name = "pricing.compute_offer_fees", skip_all, fields(%list))]
    pub fn compute_offer_fees(
        &self,
        list: Decimal,
        product: &Product,
        buyer: &UserProfile,
        promocode: Option<&Promocode>,
        options: &BuyOptions,
    ) -> Result<BuyFeeBreakdown, PricingError> {
        let options = BuyOptions {
            mode: TransactionMode::Offer,
            ..options.clone()
        };
        BuyFeeCalculator::new(&self.refdata, &self.config)
            .fees(list, product, buyer, promocode, None, &options)
    }

    #[instrument(name = "pricing.compute_sell_fees", skip_all, fields(%offer))]
    pub fn compute_sell_fees(
        &self,
        offer: Decimal,
        sale_storage_ref: Option<&str>,
        product: &Product,
        seller: &UserProfile,
    ) -> Result<SellFeeBreakdown, PricingError> {
        SellFeeCalculator::new(&self.refdata, &self.config).fees(
            offer,
            sale_storage_ref,
            product,
            seller,
            TransactionMode::Sell,
        )
    }

    #[instrument(name = "pricing.compute_list_fees", skip_all, fields(%list))]
    pub fn compute_list_fees(
        &self,
        list: Decimal,
        sale_storage_ref: Option<&str>,
        product: &Product,
        seller: &UserProfile,
    ) -> Result<SellFeeBreakdown, PricingError> {
        SellFeeCalculator::new(&self.refdata, &self.config).fees(
            list,
            sale_storage_ref,
            product,
            seller,
            TransactionMode::List,
        )
    }
}
