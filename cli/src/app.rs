use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

use pricing_engine::{
    buy::{BuyOptions, DeliverTo, Promocode},
    currency::{to_currency_string, SymbolPosition},
    PricingEngine,
};
use shared::{
    currency::Currency,
    product::Product,
    user::{SellerTier, UserProfile},
};

use super::config::*;

#[derive(Parser)]
#[clap(version, long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[clap(
        short,
        long,
        env = "PRICING_CONFIG",
        default_value = "pricing.yml",
        value_name = "FILE"
    )]
    config: PathBuf,

    /// Reference data snapshot (currencies, countries, promotions)
    #[clap(
        short,
        long,
        env = "PRICING_REFDATA",
        default_value = "refdata.yml",
        value_name = "FILE"
    )]
    refdata: PathBuf,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Quotes the full fee breakdown for a purchase or offer
    QuoteBuy {
        /// Price in the display currency
        price: Decimal,
        /// Product weight in grams
        #[clap(short, long, default_value_t = 0)]
        weight: u32,
        /// Volumetric weight in grams
        #[clap(long)]
        volumetric_weight: Option<u32>,
        #[clap(short, long)]
        payment_method: Option<String>,
        /// Hold the purchase in platform storage
        #[clap(long)]
        storage: bool,
        /// Request instant delivery
        #[clap(long)]
        instant: bool,
        /// Declared parcel value for delivery insurance
        #[clap(long)]
        declare: Option<Decimal>,
        /// Quote as an offer instead of an immediate purchase
        #[clap(long)]
        offer: bool,
        /// Pre-validated promo code value
        #[clap(long)]
        promocode: Option<Decimal>,
    },
    /// Quotes the seller payout for a sale or listing
    QuoteSell {
        /// Sale price in the display currency
        price: Decimal,
        /// Product weight in grams
        #[clap(short, long, default_value_t = 0)]
        weight: u32,
        /// Seller's selling-fee percentage
        #[clap(short, long, default_value = "10")]
        fee_percent: Decimal,
        /// Storage reference when selling out of the warehouse
        #[clap(long)]
        storage_ref: Option<String>,
        /// Quote a listing instead of a completed sale
        #[clap(long)]
        list: bool,
    },
}

pub fn run() -> anyhow::Result<()> {
    crate::tracing::init_tracing()?;
    let cli = Cli::parse();

    let config = Config::from_path(&cli.config)?;
    let refdata = load_reference_data(&cli.refdata)
        .with_context(|| format!("Loading reference data from {}", cli.refdata.display()))?;
    tracing::debug!(
        currencies = refdata.currencies.len(),
        countries = refdata.countries.len(),
        "reference data loaded"
    );
    let engine = PricingEngine::new(refdata, config.pricing)?;

    match cli.command {
        Command::QuoteBuy {
            price,
            weight,
            volumetric_weight,
            payment_method,
            storage,
            instant,
            declare,
            offer,
            promocode,
        } => {
            let product = Product {
                actual_weight_g: weight,
                vol_weight_g: volumetric_weight.unwrap_or(0),
                ..Product::default()
            };
            let buyer = UserProfile::default();
            let options = BuyOptions::builder()
                .payment_method(payment_method)
                .deliver_to(if storage {
                    DeliverTo::Storage
                } else {
                    DeliverTo::Address
                })
                .declared_value(declare)
                .instant_delivery(instant)
                .build()?;
            let promocode = promocode.map(|value| Promocode { value });

            let fees = if offer {
                engine.compute_offer_fees(price, &product, &buyer, promocode.as_ref(), &options)?
            } else {
                engine.compute_buy_fees(
                    price,
                    &product,
                    &buyer,
                    promocode.as_ref(),
                    None,
                    &options,
                )?
            };

            let currency = engine.refdata().current_currency()?;
            print_line("Price", price, currency);
            print_line("Processing fee", fees.processing, currency);
            print_line("Delivery fee", fees.delivery, currency);
            if !fees.delivery_instant.is_zero() {
                print_line("Instant delivery", fees.delivery_instant, currency);
            }
            if !fees.delivery_insurance.is_zero() {
                print_line("Delivery insurance", fees.delivery_insurance, currency);
            }
            if !fees.promocode_discount.is_zero() {
                print_line("Promo code", -fees.promocode_discount, currency);
            }
            print_line("Total", fees.total_price, currency);
            println!("Loyalty points: {}", fees.loyalty_points);
        }
        Command::QuoteSell {
            price,
            weight,
            fee_percent,
            storage_ref,
            list,
        } => {
            let product = Product {
                actual_weight_g: weight,
                ..Product::default()
            };
            let seller = UserProfile {
                selling: SellerTier {
                    value: fee_percent,
                    ..SellerTier::default()
                },
                ..UserProfile::default()
            };

            let fees = if list {
                engine.compute_list_fees(price, storage_ref.as_deref(), &product, &seller)?
            } else {
                engine.compute_sell_fees(price, storage_ref.as_deref(), &product, &seller)?
            };

            let currency = engine.refdata().current_currency()?;
            print_line("Price", price, currency);
            print_line("Selling fee", -fees.selling, currency);
            print_line("Processing fee", -fees.processing, currency);
            print_line("Shipping fee", -fees.shipping, currency);
            print_line("Payout", fees.total_payout, currency);
        }
    }
    Ok(())
}

fn print_line(label: &str, amount: Decimal, currency: &Currency) {
    println!(
        "{:<20} {}",
        label,
        to_currency_string(amount, currency, currency.max_decimals, SymbolPosition::Front)
    );
}
