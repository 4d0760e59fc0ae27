use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use shared::{
    country::CountryId,
    money::{round_to_unit, PrecisionUnit, RoundingMode},
    promotion::{Discount, Promotion, SELL_FROM_STORAGE},
};

/// Transaction facts the eligibility predicates run against. Unset
/// fields on a promotion are treated as "no constraint".
pub struct PromotionContext<'a> {
    pub country_id: Option<CountryId>,
    pub user_groups: &'a [String],
    pub order_value: Decimal,
    pub product_collections: &'a [String],
    pub from_storage: bool,
    pub promotions_applicable: bool,
    pub as_of: DateTime<Utc>,
}

pub fn is_applicable(promotion: &Promotion, ctx: &PromotionContext) -> bool {
    if promotion.name == SELL_FROM_STORAGE && !ctx.from_storage {
        return false;
    }
    let group_ok = promotion
        .user_group
        .as_ref()
        .map_or(true, |group| ctx.user_groups.contains(group));
    let country_ok = promotion
        .country_id
        .map_or(true, |id| ctx.country_id == Some(id));
    let minimum_ok = promotion
        .minimum_value
        .map_or(true, |minimum| ctx.order_value >= minimum);
    let collection_ok = promotion
        .product_collection
        .as_ref()
        .map_or(true, |collection| ctx.product_collections.contains(collection));
    let window_ok = promotion.valid_from.map_or(true, |from| ctx.as_of >= from)
        && promotion.valid_until.map_or(true, |until| ctx.as_of <= until);
    group_ok && country_ok && minimum_ok && collection_ok && window_ok
}

/// Fee that would be charged if `discount` were applied to
/// `regular_fee`.
pub fn promotional_fee(discount: Discount, regular_fee: Decimal) -> Decimal {
    match discount {
        Discount::Percentage(percent) => round_to_unit(
            regular_fee - regular_fee * percent / Decimal::ONE_HUNDRED,
            PrecisionUnit::Tenth,
            RoundingMode::Up,
        ),
        Discount::FixedReduction(amount) => (regular_fee - amount).max(Decimal::ZERO),
        Discount::Fixed(fee) => fee.min(regular_fee),
    }
}

pub struct AppliedPromotion<'a> {
    pub promotion: &'a Promotion,
    pub fee: Decimal,
}

/// Ordered fold over the candidates. The running best is only replaced
/// on a strict improvement, so equal fees resolve to the earliest
/// candidate in list order; a winner must also beat the regular fee
/// outright. List order is semantically significant - never reorder or
/// deduplicate the input.
pub fn select_best_promotion<'a>(
    promotions: &'a [Promotion],
    ctx: &PromotionContext,
    regular_fee: Decimal,
    extract_discount: impl Fn(&Promotion) -> Discount,
) -> Option<AppliedPromotion<'a>> {
    if !ctx.promotions_applicable {
        return None;
    }
    let mut best: Option<AppliedPromotion<'a>> = None;
    for promotion in promotions {
        if !is_applicable(promotion, ctx) {
            continue;
        }
        let fee = promotional_fee(extract_discount(promotion), regular_fee);
        if fee < regular_fee && best.as_ref().map_or(true, |current| fee < current.fee) {
            best = Some(AppliedPromotion { promotion, fee });
        }
    }
    best
}
