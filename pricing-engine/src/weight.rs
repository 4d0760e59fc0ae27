use shared::product::{Product, ProductAddOn};

const SMALL_STEP_G: u32 = 500;
const LARGE_STEP_G: u32 = 1000;

/// Bracketed weight at which parcels switch to whole-kilogram steps
/// and heavy-parcel surcharges start to apply.
pub const LARGE_PARCEL_G: u32 = 5000;

/// Couriers charge on whichever is greater of volumetric and actual
/// weight, add-ons included.
pub fn chargeable_weight_g(product: &Product, add_on: Option<&ProductAddOn>) -> u32 {
    let (add_on_actual, add_on_vol) = add_on.map_or((0, 0), |add_on| {
        (
            add_on.actual_weight_g * add_on.quantity,
            add_on.vol_weight_g * add_on.quantity,
        )
    });
    (product.vol_weight_g + add_on_vol).max(product.actual_weight_g + add_on_actual)
}

/// Rounds a weight up onto the courier pricing tiers: 500 g steps
/// below 5 kg, whole kilograms from there. At and above 5 kg the
/// weight always moves to the next kilogram, even on a boundary.
pub fn bracket_weight_g(weight_g: u32) -> u32 {
    if weight_g < LARGE_PARCEL_G {
        (weight_g + SMALL_STEP_G - 1) / SMALL_STEP_G * SMALL_STEP_G
    } else {
        (weight_g / LARGE_STEP_G + 1) * LARGE_STEP_G
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_parcels_round_up_to_500() {
        assert_eq!(bracket_weight_g(1), 500);
        assert_eq!(bracket_weight_g(499), 500);
        assert_eq!(bracket_weight_g(500), 500);
        assert_eq!(bracket_weight_g(501), 1000);
        assert_eq!(bracket_weight_g(4999), 5000);
    }

    #[test]
    fn large_parcels_move_to_the_next_kilogram() {
        assert_eq!(bracket_weight_g(5000), 6000);
        assert_eq!(bracket_weight_g(5999), 6000);
        assert_eq!(bracket_weight_g(6000), 7000);
    }

    #[test]
    fn zero_weight_stays_zero() {
        assert_eq!(bracket_weight_g(0), 0);
    }

    #[test]
    fn chargeable_weight_takes_the_heavier_measure() {
        let product = Product {
            actual_weight_g: 900,
            vol_weight_g: 1200,
            ..Product::default()
        };
        assert_eq!(chargeable_weight_g(&product, None), 1200);

        let add_on = ProductAddOn {
            price: rust_decimal::Decimal::ONE,
            quantity: 2,
            actual_weight_g: 300,
            vol_weight_g: 50,
        };
        // actual: 900 + 600 = 1500 now outweighs vol: 1200 + 100 = 1300
        assert_eq!(chargeable_weight_g(&product, Some(&add_on)), 1500);
    }
}
