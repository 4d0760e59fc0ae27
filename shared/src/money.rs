use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Decimal digits kept when scrubbing arithmetic noise before a
/// precision rounding. Rate divisions can produce long expansions.
const NOISE_DECIMALS: u32 = 4;

#[derive(Error, Debug)]
pub enum PrecisionUnitError {
    #[error("Unsupported precision unit {0}")]
    Unsupported(Decimal),
}

/// Direction applied when snapping an amount onto a precision grid.
///
/// Buyer-facing totals round `Up` (never undercharge), seller payouts
/// round `Down` (never overpay).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    Nearest,
    Up,
    Down,
}

/// Rounding granularity of a currency. Only this fixed set occurs in
/// reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub enum PrecisionUnit {
    Hundredth,
    Tenth,
    One,
    Ten,
    Hundred,
    Thousand,
}

impl PrecisionUnit {
    pub fn as_decimal(self) -> Decimal {
        match self {
            PrecisionUnit::Hundredth => dec!(0.01),
            PrecisionUnit::Tenth => dec!(0.1),
            PrecisionUnit::One => dec!(1),
            PrecisionUnit::Ten => dec!(10),
            PrecisionUnit::Hundred => dec!(100),
            PrecisionUnit::Thousand => dec!(1000),
        }
    }

    pub const ALL: [PrecisionUnit; 6] = [
        PrecisionUnit::Hundredth,
        PrecisionUnit::Tenth,
        PrecisionUnit::One,
        PrecisionUnit::Ten,
        PrecisionUnit::Hundred,
        PrecisionUnit::Thousand,
    ];
}

impl TryFrom<Decimal> for PrecisionUnit {
    type Error = PrecisionUnitError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        PrecisionUnit::ALL
            .into_iter()
            .find(|unit| unit.as_decimal() == value)
            .ok_or(PrecisionUnitError::Unsupported(value))
    }
}

impl From<PrecisionUnit> for Decimal {
    fn from(unit: PrecisionUnit) -> Self {
        unit.as_decimal()
    }
}

/// Scrubs arithmetic noise from an amount before it is snapped onto a
/// precision grid. Not a business rule.
pub fn normalize(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(NOISE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
}

/// Snaps `amount` onto the nearest multiple of `unit` in the given
/// direction. The result is always an exact multiple of `unit`.
pub fn round_to_unit(amount: Decimal, unit: PrecisionUnit, mode: RoundingMode) -> Decimal {
    let unit = unit.as_decimal();
    let steps = normalize(amount) / unit;
    let steps = match mode {
        RoundingMode::Nearest => {
            steps.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        }
        RoundingMode::Up => steps.ceil(),
        RoundingMode::Down => steps.floor(),
    };
    steps * unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_is_multiple_of_unit() {
        let samples = [
            dec!(0),
            dec!(0.004),
            dec!(1.05),
            dec!(7.35),
            dec!(99.99),
            dec!(1234.5678),
            dec!(-3.333),
            dec!(150000),
        ];
        for unit in PrecisionUnit::ALL {
            for amount in samples {
                for mode in [RoundingMode::Nearest, RoundingMode::Up, RoundingMode::Down] {
                    let rounded = round_to_unit(amount, unit, mode);
                    assert!(
                        (rounded / unit.as_decimal()).fract().is_zero(),
                        "{} @ {:?} {:?} -> {}",
                        amount,
                        unit,
                        mode,
                        rounded
                    );
                }
            }
        }
    }

    #[test]
    fn up_bounds_down() {
        let samples = [dec!(0.004), dec!(1.05), dec!(7.35), dec!(99.99), dec!(1234.5678)];
        for unit in PrecisionUnit::ALL {
            for amount in samples {
                let up = round_to_unit(amount, unit, RoundingMode::Up);
                let down = round_to_unit(amount, unit, RoundingMode::Down);
                assert!(up >= amount, "{} up {:?}", amount, unit);
                assert!(down <= amount, "{} down {:?}", amount, unit);
            }
        }
    }

    #[test]
    fn nearest_rounds_half_away_from_zero() {
        assert_eq!(round_to_unit(dec!(2.5), PrecisionUnit::One, RoundingMode::Nearest), dec!(3));
        assert_eq!(
            round_to_unit(dec!(0.25), PrecisionUnit::Tenth, RoundingMode::Nearest),
            dec!(0.3)
        );
        assert_eq!(
            round_to_unit(dec!(1500), PrecisionUnit::Thousand, RoundingMode::Nearest),
            dec!(2000)
        );
    }

    #[test]
    fn normalize_scrubs_noise() {
        assert_eq!(normalize(dec!(6.99999999)), dec!(7));
        assert_eq!(normalize(dec!(7.00000001)), dec!(7));
        assert_eq!(normalize(dec!(1.23456)), dec!(1.2346));
    }

    #[test]
    fn noisy_amount_does_not_jump_a_grid_step() {
        // A hair over the grid point must not ceil to the next step.
        assert_eq!(
            round_to_unit(dec!(7.00000001), PrecisionUnit::Tenth, RoundingMode::Up),
            dec!(7.0)
        );
    }

    #[test]
    fn precision_unit_from_decimal() -> anyhow::Result<()> {
        assert_eq!(PrecisionUnit::try_from(dec!(0.1))?, PrecisionUnit::Tenth);
        assert_eq!(PrecisionUnit::try_from(dec!(1000))?, PrecisionUnit::Thousand);
        assert!(PrecisionUnit::try_from(dec!(0.5)).is_err());
        Ok(())
    }
}
