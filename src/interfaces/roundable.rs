// ============================================================================
// Roundable Interface
// Defines the contract for decimal types that support exact rounding
// ============================================================================

use crate::numeric::{checked_scale, DecimalResult, DecimalValue};
use crate::rounding::{round_to_scale, DecimalRounder, RoundingMode};

/// Decimal types that can be rounded to a number of fractional digits.
///
/// Application code that owns a stored numeric field (a price, a balance)
/// can stay generic over the decimal representation it uses and delegate
/// to this trait before rendering.
pub trait Roundable: Sized {
    /// Round to `scale` fractional digits with `mode`.
    ///
    /// # Errors
    /// An `InvalidArgument` error for a negative `scale`.
    fn round_to(&self, scale: i64, mode: RoundingMode) -> DecimalResult<Self>;

    /// Bankers' rounding shorthand
    fn round_half_even_to(&self, scale: i64) -> DecimalResult<Self> {
        self.round_to(scale, RoundingMode::HalfEven)
    }

    /// Round with a configured rounder (infallible, the rounder is validated)
    fn round_with(&self, rounder: &DecimalRounder) -> Self;
}

impl Roundable for DecimalValue {
    fn round_to(&self, scale: i64, mode: RoundingMode) -> DecimalResult<Self> {
        let target = checked_scale(scale)?;
        Ok(round_to_scale(self, target, mode))
    }

    fn round_with(&self, rounder: &DecimalRounder) -> Self {
        rounder.round(self)
    }
}

impl Roundable for rust_decimal::Decimal {
    /// Delegates to `round_dp_with_strategy`; scales past the 28 digits
    /// `Decimal` can hold discard nothing and return the value unchanged.
    fn round_to(&self, scale: i64, mode: RoundingMode) -> DecimalResult<Self> {
        let target = checked_scale(scale)?;
        Ok(self.round_dp_with_strategy(target, mode.into()))
    }

    fn round_with(&self, rounder: &DecimalRounder) -> Self {
        self.round_dp_with_strategy(rounder.scale(), rounder.mode().into())
    }
}
