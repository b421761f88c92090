// ============================================================================
// Decimal Rounder
// Exact digit-level rounding of arbitrary-precision decimal values
// ============================================================================

use super::mode::{Discarded, RoundingMode};
use crate::config::RoundingConfig;
use crate::numeric::{checked_scale, decimal_digits, pow10, DecimalResult, DecimalValue};
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Round `value` to `target_scale` fractional digits.
///
/// If `value` already has `target_scale` or fewer fractional digits it is
/// returned unchanged (same significand, same scale). Otherwise the
/// significand's magnitude is split into kept and discarded digits, the
/// discarded part is compared to one half of a unit in the last kept place
/// and `mode` decides whether the kept magnitude is incremented. The sign
/// is reapplied afterwards, so the `Half*` modes are symmetric around zero.
///
/// # Errors
/// `NegativeScale` (kind `InvalidArgument`) for `target_scale < 0`, and
/// `ScaleTooLarge` for a scale beyond `u32::MAX`. No clamping is done.
///
/// # Example
/// ```
/// use decimal_rounder::numeric::DecimalValue;
/// use decimal_rounder::rounding::{round, RoundingMode};
///
/// let price: DecimalValue = "2.545".parse().unwrap();
/// let rounded = round(&price, 2, RoundingMode::HalfEven).unwrap();
/// assert_eq!(rounded.to_string(), "2.54");
/// ```
pub fn round(
    value: &DecimalValue,
    target_scale: i64,
    mode: RoundingMode,
) -> DecimalResult<DecimalValue> {
    let target = checked_scale(target_scale)?;
    Ok(round_to_scale(value, target, mode))
}

/// Rounding with an already validated target scale.
pub(crate) fn round_to_scale(
    value: &DecimalValue,
    target: u32,
    mode: RoundingMode,
) -> DecimalValue {
    if value.scale() <= target {
        return value.clone();
    }

    let dropped = value.scale() - target;
    let negative = value.is_negative();
    let magnitude = value.significand().magnitude();

    let (kept, discarded) = split_magnitude(magnitude, dropped);
    let increment = mode.increments_magnitude(negative, kept.is_odd(), discarded);

    tracing::trace!(
        scale = value.scale(),
        target_scale = target,
        %mode,
        ?discarded,
        increment,
        "rounded decimal value"
    );

    let kept = if increment { kept + BigUint::one() } else { kept };
    let sign = if negative { Sign::Minus } else { Sign::Plus };

    // from_biguint maps a zero magnitude to an unsigned zero
    DecimalValue::from_parts(BigInt::from_biguint(sign, kept), target)
}

/// Split `magnitude` after dropping its `dropped` least significant digits.
fn split_magnitude(magnitude: &BigUint, dropped: u32) -> (BigUint, Discarded) {
    // Fewer digits than are being dropped: nothing is kept and the
    // remainder is below 10^(dropped - 1), well under one half.
    if decimal_digits(magnitude) < dropped as usize {
        let discarded = if magnitude.is_zero() {
            Discarded::Zero
        } else {
            Discarded::BelowHalf
        };
        return (BigUint::zero(), discarded);
    }

    let divisor = pow10(dropped);
    let (kept, remainder) = magnitude.div_rem(&divisor);
    (kept, classify(&remainder, &divisor))
}

/// Compare `remainder / divisor` with one half.
fn classify(remainder: &BigUint, divisor: &BigUint) -> Discarded {
    if remainder.is_zero() {
        return Discarded::Zero;
    }
    let doubled: BigUint = remainder * 2u32;
    match doubled.cmp(divisor) {
        std::cmp::Ordering::Less => Discarded::BelowHalf,
        std::cmp::Ordering::Equal => Discarded::Half,
        std::cmp::Ordering::Greater => Discarded::AboveHalf,
    }
}

// ============================================================================
// Configured Rounder
// ============================================================================

/// Rounder bound to a validated [`RoundingConfig`].
///
/// Holds no mutable state, so one instance can be shared freely between
/// threads.
///
/// # Example
/// ```
/// use decimal_rounder::prelude::*;
///
/// let rounder = DecimalRounder::new(RoundingConfig::currency()).unwrap();
/// let total: DecimalValue = "19.985".parse().unwrap();
/// assert_eq!(rounder.format(&total), "19.98");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecimalRounder {
    config: RoundingConfig,
    scale: u32,
}

impl DecimalRounder {
    /// Create a rounder from configuration.
    ///
    /// # Errors
    /// Returns the configuration's validation error (kind `InvalidArgument`).
    pub fn new(config: RoundingConfig) -> DecimalResult<Self> {
        config.validate()?;
        let scale = checked_scale(config.scale)?;

        tracing::debug!(scale, mode = %config.mode, "created decimal rounder");

        Ok(Self { config, scale })
    }

    /// Bankers' rounding at `scale` fractional digits.
    pub fn half_even(scale: i64) -> DecimalResult<Self> {
        Self::new(RoundingConfig::bankers(scale))
    }

    #[inline]
    pub fn config(&self) -> &RoundingConfig {
        &self.config
    }

    #[inline]
    pub fn scale(&self) -> u32 {
        self.scale
    }

    #[inline]
    pub fn mode(&self) -> RoundingMode {
        self.config.mode
    }

    /// Round `value` with the configured scale and mode.
    pub fn round(&self, value: &DecimalValue) -> DecimalValue {
        round_to_scale(value, self.scale, self.config.mode)
    }

    /// Parse an exact decimal literal and round it.
    ///
    /// # Errors
    /// `MalformedLiteral` when `literal` is not a decimal literal.
    pub fn round_str(&self, literal: &str) -> DecimalResult<DecimalValue> {
        let value: DecimalValue = literal.parse()?;
        Ok(self.round(&value))
    }

    /// Round, then render with exactly `scale` fractional digits.
    pub fn format(&self, value: &DecimalValue) -> String {
        self.round(value).pad_to_scale(self.scale).to_string()
    }
}

impl Default for DecimalRounder {
    fn default() -> Self {
        let config = RoundingConfig::default();
        Self {
            scale: config.scale as u32,
            config,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
