// ============================================================================
// Rounding Mode
// Tie-break and directional policies for discarding decimal digits
// ============================================================================

use crate::numeric::DecimalError;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the discarded digits compare to one half of a unit in the last
/// retained place. Variants are ordered by the size of the dropped fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Discarded {
    /// Every discarded digit is zero (the value is already exact)
    Zero,
    /// Non-zero, strictly less than one half
    BelowHalf,
    /// Exactly one half (a tie)
    Half,
    /// Strictly more than one half
    AboveHalf,
}

/// Rounding policy applied when digits are discarded.
///
/// Names follow the conventional decimal-library constants (`HALF_EVEN`,
/// `HALF_UP`, ...). Directions are stated for the value, not its magnitude.
///
/// | Mode | 2.5 | -2.5 | 2.4 | -2.6 |
/// |---|---|---|---|---|
/// | `HalfEven` | 2 | -2 | 2 | -3 |
/// | `HalfUp` | 3 | -3 | 2 | -3 |
/// | `HalfDown` | 2 | -2 | 2 | -3 |
/// | `Up` | 3 | -3 | 3 | -3 |
/// | `Down` | 2 | -2 | 2 | -2 |
/// | `Ceiling` | 3 | -2 | 3 | -2 |
/// | `Floor` | 2 | -3 | 2 | -3 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum RoundingMode {
    /// Nearest neighbour; ties go to the even last digit (bankers' rounding)
    #[default]
    HalfEven,
    /// Nearest neighbour; ties go away from zero
    HalfUp,
    /// Nearest neighbour; ties go toward zero
    HalfDown,
    /// Away from zero whenever a non-zero digit is discarded
    Up,
    /// Toward zero (truncation)
    Down,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
}

impl RoundingMode {
    /// Every supported mode.
    pub const ALL: [RoundingMode; 7] = [
        RoundingMode::HalfEven,
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::Up,
        RoundingMode::Down,
        RoundingMode::Ceiling,
        RoundingMode::Floor,
    ];

    /// Canonical constant-style name, e.g. `HALF_EVEN`.
    pub const fn name(self) -> &'static str {
        match self {
            RoundingMode::HalfEven => "HALF_EVEN",
            RoundingMode::HalfUp => "HALF_UP",
            RoundingMode::HalfDown => "HALF_DOWN",
            RoundingMode::Up => "UP",
            RoundingMode::Down => "DOWN",
            RoundingMode::Ceiling => "CEILING",
            RoundingMode::Floor => "FLOOR",
        }
    }

    /// Whether the retained magnitude must be incremented by one unit.
    ///
    /// # Arguments
    /// * `negative` - sign of the value being rounded
    /// * `kept_is_odd` - parity of the last retained digit
    /// * `discarded` - classification of the dropped digits
    pub fn increments_magnitude(
        self,
        negative: bool,
        kept_is_odd: bool,
        discarded: Discarded,
    ) -> bool {
        if discarded == Discarded::Zero {
            return false;
        }

        match self {
            RoundingMode::Up => true,
            RoundingMode::Down => false,
            RoundingMode::Ceiling => !negative,
            RoundingMode::Floor => negative,
            RoundingMode::HalfUp => discarded >= Discarded::Half,
            RoundingMode::HalfDown => discarded == Discarded::AboveHalf,
            RoundingMode::HalfEven => match discarded {
                Discarded::AboveHalf => true,
                Discarded::Half => kept_is_odd,
                Discarded::BelowHalf | Discarded::Zero => false,
            },
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = DecimalError;

    /// Parse a mode name.
    ///
    /// Case-insensitive; `-` and spaces count as `_`, an optional `ROUND_`
    /// prefix is ignored and `CamelCase` names are accepted, so
    /// `"HALF_EVEN"`, `"round_half_even"`, `"half-even"` and `"HalfEven"`
    /// all parse to [`RoundingMode::HalfEven`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut canonical = String::with_capacity(s.len() + 4);
        let mut prev_lower = false;
        for c in s.trim().chars() {
            if c == '-' || c == ' ' || c == '_' {
                canonical.push('_');
                prev_lower = false;
                continue;
            }
            if c.is_ascii_uppercase() && prev_lower {
                canonical.push('_');
            }
            prev_lower = c.is_ascii_lowercase();
            canonical.push(c.to_ascii_uppercase());
        }
        let name = canonical.strip_prefix("ROUND_").unwrap_or(&canonical);

        RoundingMode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .or(match name {
                "BANKERS" => Some(RoundingMode::HalfEven),
                _ => None,
            })
            .ok_or_else(|| DecimalError::UnknownRoundingMode(s.to_string()))
    }
}

// ============================================================================
// Conversion to rust_decimal (for API boundaries)
// ============================================================================

impl From<RoundingMode> for rust_decimal::RoundingStrategy {
    fn from(mode: RoundingMode) -> Self {
        use rust_decimal::RoundingStrategy;

        match mode {
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfDown => RoundingStrategy::MidpointTowardZero,
            RoundingMode::Up => RoundingStrategy::AwayFromZero,
            RoundingMode::Down => RoundingStrategy::ToZero,
            RoundingMode::Ceiling => RoundingStrategy::ToPositiveInfinity,
            RoundingMode::Floor => RoundingStrategy::ToNegativeInfinity,
        }
    }
}
