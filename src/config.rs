// ============================================================================
// Rounding Configuration
// Target scale and rounding policy for a configured rounder
// ============================================================================

use crate::numeric::{checked_scale, DecimalResult};
use crate::rounding::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a [`DecimalRounder`](crate::rounding::DecimalRounder).
///
/// `scale` is signed so that a negative value supplied by a caller (or read
/// from a config file) is rejected by [`validate`](Self::validate) instead of
/// being clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundingConfig {
    /// Number of fractional digits to retain
    pub scale: i64,

    /// Rounding policy for the discarded digits
    pub mode: RoundingMode,
}

impl RoundingConfig {
    /// Create a new configuration with required parameters
    pub fn new(scale: i64, mode: RoundingMode) -> Self {
        Self { scale, mode }
    }

    /// Round half to even at `scale` fractional digits
    pub fn bankers(scale: i64) -> Self {
        Self::new(scale, RoundingMode::HalfEven)
    }

    /// Two fractional digits, half to even (cents)
    pub fn currency() -> Self {
        Self::bankers(2)
    }

    /// No fractional digits, half to even
    pub fn whole_units() -> Self {
        Self::bankers(0)
    }

    /// Builder method: Set the target scale
    pub fn with_scale(mut self, scale: i64) -> Self {
        self.scale = scale;
        self
    }

    /// Builder method: Set the rounding mode
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// `NegativeScale` or `ScaleTooLarge`, both of kind `InvalidArgument`.
    pub fn validate(&self) -> DecimalResult<()> {
        checked_scale(self.scale).map(|_| ())
    }
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self::currency()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::DecimalError;

    #[test]
    fn test_presets() {
        assert_eq!(RoundingConfig::currency(), RoundingConfig::new(2, RoundingMode::HalfEven));
        assert_eq!(RoundingConfig::whole_units().scale, 0);
        assert_eq!(RoundingConfig::bankers(4).mode, RoundingMode::HalfEven);
        assert_eq!(RoundingConfig::default(), RoundingConfig::currency());
    }

    #[test]
    fn test_builder() {
        let config = RoundingConfig::default()
            .with_scale(3)
            .with_mode(RoundingMode::Floor);
        assert_eq!(config.scale, 3);
        assert_eq!(config.mode, RoundingMode::Floor);
    }

    #[test]
    fn test_validate() {
        assert!(RoundingConfig::currency().validate().is_ok());
        assert!(RoundingConfig::whole_units().validate().is_ok());

        let negative = RoundingConfig::bankers(-2);
        assert_eq!(negative.validate(), Err(DecimalError::NegativeScale(-2)));
        assert!(negative.validate().unwrap_err().is_invalid_argument());

        let huge = RoundingConfig::bankers(i64::MAX);
        assert_eq!(huge.validate(), Err(DecimalError::ScaleTooLarge(i64::MAX)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = RoundingConfig::new(2, RoundingMode::HalfUp);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"scale":2,"mode":"HALF_UP"}"#);

        let parsed: RoundingConfig = serde_json::from_str(r#"{"mode":"FLOOR"}"#).unwrap();
        assert_eq!(parsed, RoundingConfig::new(2, RoundingMode::Floor));
    }
}
