// ============================================================================
// Decimal Rounder Library
// Exact arbitrary-precision decimal rounding with pluggable rounding modes
// ============================================================================

//! # Decimal Rounder
//!
//! Correctly rounded decimal arithmetic without binary floating point.
//!
//! ## Features
//!
//! - **Exact decimal values** stored as a big-integer significand plus scale
//! - **Round half to even** (bankers' rounding) and six other rounding modes
//! - **Lossless text round-trip** for canonical decimal literals
//! - **Interop** with `rust_decimal::Decimal` at API boundaries
//!
//! ## Example
//!
//! ```rust
//! use decimal_rounder::prelude::*;
//!
//! // Binary floating point cannot hold 2.675 exactly; DecimalValue can
//! let price: DecimalValue = "2.675".parse().unwrap();
//!
//! let rounded = price.round(2, RoundingMode::HalfEven).unwrap();
//! assert_eq!(rounded.to_string(), "2.68");
//!
//! // Ties go to the even neighbour
//! let tie: DecimalValue = "2.545".parse().unwrap();
//! assert_eq!(tie.round_half_even(2).unwrap().to_string(), "2.54");
//!
//! // A configured rounder pads to a fixed number of digits
//! let rounder = DecimalRounder::new(RoundingConfig::currency()).unwrap();
//! assert_eq!(rounder.format(&"7.5".parse().unwrap()), "7.50");
//! ```

pub mod config;
pub mod interfaces;
pub mod numeric;
pub mod rounding;
#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::RoundingConfig;
    pub use crate::interfaces::Roundable;
    pub use crate::numeric::{DecimalError, DecimalResult, DecimalValue, ErrorKind};
    pub use crate::rounding::{round, DecimalRounder, RoundingMode};
}
