// ============================================================================
// Numeric Module
// Exact arbitrary-precision decimal values
// ============================================================================
//
// This module provides:
// - DecimalValue: signed big-integer significand plus a decimal scale
// - DecimalError / ErrorKind: error taxonomy for construction and conversion
//
// Design principles:
// - No floating-point operations
// - Fallible construction returns Result (no panics)
// - Values are immutable; every operation yields a new value

mod decimal;
mod errors;

pub use decimal::DecimalValue;
pub use errors::{DecimalError, DecimalResult, ErrorKind};

pub(crate) use decimal::{decimal_digits, pow10};
pub(crate) use errors::checked_scale;
