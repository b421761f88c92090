// ============================================================================
// Rounding Module
// Rounding policies and the exact decimal rounder
// ============================================================================

mod mode;
mod rounder;

pub use mode::{Discarded, RoundingMode};
pub use rounder::{round, DecimalRounder};

pub(crate) use rounder::round_to_scale;
