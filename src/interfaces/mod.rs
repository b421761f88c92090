// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod roundable;

pub use roundable::Roundable;
