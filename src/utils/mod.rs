// ============================================================================
// Utilities Module
// Helper functions for applications embedding the rounder
// ============================================================================

mod logging;

pub use logging::init_logging;
