// ============================================================================
// Logging Setup
// Installs a tracing subscriber for applications without one
// ============================================================================

use tracing::Level;

/// Install a `fmt` subscriber that prints events at `level` and above.
///
/// Returns `false` when a global subscriber was already installed, in which
/// case the existing one is left untouched. Safe to call more than once.
pub fn init_logging(level: Level) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(%level, "tracing subscriber installed");
    }
    installed
}
