//! Process-wide tracing flag.
//!
//! Selects which factory operation the variants call when run through
//! [`Variant::run_global`](crate::Variant::run_global). Variants only read it.

use std::sync::atomic::{AtomicBool, Ordering};

static TRACING: AtomicBool = AtomicBool::new(false);

/// Returns the current value of the tracing flag. Defaults to `false`.
pub fn tracing_enabled() -> bool {
    TRACING.load(Ordering::Relaxed)
}

/// Sets the tracing flag, returning the previous value.
pub fn set_tracing(enabled: bool) -> bool {
    let previous = TRACING.swap(enabled, Ordering::Relaxed);
    tracing::debug!(enabled, previous, "Tracing flag updated");
    previous
}
