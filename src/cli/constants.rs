//! Program identity constants and the display-level infrastructure.
//!
//! All diagnostics in this crate go to stderr, gated on a process-global
//! display level so `-v`/`-q` can raise or lower chattiness without ever
//! touching the output byte stream on stdout.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Identity ──────────────────────────────────────────────────────────────────

/// Program name as it appears in error messages (`esc: error: ...`).
pub const PROGRAM_NAME: &str = "esc";

/// Crate version, surfaced by `--version` and the verbose banner.
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

// ── Display level ─────────────────────────────────────────────────────────────

/// Default display level: errors and warnings.
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

/// Maximum display level accepted from `-v` stacking.
pub const DISPLAY_LEVEL_MAX: u32 = 4;

// 0 = silent; 1 = errors only; 2 = + warnings; 3 = + information; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(DISPLAY_LEVEL_DEFAULT);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::constants::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_name_constant() {
        assert_eq!(PROGRAM_NAME, "esc");
    }

    #[test]
    fn version_string_is_nonempty() {
        assert!(!VERSION_STRING.is_empty());
    }

    #[test]
    fn display_level_setter_round_trips() {
        // Note: other tests may mutate this global; restore when done.
        let prev = display_level();
        set_display_level(3);
        assert_eq!(display_level(), 3);
        set_display_level(prev);
    }
}
