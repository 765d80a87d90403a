//! Core library for `esc`, a filter that backslash-escapes shell-special
//! bytes (space, `'`, `"`) for one chosen quoting context.
//!
//! The binary in `src/main.rs` wires stdin/stdout to the drivers in [`io`];
//! everything observable about the transformation lives in [`mod@escape`].

pub mod cli;
pub mod escape;
pub mod io;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use escape::{escape, escape_into, escape_stream, EscapeContext};
pub use io::{filter_lines, filter_stream};
