//! Command-line definition for the `esc` binary.
//!
//! Three mutually exclusive context flags select the quoting context; the
//! exactly-one-of rule is validated after parsing by [`Args::context`] rather
//! than by clap itself, so the error surfaces in the program's own
//! `esc: error: ...` form with exit code 1. `--per-line` defaults to true and
//! accepts an explicit `--per-line=false` to select whole-stream mode.

use anyhow::anyhow;
use clap::{ArgAction, Parser};

use crate::cli::constants::{DISPLAY_LEVEL_DEFAULT, DISPLAY_LEVEL_MAX, PROGRAM_NAME};
use crate::escape::EscapeContext;

/// Backslash-escape shell-special bytes (space, `'`, `"`) read from stdin
/// for one chosen quoting context, writing the result to stdout.
#[derive(Parser, Debug)]
#[command(name = PROGRAM_NAME, version, about)]
pub struct Args {
    /// Escape for evaluation on an unquoted command line.
    #[arg(short = 'u', long)]
    pub unquoted: bool,

    /// Escape for evaluation inside single quotes.
    #[arg(short = 's', long)]
    pub single_quoted: bool,

    /// Escape for evaluation inside double quotes.
    #[arg(short = 'd', long)]
    pub double_quoted: bool,

    /// Escape each input line individually; pass --per-line=false for one
    /// pass over the whole stream.
    #[arg(
        short = 'l',
        long,
        default_value_t = true,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    pub per_line: bool,

    /// Raise the stderr diagnostics level (repeatable).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Lower the stderr diagnostics level (repeatable).
    #[arg(short = 'q', long = "quiet", action = ArgAction::Count)]
    pub quiet: u8,
}

impl Args {
    /// Resolves the three context flags into an [`EscapeContext`].
    ///
    /// Exactly one flag must be set; zero or several is a usage error,
    /// detected here before any I/O happens.
    pub fn context(&self) -> anyhow::Result<EscapeContext> {
        match (self.unquoted, self.single_quoted, self.double_quoted) {
            (true, false, false) => Ok(EscapeContext::Unquoted),
            (false, true, false) => Ok(EscapeContext::SingleQuoted),
            (false, false, true) => Ok(EscapeContext::DoubleQuoted),
            _ => Err(anyhow!("must enable exactly 1 context")),
        }
    }

    /// Display level implied by `-v`/`-q` stacking, clamped to the valid range.
    pub fn display_level(&self) -> u32 {
        (DISPLAY_LEVEL_DEFAULT as i64 + self.verbose as i64 - self.quiet as i64)
            .clamp(0, DISPLAY_LEVEL_MAX as i64) as u32
    }
}
