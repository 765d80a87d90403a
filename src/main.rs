//! Binary entry point for the `esc` command-line tool.
//!
//! Control flow:
//!
//! 1. clap parses the flags (and services `--help`/`--version` itself).
//! 2. [`run`] validates the context selection, puts the standard streams in
//!    binary mode, and dispatches to the per-line or whole-stream driver.
//! 3. Any error is rendered once at the top level as
//!    `esc: error: <description>` and the process exits 1; normal completion
//!    exits 0.

use std::io::{self, BufWriter};

use anyhow::Context;
use clap::Parser;

use esc::cli::args::Args;
use esc::cli::constants::{set_display_level, PROGRAM_NAME, VERSION_STRING};
use esc::displaylevel;
use esc::io::{filter_lines, filter_stream, set_binary_mode};

/// Execute the filter selected by the parsed arguments.
fn run(args: &Args) -> anyhow::Result<()> {
    // Usage validation happens before any I/O; no output is produced on failure.
    let ctxt = args.context()?;

    set_binary_mode();
    displaylevel!(3, "*** {} v{} ***\n", PROGRAM_NAME, VERSION_STRING);
    displaylevel!(
        4,
        "context: {}, mode: {}\n",
        ctxt.label(),
        if args.per_line { "per-line" } else { "whole-stream" }
    );

    let mut src = io::stdin().lock();
    let mut dst = BufWriter::new(io::stdout().lock());

    if args.per_line {
        filter_lines(ctxt, &mut src, &mut dst)
    } else {
        filter_stream(ctxt, &mut src, &mut dst)
    }
    .context("failed to read stdin")?;

    Ok(())
}

fn main() {
    let args = Args::parse();
    set_display_level(args.display_level());

    if let Err(e) = run(&args) {
        eprintln!("{}: error: {:#}", PROGRAM_NAME, e);
        std::process::exit(1);
    }
}
