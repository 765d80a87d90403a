//! Stream orchestration for the `esc` CLI.
//!
//! This module provides the two filter drivers dispatched by the binary:
//!
//! - [`filter_stream`] — one escaping pass over the entire input, flushed
//!   once at end-of-input.
//! - [`filter_lines`] — the input split on newline boundaries, each line
//!   escaped independently and flushed before the next line is read, so a
//!   consumer piping the output sees lines promptly.
//!
//! Plus [`set_binary_mode`], which switches stdin/stdout to binary mode on
//! Windows so the byte stream survives untranslated.
//!
//! Diagnostics are emitted on stderr via the [`crate::displaylevel!`] gate;
//! they never touch the output byte stream.

use std::io::{self, BufRead, Read, Write};

use crate::escape::{escape_into, escape_stream, EscapeContext};

// ── Whole-stream mode ─────────────────────────────────────────────────────────

/// Escapes the whole of `src` as a single pass and flushes `dst`.
///
/// Newline bytes are ordinary non-special input here and pass through
/// unchanged. Any read or write error aborts the pass; end-of-input
/// terminates it successfully.
pub fn filter_stream<R, W>(ctxt: EscapeContext, src: &mut R, dst: &mut W) -> io::Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let written = escape_stream(ctxt, src, dst)?;
    dst.flush()?;
    crate::displaylevel!(4, "whole-stream pass complete, {} bytes out\n", written);
    Ok(())
}

// ── Per-line mode ─────────────────────────────────────────────────────────────

/// Escapes `src` line by line.
///
/// The newline separator is consumed by the splitter and never escaped; a
/// carriage return immediately preceding the newline (or ending a final
/// unterminated line) is treated as part of the separator and dropped. Each
/// escaped line is written with a trailing `\n` and flushed before the next
/// line is read, so lines already flushed survive a failure later in the
/// stream. A final line without a trailing newline is still processed and
/// gains one on output.
///
/// No state is shared between line invocations.
pub fn filter_lines<R, W>(ctxt: EscapeContext, src: &mut R, dst: &mut W) -> io::Result<()>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    let mut line: Vec<u8> = Vec::new();
    let mut out: Vec<u8> = Vec::new();
    let mut lines: u64 = 0;

    loop {
        line.clear();
        if src.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        out.clear();
        escape_into(ctxt, &line, &mut out);
        out.push(b'\n');
        dst.write_all(&out)?;
        dst.flush()?;
        lines += 1;
    }

    crate::displaylevel!(4, "per-line pass complete, {} lines\n", lines);
    Ok(())
}

// ── Binary mode ───────────────────────────────────────────────────────────────

/// Puts stdin and stdout into binary mode so no byte translation occurs.
///
/// Only meaningful on Windows, where text-mode fds rewrite line endings; on
/// other platforms this is a no-op.
#[cfg(windows)]
pub fn set_binary_mode() {
    // SAFETY: calling _setmode on stdin (fd=0) and stdout (fd=1) is always valid.
    unsafe {
        libc::_setmode(0, libc::O_BINARY);
        libc::_setmode(1, libc::O_BINARY);
    }
}

/// Puts stdin and stdout into binary mode so no byte translation occurs.
///
/// Only meaningful on Windows, where text-mode fds rewrite line endings; on
/// other platforms this is a no-op.
#[cfg(not(windows))]
pub fn set_binary_mode() {}

// ── Unit tests ────────────────────────────────────────────────────────────────
