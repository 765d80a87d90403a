//! Context-sensitive backslash escaping for shell-special bytes.
//!
//! This module is the codec core consumed by the I/O drivers in
//! [`crate::io`]:
//!
//! - [`EscapeContext`] — which shell quoting context the output is destined
//!   for; decides which bytes need a backslash prefix.
//! - [`escape_into`] / [`escape`] — the per-byte policy applied to a slice.
//! - [`escape_stream`] — the same policy driven over arbitrary
//!   `Read`/`Write` pairs in fixed-size chunks.
//!
//! The transformation is a pure function of (byte, context): no look-ahead,
//! no look-behind, and a backslash is never itself escaped. Escaped bytes
//! expand to exactly two output bytes (backslash + original byte); all other
//! bytes pass through unchanged, so output length is always ≥ input length.

use std::io::{self, Read, Write};

// ── Byte constants ────────────────────────────────────────────────────────────

pub const BACKSLASH: u8 = b'\\';
pub const SPACE: u8 = b' ';
pub const SINGLE_QUOTE: u8 = b'\'';
pub const DOUBLE_QUOTE: u8 = b'"';

/// Chunk size for the streaming pass. Large enough to amortize syscalls,
/// small enough to keep the scratch buffers cache-friendly.
const STREAM_BUF_SIZE: usize = 64 * 1024;

// ── Escape context ────────────────────────────────────────────────────────────

/// Which shell quoting context the escaped output will be evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeContext {
    /// Output lands on a command line with no surrounding quotes.
    Unquoted,
    /// Output lands between single quotes.
    SingleQuoted,
    /// Output lands between double quotes.
    DoubleQuoted,
}

impl EscapeContext {
    /// Returns `true` when `byte` must be prefixed with a backslash in this
    /// context:
    ///
    /// - space — unquoted only
    /// - `'` — unquoted and single-quoted
    /// - `"` — unquoted and double-quoted
    /// - anything else (backslash included) — never
    #[inline]
    pub fn must_escape(self, byte: u8) -> bool {
        match byte {
            SPACE => self == EscapeContext::Unquoted,
            SINGLE_QUOTE => matches!(self, EscapeContext::Unquoted | EscapeContext::SingleQuoted),
            DOUBLE_QUOTE => matches!(self, EscapeContext::Unquoted | EscapeContext::DoubleQuoted),
            _ => false,
        }
    }

    /// Short lowercase label used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            EscapeContext::Unquoted => "unquoted",
            EscapeContext::SingleQuoted => "single-quoted",
            EscapeContext::DoubleQuoted => "double-quoted",
        }
    }
}

// ── Slice API ─────────────────────────────────────────────────────────────────

/// Appends the escaped form of `src` to `dst`.
///
/// Reserves at least `src.len()` bytes up front; the worst case (every byte
/// escaped) doubles that, which the `Vec` absorbs through normal growth.
pub fn escape_into(ctxt: EscapeContext, src: &[u8], dst: &mut Vec<u8>) {
    dst.reserve(src.len());
    for &b in src {
        if ctxt.must_escape(b) {
            dst.push(BACKSLASH);
        }
        dst.push(b);
    }
}

/// Escapes `src` into a freshly allocated buffer.
pub fn escape(ctxt: EscapeContext, src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len());
    escape_into(ctxt, src, &mut dst);
    dst
}

// ── Streaming API ─────────────────────────────────────────────────────────────

/// Reads `src` to end-of-input, writing the escaped byte stream to `dst`.
///
/// One forward pass in fixed-size chunks; input is consumed strictly
/// in order and output is produced in the same order. Interrupted reads are
/// retried; any other read or write error aborts the pass and is returned.
/// Reaching end-of-input terminates the pass successfully.
///
/// Returns the number of bytes written. `dst` is not flushed; callers own the
/// flush discipline.
pub fn escape_stream<R, W>(ctxt: EscapeContext, src: &mut R, dst: &mut W) -> io::Result<u64>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut rbuf = vec![0u8; STREAM_BUF_SIZE];
    let mut wbuf: Vec<u8> = Vec::with_capacity(STREAM_BUF_SIZE);
    let mut written: u64 = 0;

    loop {
        let n = match src.read(&mut rbuf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        wbuf.clear();
        escape_into(ctxt, &rbuf[..n], &mut wbuf);
        dst.write_all(&wbuf)?;
        written += wbuf.len() as u64;
    }

    Ok(written)
}

// ── Unit tests ────────────────────────────────────────────────────────────────
