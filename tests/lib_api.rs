// Integration tests for the public library surface: the escape core plus the
// two filter drivers, exercised over in-memory readers and writers.

use std::io::Cursor;

use esc::{escape, filter_lines, filter_stream, EscapeContext};

const ALL_CONTEXTS: [EscapeContext; 3] = [
    EscapeContext::Unquoted,
    EscapeContext::SingleQuoted,
    EscapeContext::DoubleQuoted,
];

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn run_lines(ctxt: EscapeContext, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    filter_lines(ctxt, &mut Cursor::new(input), &mut out).expect("filter_lines should succeed");
    out
}

fn run_stream(ctxt: EscapeContext, input: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    filter_stream(ctxt, &mut Cursor::new(input), &mut out).expect("filter_stream should succeed");
    out
}

// ─────────────────────────────────────────────────────────────────────────────
// Escape core through the re-exported surface
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn crate_root_reexports_escape() {
    assert_eq!(escape(EscapeContext::Unquoted, b"a b"), b"a\\ b");
}

#[test]
fn non_special_bytes_are_identity_in_every_context() {
    let payload: Vec<u8> = (0u8..=255)
        .filter(|&b| b != b' ' && b != b'\'' && b != b'"')
        .collect();
    for ctxt in ALL_CONTEXTS {
        assert_eq!(escape(ctxt, &payload), payload);
    }
}

#[test]
fn length_invariant_holds_with_equality_iff_no_escapable_byte() {
    let cases: &[(&[u8], bool)] = &[
        (b"plain-text_123", false),
        (b"has space", true),
        (b"has'quote", true),
        (b"has\"quote", true),
        (b"\\backslash\\", false),
    ];
    for (src, has_special) in cases {
        let out = escape(EscapeContext::Unquoted, src);
        if *has_special {
            assert!(out.len() > src.len());
        } else {
            assert_eq!(out.len(), src.len());
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Driver behaviour
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn per_line_round_trip_unquoted() {
    assert_eq!(
        run_lines(EscapeContext::Unquoted, b"a b\nc'd\n"),
        b"a\\ b\nc\\'d\n"
    );
}

#[test]
fn per_line_lines_are_independent() {
    // A quote opened on one line must not affect the next line's escaping.
    assert_eq!(
        run_lines(EscapeContext::SingleQuoted, b"it's\nfine\n"),
        b"it\\'s\nfine\n"
    );
}

#[test]
fn whole_stream_and_per_line_agree_on_newline_free_input() {
    let src = b"dir/name with 'both' \"kinds\"";
    for ctxt in ALL_CONTEXTS {
        let mut whole = run_stream(ctxt, src);
        whole.push(b'\n');
        assert_eq!(run_lines(ctxt, src), whole);
    }
}

#[test]
fn empty_input_is_empty_output_in_both_modes() {
    for ctxt in ALL_CONTEXTS {
        assert!(run_stream(ctxt, b"").is_empty());
        assert!(run_lines(ctxt, b"").is_empty());
    }
}

#[test]
fn whole_stream_escapes_across_newlines_without_adding_any() {
    let out = run_stream(EscapeContext::DoubleQuoted, b"say \"hi\"\nsay 'bye'");
    assert_eq!(out, b"say \\\"hi\\\"\nsay 'bye'");
}
