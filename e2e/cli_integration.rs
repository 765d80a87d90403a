// e2e/cli_integration.rs — CLI integration tests
//
// Tests the `esc` binary as a black-box filter using std::process::Command:
// context-flag validation, per-line and whole-stream modes, exit codes, and
// the stderr error format.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Locate the `esc` binary produced by Cargo.
fn esc_bin() -> PathBuf {
    // CARGO_BIN_EXE_esc is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_esc") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop(); // remove test binary filename
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("esc");
    p
}

/// Run `esc` with `args`, feeding `input` on stdin, capturing everything.
fn run_esc(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(esc_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn esc");
    // A usage error exits before stdin is read; ignore the resulting EPIPE.
    let _ = child.stdin.take().expect("stdin handle").write_all(input);
    child.wait_with_output().expect("failed to wait for esc")
}

// ── 1. Per-line mode (default) ───────────────────────────────────────────────

#[test]
fn test_cli_per_line_unquoted_round_trip() {
    let out = run_esc(&["-u"], b"a b\nc'd\n");
    assert!(out.status.success(), "status: {}", out.status);
    assert_eq!(out.stdout, b"a\\ b\nc\\'d\n");
}

#[test]
fn test_cli_per_line_final_line_without_newline() {
    let out = run_esc(&["--unquoted"], b"a b");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a\\ b\n", "final incomplete line gains a newline");
}

#[test]
fn test_cli_per_line_crlf_input() {
    let out = run_esc(&["-u"], b"a b\r\nc d\r\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a\\ b\nc\\ d\n");
}

#[test]
fn test_cli_explicit_per_line_flag() {
    let out = run_esc(&["-u", "-l"], b"a b\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a\\ b\n");
}

// ── 2. Whole-stream mode ─────────────────────────────────────────────────────

#[test]
fn test_cli_whole_stream_preserves_missing_trailing_newline() {
    let out = run_esc(&["-u", "--per-line=false"], b"a b");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"a\\ b");
}

#[test]
fn test_cli_whole_stream_passes_newlines_through() {
    let out = run_esc(&["-d", "--per-line=false"], b"say \"hi\"\nbye");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"say \\\"hi\\\"\nbye");
}

// ── 3. Context table ─────────────────────────────────────────────────────────

#[test]
fn test_cli_single_quoted_context() {
    let out = run_esc(&["-s"], b"it's \"ok\" here\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"it\\'s \"ok\" here\n");
}

#[test]
fn test_cli_double_quoted_context() {
    let out = run_esc(&["-d"], b"it's \"ok\" here\n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"it's \\\"ok\\\" here\n");
}

#[test]
fn test_cli_backslash_passes_through_unchanged() {
    // Backslash is never special, so re-escaping is not idempotent.
    let out = run_esc(&["-u"], b"\\ \n");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"\\\\ \n");
}

// ── 4. Context-flag validation ───────────────────────────────────────────────

#[test]
fn test_cli_no_context_flag_is_usage_error() {
    let out = run_esc(&[], b"anything\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty(), "usage errors must produce no output");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("esc: error: must enable exactly 1 context"),
        "stderr: {stderr}"
    );
}

#[test]
fn test_cli_two_context_flags_is_usage_error() {
    let out = run_esc(&["-u", "-s"], b"anything\n");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("esc: error: must enable exactly 1 context"));
}

#[test]
fn test_cli_three_context_flags_is_usage_error() {
    let out = run_esc(&["-u", "-s", "-d"], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
}

// ── 5. Empty input ───────────────────────────────────────────────────────────

#[test]
fn test_cli_empty_input_exits_zero_with_empty_output() {
    for args in [&["-u"][..], &["-u", "--per-line=false"][..]] {
        let out = run_esc(args, b"");
        assert!(out.status.success(), "args {args:?}: {}", out.status);
        assert!(out.stdout.is_empty(), "args {args:?}");
    }
}

// ── 6. Mode equivalence for single-line input ────────────────────────────────

#[test]
fn test_cli_modes_agree_on_single_line_input() {
    let payload = b"path with 'quotes' and \"more\"";
    let per_line = run_esc(&["-u"], payload);
    let whole = run_esc(&["-u", "--per-line=false"], payload);
    assert!(per_line.status.success() && whole.status.success());
    let mut expected = whole.stdout.clone();
    expected.push(b'\n');
    assert_eq!(per_line.stdout, expected);
}

// ── 7. File-backed stdin ─────────────────────────────────────────────────────

#[test]
fn test_cli_reads_file_redirected_to_stdin() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("input.txt");
    fs::write(&input_path, "first line\nsecond 'line'\n").unwrap();

    let out = Command::new(esc_bin())
        .arg("-u")
        .stdin(Stdio::from(fs::File::open(&input_path).unwrap()))
        .output()
        .expect("failed to run esc with file stdin");
    assert!(out.status.success());
    assert_eq!(out.stdout, b"first\\ line\nsecond\\ \\'line\\'\n");
}

// ── 8. Verbosity gates stderr only ───────────────────────────────────────────

#[test]
fn test_cli_verbose_does_not_change_stdout() {
    let quiet = run_esc(&["-u"], b"a b\n");
    let loud = run_esc(&["-u", "-vv"], b"a b\n");
    assert!(quiet.status.success() && loud.status.success());
    assert_eq!(quiet.stdout, loud.stdout);
}

// ── 9. --help / --version ────────────────────────────────────────────────────

#[test]
fn test_cli_help() {
    let out = run_esc(&["--help"], b"");
    assert!(out.status.success(), "--help should exit 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.to_lowercase().contains("usage"),
        "--help output should contain 'usage'; got: {stdout}"
    );
}

#[test]
fn test_cli_version() {
    let out = run_esc(&["--version"], b"");
    assert!(out.status.success(), "--version should exit 0");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "--version stdout should contain the crate version; got: {stdout}"
    );
}
