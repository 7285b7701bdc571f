//! Integration tests for the pmsprite CLI
//!
//! These tests run the binary with piped stdin and check exit codes,
//! stdout and stderr.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const REFERENCE_BLOCK: &str = "\n\
; 0 1 2 3 4 5 6 7   PM0               PM1\n\
; . 1 . 2 3 . . 2   0 1 0 0 1 0 0 0   0 0 0 1 1 0 0 1 \n\
\n\
PM0_something\n\
\t.by %01001000\n\
\n\
PM1_something\n\
\t.by %00011001\n\
\n";

/// Run pmsprite in an isolated directory so no stray config is picked up.
fn run_in(dir: &Path, args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pmsprite"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute pmsprite");

    // The process may exit before reading stdin (bad flags, missing file)
    let _ = child.stdin.take().expect("stdin should be piped").write_all(stdin);

    child.wait_with_output().expect("Failed to wait for pmsprite")
}

fn run(args: &[&str], stdin: &str) -> Output {
    let temp = TempDir::new().expect("should create temp dir");
    run_in(temp.path(), args, stdin.as_bytes())
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Data lines following a section header.
fn section(text: &str, label: &str) -> Vec<String> {
    text.lines()
        .skip_while(|l| *l != label)
        .skip(1)
        .take_while(|l| l.starts_with('\t'))
        .map(|l| l.to_string())
        .collect()
}

#[test]
fn test_reference_sprite_default_orientation() {
    let output = run(&[], ".1.23..2\n");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), REFERENCE_BLOCK);
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_explicit_normal_matches_default() {
    let output = run(&["-d", "n"], ".1.23..2\n");
    assert_eq!(stdout(&output), REFERENCE_BLOCK);
}

#[test]
fn test_dash_reads_stdin() {
    let output = run(&["-"], ".1.23..2\n");
    assert_eq!(stdout(&output), REFERENCE_BLOCK);
}

#[test]
fn test_input_file_argument() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(temp.path().join("ship.txt"), "# ship\n.1.23..2\n").expect("should write input");
    let output = run_in(temp.path(), &["ship.txt"], b"");
    assert!(output.status.success());
    assert_eq!(stdout(&output), REFERENCE_BLOCK);
}

#[test]
fn test_missing_input_file() {
    let output = run(&["does-not-exist.txt"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Cannot open input file"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_horizontal_flip() {
    let output = run(&["-d", "h"], ".1.23..2\n");
    let text = stdout(&output);
    assert!(text.contains("; 2 . . 3 2 . 1 .   0 0 0 1 0 0 1 0   1 0 0 1 1 0 0 0 \n"));
    assert_eq!(section(&text, "PM0_something"), vec!["\t.by %00010010"]);
    assert_eq!(section(&text, "PM1_something"), vec!["\t.by %10011000"]);
}

#[test]
fn test_vertical_flip_reverses_rows_only() {
    let input = "1.......\n.2......\n..3.....\n";
    let normal = stdout(&run(&[], input));
    let vertical = stdout(&run(&["-d", "v"], input));
    for label in ["PM0_something", "PM1_something"] {
        let mut n = section(&normal, label);
        n.reverse();
        assert_eq!(section(&vertical, label), n);
    }
}

#[test]
fn test_hv_renders_one_combined_block() {
    let input = "11......\n......22\n";
    let output = run(&["-d", "hv"], input);
    let text = stdout(&output);
    assert_eq!(text.matches("PM0               PM1").count(), 1);
    assert_eq!(section(&text, "PM0_something"), vec!["\t.by %00000000", "\t.by %00000011"]);
    assert_eq!(section(&text, "PM1_something"), vec!["\t.by %11000000", "\t.by %00000000"]);
}

#[test]
fn test_all_letters_render_normal_then_both() {
    let output = run(&["-d", "vhn"], "1\n");
    let text = stdout(&output);
    assert_eq!(text.matches("PM0               PM1").count(), 2);
    let normal = text.find("\t.by %10000000").expect("normal block");
    let both = text.find("\t.by %00000001").expect("combined block");
    assert!(normal < both);
}

#[test]
fn test_unusable_line_warning() {
    let output = run(&[], "11\n\nabc\n22\n");
    assert!(output.status.success());
    let err = stderr(&output);
    assert!(err.contains("pmsprite: No usable data read at line 2. Skipping..."));
    assert!(err.contains("pmsprite: No usable data read at line 3. Skipping..."));
    assert_eq!(section(&stdout(&output), "PM0_something").len(), 2);
}

#[test]
fn test_comment_line_is_silent() {
    let output = run(&[], "# player ship\n11\n");
    assert!(stderr(&output).is_empty());
    assert_eq!(section(&stdout(&output), "PM0_something"), vec!["\t.by %11000000"]);
}

#[test]
fn test_no_data_exits_cleanly() {
    let output = run(&["-d", "nhv"], "# nothing\nxyz\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("pmsprite: No Lines Read"));
}

#[test]
fn test_empty_input_exits_cleanly() {
    let output = run(&[], "");
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_row_cap_drops_extra_lines() {
    let mut input = "1.......\n".repeat(256);
    input.push_str("22222222\n");
    let output = run(&[], &input);
    assert!(output.status.success());
    let text = stdout(&output);
    assert_eq!(section(&text, "PM0_something").len(), 256);
    assert!(section(&text, "PM1_something").iter().all(|l| l == "\t.by %00000000"));
    assert!(!text.contains("; 2 2 2 2"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn test_long_line_truncated_to_eight() {
    let output = run(&[], "1111222233330000\n");
    assert_eq!(section(&stdout(&output), "PM0_something"), vec!["\t.by %11110000"]);
}

#[test]
fn test_invalid_flag_fails_with_usage() {
    let output = run(&["-x"], "1\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"));
}

#[test]
fn test_invalid_direction_letter_fails() {
    let output = run(&["-d", "nq"], "1\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("'q'"));
}

#[test]
fn test_strict_mode() {
    let output = run(&["--strict"], "11\n\n22\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Error: line 2"));
}

#[test]
fn test_custom_labels_and_directive() {
    let output = run(
        &["--player-a-label", "ship0", "--player-b-label", "ship1", "--directive", ".byte"],
        "12\n",
    );
    let text = stdout(&output);
    assert_eq!(section(&text, "ship0"), vec!["\t.byte %10000000"]);
    assert_eq!(section(&text, "ship1"), vec!["\t.byte %01000000"]);
}

#[test]
fn test_blank_directive_rejected() {
    let output = run(&["--directive", ""], ".1.23..2\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("output.directive"));
}

#[test]
fn test_blank_labels_rejected() {
    let output = run(&["--player-a-label", "", "--player-b-label", "  "], ".1.23..2\n");
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout(&output).is_empty());
    let err = stderr(&output);
    assert!(err.contains("labels.player_a"));
    assert!(err.contains("labels.player_b"));
}

#[test]
fn test_json_format() {
    let output = run(&["--format", "json", "-d", "nh"], ".1.23..2\n");
    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_str(&stdout(&output)).expect("output should be JSON");
    assert_eq!(value["rows"], 1);
    assert_eq!(value["blocks"][0]["orientation"], "normal");
    assert_eq!(value["blocks"][0]["description"], "As drawn");
    assert_eq!(value["blocks"][0]["player_a"]["literals"][0], "%01001000");
    assert_eq!(value["blocks"][1]["orientation"], "horizontal");
    assert_eq!(value["blocks"][1]["player_b"]["bytes"][0], 0b1001_1000);
}

#[test]
fn test_discovered_config() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(
        temp.path().join("pmsprite.toml"),
        "[output]\ndirections = \"h\"\ndirective = \"dc.b\"\n\n[labels]\nplayer_a = \"hero0\"\n",
    )
    .expect("should write config");
    let output = run_in(temp.path(), &[], b"1\n");
    assert_eq!(section(&stdout(&output), "hero0"), vec!["\tdc.b %00000001"]);
}

#[test]
fn test_cli_overrides_config() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(temp.path().join("pmsprite.toml"), "[output]\ndirections = \"h\"\n")
        .expect("should write config");
    let output = run_in(temp.path(), &["-d", "n"], b"1\n");
    assert_eq!(section(&stdout(&output), "PM0_something"), vec!["\t.by %10000000"]);
}

#[test]
fn test_explicit_config_error() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(temp.path().join("bad.toml"), "[labels]\nplayer_a = \"\"\n")
        .expect("should write config");
    let output = run_in(temp.path(), &["--config", "bad.toml"], b"1\n");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("labels.player_a"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_broken_discovered_config_falls_back() {
    let temp = TempDir::new().expect("should create temp dir");
    fs::write(temp.path().join("pmsprite.toml"), "[output\n").expect("should write config");
    let output = run_in(temp.path(), &[], b".1.23..2\n");
    assert!(output.status.success());
    assert!(stderr(&output).contains("Warning:"));
    assert_eq!(stdout(&output), REFERENCE_BLOCK);
}
