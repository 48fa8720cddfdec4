//! Command-line binary tests.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_envido"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn prints_score_for_hand_on_stdin() {
    let output = run(&[], b"4 oros 7 oros\n1 copas");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "31\n");

    let output = run(&[], b"10 oros 11 copas 12 espadas\n");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn truncated_input_fails_with_message() {
    let output = run(&[], b"4 oros 7");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("unexpected end of input while reading suit"));
}

#[test]
fn bad_tokens_fail_with_message() {
    let output = run(&[], b"256 oros 7 oros 1 copas");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid rank \"256\""));

    let output = run(&[], b"4 hearts 7 oros 1 copas");
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid suit \"hearts\""));

    let output = run(&[], b"4 oros \xff\xfe 7 oros 1 copas");
    assert!(!output.status.success());
}

#[test]
fn spanish_deck_flag_rejects_eight() {
    let input = b"8 oros 3 copas 1 bastos";

    let output = run(&[], input);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n");

    let output = run(&["--spanish-deck"], input);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("rank 8 is not in the Spanish deck"));
}

#[test]
fn deal_prints_cards_then_score() {
    let output = run(&["--deal", "42"], b"");
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "4 espadas 10 oros 5 oros\n25\n");

    let again = run(&["--deal", "42"], b"");
    assert_eq!(stdout(&again), stdout(&output));
}

#[test]
fn deal_rejects_hand_options() {
    let output = run(&["--deal", "42", "--spanish-deck"], b"");
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());

    let output = run(&["--deal", "42", "--allow-duplicates"], b"");
    assert!(!output.status.success());
}
