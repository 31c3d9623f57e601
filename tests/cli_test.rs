// Command-line tests for the flowlang binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn flowlang() -> Command {
    Command::cargo_bin("flowlang").expect("Binary not built")
}

#[test]
fn test_print_from_stdin() {
    flowlang()
        .arg("print")
        .write_stdin("if(x)a; else b;")
        .assert()
        .success()
        .stdout("IF x\n{\n  a\n}\nELSE\n{\n  b\n}\n");
}

#[test]
fn test_print_empty_block() {
    flowlang()
        .arg("print")
        .write_stdin("{}")
        .assert()
        .success()
        .stdout("{\n  \n}\n");
}

#[test]
fn test_print_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("loop.flow");
    fs::write(&path, "while (hungry) { eat; }\n").unwrap();

    flowlang()
        .arg("print")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("WHILE hungry\n{\n  {\n    eat\n  }\n}"));
}

#[test]
fn test_rejected_input_fails() {
    flowlang()
        .arg("print")
        .write_stdin("if (x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input rejected"));
}

#[test]
fn test_trailing_input_fails() {
    flowlang()
        .arg("print")
        .write_stdin("a; b")
        .assert()
        .failure()
        .stderr(predicate::str::contains("offset 3 of 4"));
}

#[test]
fn test_words_only_flag() {
    flowlang()
        .args(["print", "--words-only"])
        .write_stdin("for(i;i<9;i++)a;")
        .assert()
        .failure();
}

#[test]
fn test_strict_else_flag() {
    // With a newline after `else`, the strict grammar leaves `b;` unparsed as its own statement
    flowlang()
        .args(["print", "--strict-else"])
        .write_stdin("if(x)a; else\nb;")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unparsed input"));
}

#[test]
fn test_missing_file() {
    flowlang()
        .args(["print", "does/not/exist.flow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn test_flowchart_to_file() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("morning.flow");
    let output = dir.path().join("morning.html");
    fs::write(&source, "if (raining) take umbrella; else wear hat;").unwrap();

    flowlang()
        .arg("flowchart")
        .arg(&source)
        .args(["--seed", "7", "-o"])
        .arg(&output)
        .assert()
        .success();

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.contains("<h1> morning </h1>"));
    assert!(html.contains("> take umbrella </div>"));
    assert!(html.contains(" NO "));
}

#[test]
fn test_flowchart_seed_is_reproducible() {
    let run = || {
        flowlang()
            .args(["flowchart", "--seed", "11"])
            .write_stdin("a; b; c;")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}
