use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

fn schematic(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gear-ratios"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn part_one_by_default() {
    let file = schematic(EXAMPLE);
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "4361\n");
}

#[test]
fn part_two() {
    let file = schematic(EXAMPLE);
    let output = run(&["--part", "2", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "467835\n");
}

#[test]
fn empty_file() {
    let file = schematic("");

    for part in ["1", "2"] {
        let output = run(&["--part", part, file.path().to_str().unwrap()]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "0\n");
    }
}

#[test]
fn json_output() {
    let file = schematic(EXAMPLE);
    let output = run(&["--json", "--part", "2", file.path().to_str().unwrap()]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "{\"type\":\"answer\",\"data\":{\"part\":2,\"value\":467835}}\n"
    );
}

#[test]
fn reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_gear-ratios"))
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(EXAMPLE.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout(&output), "4361\n");
}

#[test]
fn expect_mismatch_fails() {
    let file = schematic(EXAMPLE);
    let path = file.path().to_str().unwrap();

    assert!(run(&["--expect", "4361", path]).status.success());
    assert!(!run(&["--expect", "4360", path]).status.success());
}

#[test]
fn missing_argument_fails() {
    assert!(!run(&[]).status.success());
}

#[test]
fn missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let output = run(&[path.to_str().unwrap()]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn ragged_schematic_fails() {
    let file = schematic("123\n12\n");
    let output = run(&[file.path().to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ragged line"), "{stderr}");
}
