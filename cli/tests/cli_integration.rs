//! Integration tests for the `format1-report` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const ROUNDTRIP: &str = "\
Version 1.0
People 1
1 Alice
Computer 1
1 \"Intel i7\" 16GB 512GB 0
Computer-People 1
1 1
";

fn format1_report_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_format1-report"))
}

fn write_input(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write input");
    path
}

fn run(args: &[&str], input: &Path) -> Output {
    Command::new(format1_report_bin())
        .args(args)
        .arg(input)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run format1-report")
}

#[test]
fn test_text_report_on_stdout() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "inventory.txt", ROUNDTRIP);

    let output = run(&[], &input);
    assert!(
        output.status.success(),
        "format1-report failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout,
        "\
Report from FORMAT-1 file:
Version: 1.0

People and their computers:
- Person(name='Alice', tag='1')
  - Computer(tag='1', CPU='Intel i7', RAM='16GB', HDD='512GB', SSD='0')

Unowned computers:
  (none)

"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "inventory.txt", ROUNDTRIP);

    let output = run(&["--format", "json"], &input);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout)
        .unwrap_or_else(|e| panic!("Invalid JSON output: {e}\n{stdout}"));
    assert_eq!(parsed["persons"][0]["name"], "Alice");
    assert_eq!(parsed["computers"][0]["cpu"], "Intel i7");
    assert_eq!(parsed["counts"]["relations"]["actual"], 1);
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.txt");

    let output = run(&[], &missing);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: failed to read"), "{stderr}");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_lenient_by_default_and_strict_on_request() {
    let dir = TempDir::new().unwrap();
    let input = write_input(
        &dir,
        "sloppy.txt",
        "People 2\n1 Alice\nComputer 1\nX 1 2 3\n1 cpu\nComputer-People 1\n1 9\n",
    );

    let lenient = run(&[], &input);
    assert!(lenient.status.success());
    let stdout = String::from_utf8_lossy(&lenient.stdout);
    assert!(stdout.contains("- Person(name='Alice', tag='1')\n  (no computers)\n"));
    assert!(stdout.contains("Unowned computers:\n  (none)\n"));

    let strict = run(&["--strict"], &input);
    assert_eq!(strict.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&strict.stderr);
    assert!(stderr.contains("People section declares 2 record(s) but 1 were parsed"), "{stderr}");
    assert!(stderr.contains("undeclared person: 9"), "{stderr}");
    assert!(stderr.contains("unrecognized Computer record"), "{stderr}");
    assert!(strict.stdout.is_empty());
}

#[test]
fn test_person_order_declared() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "ids.txt", "People 1\nA7 Ann\n");

    let output = run(&["--person-order", "declared"], &input);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("- Person(name='Ann', tag='A7')\n  (no computers)\n"));
}

#[test]
fn test_requires_input_argument() {
    let output = Command::new(format1_report_bin())
        .output()
        .expect("failed to run format1-report");
    assert!(!output.status.success());
}
