#![allow(missing_docs)]

use std::{
    fs, io,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;
use un_utf8::{LoadError, RunError, RunOptions, ScanSummary, driver};

const RECORDS: &str = "\
0041\tLATIN CAPITAL LETTER A
0042\tLATIN CAPITAL LETTER B
00E9\tLATIN SMALL LETTER E WITH ACUTE
20AC\tEURO SIGN
1F600\tGRINNING FACE
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::write(dir.path().join("unicode.txt"), RECORDS).expect("write records");
        Self { dir }
    }

    fn path(&self, name: &str) -> std::path::PathBuf {
        self.dir.path().join(name)
    }

    fn options(&self, input: &[u8]) -> RunOptions {
        let input_path = self.path("input.bin");
        fs::write(&input_path, input).expect("write input");
        RunOptions {
            input: input_path,
            records: self.path("unicode.txt"),
        }
    }
}

fn run(options: &RunOptions) -> (String, String, ScanSummary) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let summary = driver::run(options, &mut out, &mut err).expect("run");
    (
        String::from_utf8(out).expect("utf8 stdout"),
        String::from_utf8(err).expect("utf8 stderr"),
        summary,
    )
}

#[test]
fn plain_ascii_prints_names_only() {
    let fx = Fixture::new();
    let (out, err, summary) = run(&fx.options(b"AB"));
    insta::assert_snapshot!(out, @r"
    LATIN CAPITAL LETTER A
    LATIN CAPITAL LETTER B
    ");
    assert_eq!(err, "");
    assert!(summary.is_clean());
}

#[test]
fn overlong_zero_reports_invalid_encoding() {
    let fx = Fixture::new();
    let (out, err, _) = run(&fx.options(&[0xC0, 0x80]));
    assert_eq!(out, "");
    assert_eq!(err, "Invalid encoding: 0x0 at 0\n");
}

#[test]
fn truncated_three_byte_sequence_reports_incomplete() {
    let fx = Fixture::new();
    let (out, err, summary) = run(&fx.options(&[0xE2, 0x82]));
    assert_eq!(out, "");
    assert_eq!(err, "Incomplete code at 0\n");
    assert_eq!(summary.incomplete, 1);
}

#[test]
fn lone_ff_reports_invalid_byte() {
    let fx = Fixture::new();
    let (out, err, _) = run(&fx.options(&[0xFF]));
    assert_eq!(out, "");
    assert_eq!(err, "Invalid byte: 0xFF at 0\n");
}

#[test]
fn mixed_file_keeps_scanning_after_errors() {
    let fx = Fixture::new();
    let mut input = "A\u{e9}".as_bytes().to_vec();
    input.extend_from_slice(&[0x80, 0xE2, 0x82, 0x41]);
    input.extend_from_slice("\u{20ac}\u{2603}\u{1f600}B".as_bytes());
    input.extend_from_slice(&[0xF0, 0x80, 0x80, 0x80, 0xC3]);

    let (out, err, summary) = run(&fx.options(&input));
    insta::assert_snapshot!(out, @r"
    LATIN CAPITAL LETTER A
    LATIN SMALL LETTER E WITH ACUTE
    EURO SIGN
    GRINNING FACE
    LATIN CAPITAL LETTER B
    ");
    insta::assert_snapshot!(err, @r"
    Invalid byte: 0x80 at 3
    Invalid byte: 0x41 at 6
    Unknown code: 0x2603 at 10
    Invalid encoding: 0x0 at 18
    Incomplete code at 22
    ");
    assert_eq!(summary.resolved, 5);
    assert_eq!(summary.diagnostics(), 5);
}

#[test]
fn empty_input_is_silent() {
    let fx = Fixture::new();
    let (out, err, summary) = run(&fx.options(b""));
    assert_eq!((out.as_str(), err.as_str()), ("", ""));
    assert_eq!(summary, ScanSummary::default());
}

#[test]
fn missing_input_is_fatal() {
    let fx = Fixture::new();
    let options = RunOptions {
        input: fx.path("nope.bin"),
        records: fx.path("unicode.txt"),
    };
    let err = driver::run(&options, &mut io::sink(), &mut io::sink()).unwrap_err();
    assert!(matches!(err, RunError::Input { .. }));
    assert_eq!(
        err.to_string(),
        format!("Can't open file: {}", fx.path("nope.bin").display())
    );
}

#[test]
fn missing_records_is_fatal_before_scanning() {
    let fx = Fixture::new();
    let mut options = fx.options(b"AB");
    options.records = fx.path("missing.txt");
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let e = driver::run(&options, &mut out, &mut err).unwrap_err();
    assert!(matches!(e, RunError::Records(LoadError::Io { .. })));
    assert_eq!(
        e.to_string(),
        format!("Can't open records file: {}", fx.path("missing.txt").display())
    );
    assert!(out.is_empty());
    assert!(err.is_empty());
}

#[test]
fn malformed_records_file_is_fatal() {
    let fx = Fixture::new();
    fs::write(fx.path("bad.txt"), "0041\tA\nZZZZ\tBAD\n").expect("write");
    let mut options = fx.options(b"A");
    options.records = fx.path("bad.txt");
    let e = driver::run(&options, &mut io::sink(), &mut io::sink()).unwrap_err();
    assert_eq!(
        e.to_string(),
        "malformed record on line 2: code field is not hexadecimal"
    );
}

#[test]
fn default_records_path_is_relative() {
    let options = RunOptions::new(Path::new("in.txt"));
    assert_eq!(options.records, Path::new("unicode.txt"));
    assert_eq!(options.input, Path::new("in.txt"));
}

fn un_utf8(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_un-utf8"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("spawn un-utf8")
}

#[test]
fn binary_without_arguments_is_a_usage_error() {
    let fx = Fixture::new();
    let output = un_utf8(fx.dir.path(), &[]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn binary_with_extra_argument_is_a_usage_error() {
    let fx = Fixture::new();
    let output = un_utf8(fx.dir.path(), &["a.txt", "b.txt"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn binary_missing_input_prints_message_and_usage() {
    let fx = Fixture::new();
    let output = un_utf8(fx.dir.path(), &["nope.bin"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Can't open file: nope.bin\n"), "stderr: {stderr}");
    assert!(stderr.contains("Usage:"), "stderr: {stderr}");
}

#[test]
fn binary_missing_default_records_is_fatal() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("input.bin"), b"A").expect("write input");
    let output = un_utf8(dir.path(), &["input.bin"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr, "Can't open records file: unicode.txt\n");
}

#[test]
fn binary_exits_zero_after_reporting_diagnostics() {
    let fx = Fixture::new();
    fs::write(fx.path("input.bin"), [0x41, 0xFF]).expect("write input");
    let output = un_utf8(fx.dir.path(), &["input.bin"]);
    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "LATIN CAPITAL LETTER A\n");
    assert_eq!(
        String::from_utf8_lossy(&output.stderr),
        "Invalid byte: 0xFF at 1\n"
    );
}
