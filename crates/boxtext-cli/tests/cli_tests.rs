//! End-to-end tests for the `boxtext` binary.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A scratch directory with helpers for input and output paths.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("Failed to write fixture");
        path
    }

    fn cli_command(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("boxtext"));
        cmd.current_dir(self.dir.path());
        for var in [
            "BOXTEXT_CORNER",
            "BOXTEXT_HORIZONTAL",
            "BOXTEXT_VERTICAL",
            "BOXTEXT_LOG",
            "RUST_LOG",
        ] {
            cmd.env_remove(var);
        }
        cmd
    }

    fn run(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cli_command().args(args).assert()
    }
}

const EX_USAGE: i32 = 64;
const EX_NOINPUT: i32 = 66;
const EX_CANTCREAT: i32 = 73;

#[test]
fn boxes_input_into_output_file() {
    let env = TestEnv::new();
    env.write("in.txt", b"hi\nthere\n");

    env.run(&["-i", "in.txt", "-o", "out.txt"])
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(
        fs::read(env.path("out.txt")).unwrap(),
        b"+-----+\n| hi    |\n| there |\n+-----+\n"
    );
}

#[test]
fn unterminated_input_still_gets_a_closed_row() {
    let env = TestEnv::new();
    env.write("in.txt", b"ab");

    env.run(&["--input", "in.txt", "--output", "out.txt"])
        .success();

    assert_eq!(
        fs::read(env.path("out.txt")).unwrap(),
        b"+--+\n| ab |\n+--+\n"
    );
}

#[test]
fn empty_input_produces_bare_frame() {
    let env = TestEnv::new();
    env.write("empty.txt", b"");

    env.run(&["-i", "empty.txt", "-o", "out.txt"]).success();

    assert_eq!(fs::read(env.path("out.txt")).unwrap(), b"++\n++\n");
}

#[test]
fn existing_output_is_truncated() {
    let env = TestEnv::new();
    env.write("in.txt", b"x\n");
    env.write("out.txt", b"a much longer previous content\n".repeat(10).as_slice());

    env.run(&["-i", "in.txt", "-o", "out.txt"]).success();

    assert_eq!(
        fs::read(env.path("out.txt")).unwrap(),
        b"+-+\n| x |\n+-+\n"
    );
}

#[test]
fn prepend_boxes_header_with_content_in_place() {
    let env = TestEnv::new();
    env.write("main.c", b"int main;\n");

    env.run(&["-i", "main.c", "-o", "main.c", "-p", "main.c\nby: me\n"])
        .success();

    assert_eq!(
        fs::read_to_string(env.path("main.c")).unwrap(),
        "+---------+\n| main.c    |\n| by: me    |\n| int main; |\n+---------+\n"
    );
}

#[test]
fn symbols_can_be_set_by_flag_or_environment() {
    let env = TestEnv::new();
    env.write("in.txt", b"ok\n");

    env.run(&["-i", "in.txt", "-o", "flags.txt", "--corner", "*", "--horizontal", "="])
        .success();
    assert_eq!(
        fs::read(env.path("flags.txt")).unwrap(),
        b"*==*\n| ok |\n*==*\n"
    );

    env.cli_command()
        .args(["-i", "in.txt", "-o", "env.txt"])
        .env("BOXTEXT_VERTICAL", "!")
        .assert()
        .success();
    assert_eq!(
        fs::read(env.path("env.txt")).unwrap(),
        b"+--+\n! ok !\n+--+\n"
    );
}

#[test]
fn invalid_symbol_is_a_usage_error() {
    let env = TestEnv::new();
    env.write("in.txt", b"ok\n");

    env.run(&["-i", "in.txt", "-o", "out.txt", "--corner", "ab"])
        .code(EX_USAGE)
        .stderr(predicate::str::contains("single printable ASCII character"));

    assert!(!env.path("out.txt").exists());
}

#[test]
fn missing_input_file_is_reported() {
    let env = TestEnv::new();

    env.run(&["-i", "absent.txt", "-o", "out.txt"])
        .code(EX_NOINPUT)
        .stderr(predicate::str::contains(
            "the input file 'absent.txt' could not be found",
        ));

    assert!(!env.path("out.txt").exists());
}

#[test]
fn output_in_missing_directory_is_rejected() {
    let env = TestEnv::new();
    env.write("in.txt", b"x");

    env.run(&["-i", "in.txt", "-o", "nowhere/out.txt"])
        .code(EX_CANTCREAT)
        .stderr(predicate::str::contains("parent directory does not exist"));
}

#[test]
fn output_directory_is_rejected() {
    let env = TestEnv::new();
    env.write("in.txt", b"x");
    fs::create_dir(env.path("sub")).unwrap();

    env.run(&["-i", "in.txt", "-o", "sub"])
        .code(EX_CANTCREAT)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn missing_paths_fail_with_usage() {
    let env = TestEnv::new();
    env.write("in.txt", b"x");

    env.run(&[])
        .code(EX_USAGE)
        .stderr(predicate::str::contains("--input"));

    env.run(&["-i", "in.txt"])
        .code(EX_USAGE)
        .stderr(predicate::str::contains("--output"));
}

#[test]
fn help_flags_print_usage() {
    let env = TestEnv::new();

    for flag in ["-h", "-?", "--help"] {
        env.run(&[flag])
            .success()
            .stdout(predicate::str::contains("Usage:"))
            .stdout(predicate::str::contains("--input <PATH>"));
    }
}

#[test]
fn verbose_run_logs_to_file() {
    let env = TestEnv::new();
    env.write("in.txt", b"logged\n");
    let log = env.path("boxtext.log");

    env.cli_command()
        .args(["-v", "-i", "in.txt", "-o", "out.txt"])
        .env("BOXTEXT_LOG", &log)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let logged = fs::read_to_string(&log).unwrap();
    assert!(logged.contains("wrote boxed text"), "log was: {logged}");
}
