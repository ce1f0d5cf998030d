//! Common test utilities and helpers

#![allow(dead_code)]

use assert_cmd::Command;
use std::process::Output;

pub const LOOP_OUTPUT: &str = "Sum = 500000500000\n";

pub const FACTORIAL_OUTPUT: &str = "factorial(20) = 2432902008176640000\n\
                                    Computed 10000 times\n";

pub const ARRAY_OUTPUT: &str = "Array created, length = 100000\n\
                                Map done, length = 100000\n\
                                Filter done, length = 100000\n\
                                Reduce sum = 9999900000\n";

/// Command for one of the crate's binaries, with `RUST_LOG` cleared so the
/// ambient environment cannot change logging.
pub fn bin(name: &str) -> Command {
    let mut cmd = Command::cargo_bin(name).unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run a binary and return its stdout, asserting success.
pub fn stdout_of(name: &str, args: &[&str]) -> String {
    let output = bin(name).args(args).output().unwrap();
    assert!(output.status.success(), "{name} {args:?} failed");
    String::from_utf8(output.stdout).unwrap()
}

/// Run a binary with stdout connected to a pipe whose read end is already
/// closed, so its first write fails.
#[cfg(unix)]
pub fn run_with_closed_stdout(name: &str, args: &[&str]) -> Output {
    let (reader, writer) = std::io::pipe().unwrap();
    drop(reader);
    let mut cmd = std::process::Command::new(assert_cmd::cargo::cargo_bin(name));
    cmd.args(args).env_remove("RUST_LOG").stdout(writer);
    cmd.output().unwrap()
}

/// The `Error: ...` line the fatal-error path prints.
pub fn error_line(stderr: &str) -> Option<&str> {
    stderr.lines().find(|line| line.starts_with("Error: "))
}
