//! Helpers for running the compiled `tacparse` binary.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use super::fixtures::REFERENCE_YEAR;

/// Write a config file pinning the reference year and return its path.
pub fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(
        &path,
        format!("[parser]\nreference_year = {REFERENCE_YEAR}\n"),
    )
    .expect("write test config");
    path
}

/// `tacparse --config <dir>/config.toml`, isolated from the user's config.
pub fn tacparse_binary(dir: &Path) -> Command {
    let config = write_config(dir);
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tacparse"));
    cmd.env("XDG_CONFIG_HOME", dir)
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(config);
    cmd
}

/// Run `cmd` with `input` piped to stdin.
pub fn run_with_stdin(mut cmd: Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn tacparse");
    child
        .stdin
        .take()
        .expect("child stdin")
        .write_all(input)
        .expect("write to child stdin");
    child.wait_with_output().expect("wait for tacparse")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
