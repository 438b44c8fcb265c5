use assert_cmd::Command;
use predicates::str::contains;

const BINARY_NAME: &str = "surge-dash";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"));
}

#[test]
/// Subcommands should document the base URL flag.
fn status_help_mentions_base_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["status", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("Base URL of the trading bot API"));
}

#[test]
/// A malformed base URL should be rejected up front, never silently replaced
/// by the local default.
fn status_rejects_a_malformed_base_url() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["status", "--base-url", "not-a-url"]);
    cmd.assert().failure().stderr(contains("invalid base URL"));
}

#[test]
/// Status against an unreachable backend should fail with a transport error,
/// not a panic.
fn status_fails_cleanly_when_backend_is_down() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    // Port 9 (discard) is near-guaranteed to refuse the connection locally.
    cmd.args(["status", "--base-url", "http://127.0.0.1:9"]);
    cmd.assert()
        .failure()
        .stderr(contains("Failed to fetch portfolio"));
}
