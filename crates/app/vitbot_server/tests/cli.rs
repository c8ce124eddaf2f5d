//! CLI tests — argument handling of the server binary. None of these reach
//! the point of binding a port.

use assert_cmd::Command;
use predicates::prelude::*;

fn server() -> Command {
    let mut cmd = Command::cargo_bin("vitbot_server").unwrap();
    for var in [
        "PERPLEXITY_API_KEY",
        "PERPLEXITY_API_URL",
        "PERPLEXITY_MODEL",
        "SYSTEM_PROMPT_FILE",
        "UPSTREAM_TIMEOUT_SECS",
        "PORT",
        "HOST",
        "STATIC_DIR",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn help_lists_api_key_setting() {
    server()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("PERPLEXITY_API_KEY"))
        .stdout(predicate::str::contains("--upstream-timeout-secs"));
}

#[test]
fn api_key_is_required() {
    server()
        .assert()
        .failure()
        .stderr(predicate::str::contains("--api-key"));
}

#[test]
fn zero_timeout_is_rejected() {
    server()
        .args(["--api-key", "k", "--upstream-timeout-secs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("upstream-timeout-secs"));
}

#[test]
fn unreadable_prompt_file_fails_startup() {
    server()
        .args([
            "--api-key",
            "k",
            "--system-prompt-file",
            "/definitely/not/here/prompt.txt",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PromptFile"));
}

#[test]
fn invalid_api_url_fails_startup() {
    server()
        .args(["--api-key", "k", "--api-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("InvalidUrl"));
}
