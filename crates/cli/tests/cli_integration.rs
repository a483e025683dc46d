//! CLI Integration Tests
//!
//! Run the `origin-ui` binary end to end against a mock origin.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RESET_PATH: &str = "/api/v1.0/origin-ui/resetLogin";

fn cli_cmd() -> Command {
    let mut cmd = Command::cargo_bin("origin-ui").expect("Failed to find origin-ui binary");
    cmd.env_remove("ORIGIN_UI_LOGIN_COOKIE")
        .env_remove("ORIGIN_UI_BASE_URL")
        .env_remove("RUST_LOG");
    cmd
}

/// Run the blocking assert_cmd invocation off the runtime driving the mock.
async fn run(cmd: Command, stdin: &'static str) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || {
        let mut cmd = cmd;
        cmd.write_stdin(stdin).assert()
    })
    .await
    .expect("CLI task panicked")
}

#[test]
fn help_lists_reset_password() {
    cli_cmd()
        .args(["web-ui", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset-password"));
}

#[tokio::test(flavor = "multi_thread")]
async fn mismatch_fails_without_contacting_server() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd();
    cmd.args(["web-ui", "reset-password", "--stdin", "--server", &server.uri()]);

    run(cmd, "Abc123!\nxyz\n")
        .await
        .failure()
        .stderr(predicate::str::contains("Passwords do not match"));
}

#[tokio::test(flavor = "multi_thread")]
async fn matching_passwords_are_posted_with_cookie() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RESET_PATH))
        .and(header("cookie", "login=abc"))
        .and(body_json(serde_json::json!({ "password": "Abc123!" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "msg": "Success" })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd();
    cmd.args([
        "web-ui",
        "reset-password",
        "--stdin",
        "--server",
        &server.uri(),
        "--login-cookie",
        "abc",
    ]);

    run(cmd, "Abc123!\nAbc123!\n")
        .await
        .success()
        .stdout(predicate::str::contains("Password reset succeeded"));
}

#[tokio::test(flavor = "multi_thread")]
async fn rejected_reset_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RESET_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "error": "Authentication required to perform this operation"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut cmd = cli_cmd();
    cmd.args(["web-ui", "reset-password", "--stdin", "--server", &server.uri()]);

    run(cmd, "newpassword\nnewpassword\n")
        .await
        .failure()
        .stderr(predicate::str::contains("Password reset failed"))
        .stderr(predicate::str::contains("Authentication required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn base_url_is_read_from_config_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(RESET_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[api]\nbase_url = \"{}\"\ntimeout_secs = 5", server.uri()).unwrap();

    let mut cmd = cli_cmd();
    cmd.args(["web-ui", "reset-password", "--stdin", "--config"])
        .arg(config.path());

    run(cmd, "pw\n").await.success();
}
