//! End-to-end scenarios through the real subprocess runner.
//!
//! A shell script stands in for `sony-bravia-cli` and appends every argument
//! list it receives to a log file.

#![cfg(unix)]

mod common;

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use axum::http::StatusCode;
use lounge_tv_axum::{ServerConfig, bootstrap, create_router, start_server};
use lounge_tv_core::TvConfig;
use tempfile::TempDir;
use tokio_util::sync::CancellationToken;

use common::{TEST_DEVICE, body_bytes, body_json, get};

/// Fake control tool: logs its arguments, prints a status report, and fails
/// for `power off` the way an unresponsive set would.
fn fake_tool(dir: &Path, log: &Path) -> PathBuf {
    let path = dir.join("sony-bravia-cli");
    let script = format!(
        r#"#!/bin/sh
echo "$@" >> "{log}"
case "$3 $4" in
  "status ") printf 'power: on\ninput: hdmi 1\n' ;;
  "power off") echo "no response from TV" >&2; exit 1 ;;
esac
exit 0
"#,
        log = log.display()
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn config(tool: &Path) -> ServerConfig {
    ServerConfig::with_defaults().with_tv(TvConfig::new(tool, TEST_DEVICE))
}

#[tokio::test]
async fn brightness_up_invokes_the_tool() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calls.log");
    let tool = fake_tool(dir.path(), &log);

    let app = create_router(bootstrap(&config(&tool)));
    let response = get(app, "/brightness/up").await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(response).await.is_empty());
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "--dev /dev/ttyUSB0 brightness up\n"
    );
}

#[tokio::test]
async fn input_scenario_accepts_three_and_rejects_nine() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("calls.log");
    let tool = fake_tool(dir.path(), &log);
    let app = create_router(bootstrap(&config(&tool)));

    let accepted = get(app.clone(), "/input/hdmi/3").await;
    let rejected = get(app, "/input/hdmi/9").await;

    assert_eq!(accepted.status(), StatusCode::NO_CONTENT);
    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        fs::read_to_string(&log).unwrap(),
        "--dev /dev/ttyUSB0 input-hdmi 3\n"
    );
}

#[tokio::test]
async fn status_passes_through_tool_output() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), &dir.path().join("calls.log"));

    let response = get(create_router(bootstrap(&config(&tool))), "/status").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_bytes(response).await, b"power: on\ninput: hdmi 1\n");
}

#[tokio::test]
async fn failing_tool_yields_internal_error() {
    let dir = TempDir::new().unwrap();
    let tool = fake_tool(dir.path(), &dir.path().join("calls.log"));

    let response = get(create_router(bootstrap(&config(&tool))), "/power/off").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["type"], "EXECUTION_FAILED");
    let error = json["error"].as_str().unwrap();
    assert!(error.contains("exit code 1"), "{error}");
    assert!(error.contains("no response from TV"), "{error}");
}

#[tokio::test]
async fn missing_tool_yields_spawn_failure() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("not-installed");

    let response = get(create_router(bootstrap(&config(&missing))), "/power/on").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["type"], "SPAWN_FAILED");
}

#[tokio::test]
async fn slow_tool_is_cut_off_by_command_timeout() {
    let dir = TempDir::new().unwrap();
    let tool = dir.path().join("sony-bravia-cli");
    fs::write(&tool, "#!/bin/sh\nexec sleep 30\n").unwrap();
    fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

    let config = config(&tool).with_command_timeout(Duration::from_millis(200));
    let response = get(create_router(bootstrap(&config)), "/volume/up").await;

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body_json(response).await["type"], "CANCELLED");
}

#[tokio::test]
async fn server_stops_on_shutdown_signal() {
    let mut config = ServerConfig::with_defaults();
    config.host = "127.0.0.1".to_string();
    config.port = 0;

    let shutdown = CancellationToken::new();
    let server = tokio::spawn(start_server(config, shutdown.clone()));

    tokio::time::sleep(Duration::from_millis(100)).await;
    shutdown.cancel();

    let result = tokio::time::timeout(Duration::from_secs(5), server)
        .await
        .expect("server did not shut down")
        .unwrap();
    assert!(result.is_ok(), "{result:?}");
}
