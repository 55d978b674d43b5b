use std::io::Write;
use std::net::TcpListener;
use std::time::Duration;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tokio::time::{sleep, timeout};

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Create a minimal valid config
fn minimal_config(port: u16) -> String {
    format!(
        r#"
[server]
host = "127.0.0.1"
port = {}
"#,
        port
    )
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &std::path::Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_helpdesk"))
        .env("HELPDESK_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/api/v1/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

/// Helper to start a server for testing
async fn start_test_server() -> (u16, tokio::process::Child, NamedTempFile) {
    let port = get_available_port();

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(minimal_config(port).as_bytes())
        .unwrap();
    temp_file.flush().unwrap();

    let server = spawn_server(temp_file.path()).await;

    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    (port, server, temp_file)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (port, mut server, _config) = start_test_server().await;

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/health", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let json: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["status"], "ok");

    // Cleanup
    server.kill().await.ok();
}

#[tokio::test]
async fn test_config_endpoint() {
    let (port, mut server, _config) = start_test_server().await;

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/api/v1/config", port))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let json: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["server"]["port"], port);
    assert_eq!(json["seed"]["rng_seed"], 42);

    server.kill().await.ok();
}

#[tokio::test]
async fn test_session_round_trip_over_http() {
    let (port, mut server, _config) = start_test_server().await;
    let client = Client::new();
    let base = format!("http://127.0.0.1:{}/api/v1", port);

    let created: Value = client
        .post(format!("{}/sessions", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    let session_id = created["session_id"].as_str().unwrap().to_string();
    assert_eq!(created["ticket_count"], 100);

    let response = client
        .post(format!("{}/sessions/{}/tickets", base, session_id))
        .json(&json!({ "issue": "VPN down", "priority": "High" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let json: Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["ticket"]["id"], "TICKET-1101");
    assert_eq!(json["ticket"]["status"], "Open");

    let view: Value = client
        .get(format!("{}/sessions/{}", base, session_id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse JSON");
    assert_eq!(view["ticket_count"], 101);
    assert_eq!(
        view["statistics"]["open_tickets"],
        created["statistics"]["open_tickets"].as_u64().unwrap() + 1
    );

    let ended = client
        .delete(format!("{}/sessions/{}", base, session_id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(ended.status(), 204);

    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    let result = timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_helpdesk"))
            .env("HELPDESK_CONFIG", "/nonexistent/config.toml")
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}

#[tokio::test]
async fn test_invalid_config_exits_with_error() {
    let invalid = r#"
[seed]
ticket_count = 0
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(invalid.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let result = timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_helpdesk"))
            .env("HELPDESK_CONFIG", temp_file.path())
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command");

    assert!(!result.status.success());
}
