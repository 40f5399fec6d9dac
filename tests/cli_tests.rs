//! Integration tests for CLI functionality

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Command for the compiled binary, isolated from the caller's environment
fn dlctl() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dlctl"));
    cmd.env_remove("DIRECTLINK_URL")
        .env_remove("DIRECTLINK_BEARER_TOKEN")
        .env_remove("DIRECTLINK_AUTH_TYPE")
        .env("IBM_CREDENTIALS_FILE", "/nonexistent/ibm-credentials.env");
    cmd
}

/// Run the binary off the async runtime so the mock server keeps serving
async fn run(args: Vec<String>) -> assert_cmd::assert::Assert {
    tokio::task::spawn_blocking(move || dlctl().args(args).assert())
        .await
        .unwrap()
}

#[test]
fn test_help_flag() {
    dlctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Direct Link"));
}

#[test]
fn test_version_flag() {
    dlctl()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dlctl"));
}

#[test]
fn test_get_help_lists_resources() {
    dlctl()
        .args(["get", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gateway"))
        .stdout(predicate::str::contains("export-filter"))
        .stdout(predicate::str::contains("route-report"));
}

#[test]
fn test_invalid_output_format() {
    dlctl()
        .args(["get", "gateway", "-o", "invalid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid"));
}

#[test]
fn test_missing_credentials() {
    dlctl()
        .args(["get", "gateway"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_delete_requires_gateway_for_children() {
    dlctl()
        .args(["delete", "vc", "vc-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--gateway"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_gateways_csv() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gateways"))
        .and(query_param("version", "2024-05-21"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gateways": [
                {
                    "id": "gw-2",
                    "name": "zeta",
                    "type": "connect",
                    "operational_status": "provisioned",
                    "location_name": "dal03",
                    "speed_mbps": 1000
                },
                {
                    "id": "gw-1",
                    "name": "alpha",
                    "type": "dedicated",
                    "operational_status": "awaiting_loa",
                    "location_name": "wdc04",
                    "speed_mbps": 10000
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let assert = run(vec![
        "--url".into(),
        server.uri(),
        "--token".into(),
        "test-token".into(),
        "--batch".into(),
        "--no-header".into(),
        "get".into(),
        "gw".into(),
        "-o".into(),
        "csv".into(),
    ])
    .await;

    let output = assert.success().get_output().stdout.clone();
    let stdout = String::from_utf8_lossy(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("gw-1,alpha"));
    assert!(lines[1].starts_with("gw-2,zeta"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_error_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gateways"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": [{"code": "not_authorized", "message": "Unauthorized"}],
            "trace": "abc123"
        })))
        .mount(&server)
        .await;

    run(vec![
        "--url".into(),
        server.uri(),
        "-t".into(),
        "bad".into(),
        "-b".into(),
        "get".into(),
        "gateway".into(),
    ])
    .await
    .failure()
    .stderr(predicate::str::contains("401"))
    .stderr(predicate::str::contains("Unauthorized"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_batch_delete_without_yes_is_refused() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gateways/gw-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gw-1", "name": "prod", "type": "dedicated"
        })))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(204))
        .expect(0)
        .mount(&server)
        .await;

    run(vec![
        "--url".into(),
        server.uri(),
        "-t".into(),
        "tok".into(),
        "--batch".into(),
        "delete".into(),
        "gateway".into(),
        "gw-1".into(),
    ])
    .await
    .failure()
    .stderr(predicate::str::contains("not confirmed"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_download_loa_to_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gateways/gw-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "gw-1", "name": "prod", "type": "dedicated"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/gateways/gw-1/letter_of_authorization"))
        .and(header("Accept", "application/pdf"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.7".to_vec()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("loa.pdf");

    run(vec![
        "--url".into(),
        server.uri(),
        "-t".into(),
        "tok".into(),
        "-b".into(),
        "download".into(),
        "loa".into(),
        "-g".into(),
        "gw-1".into(),
        "-f".into(),
        file.display().to_string(),
    ])
    .await
    .success()
    .stdout(predicate::str::contains("8 bytes"));

    assert_eq!(std::fs::read(&file).unwrap(), b"%PDF-1.7");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_url_from_env_with_token_from_credentials_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gateways"))
        .and(header("Authorization", "Bearer file-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "gateways": [{"id": "gw-1", "name": "alpha", "type": "dedicated"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let credentials = dir.path().join("ibm-credentials.env");
    std::fs::write(
        &credentials,
        "DIRECTLINK_URL=http://127.0.0.1:1/v1\n\
         DIRECTLINK_AUTH_TYPE=bearertoken\n\
         DIRECTLINK_BEARER_TOKEN=file-token\n",
    )
    .unwrap();

    let url = server.uri();
    tokio::task::spawn_blocking(move || {
        dlctl()
            .env("DIRECTLINK_URL", url)
            .env("IBM_CREDENTIALS_FILE", &credentials)
            .args(["-b", "get", "gateway", "-o", "csv"])
            .assert()
    })
    .await
    .unwrap()
    .success()
    .stdout(predicate::str::contains("gw-1,alpha"));
}
