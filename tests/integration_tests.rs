//! Integration tests for the citizen CLI

use assert_cmd::Command;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temp workspace with its own config and state file
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new(base_url: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let state = dir.path().join("state.json");
        fs::write(
            dir.path().join("citizen.toml"),
            format!(
                "[api]\nbase_url = \"{}\"\ntimeout_secs = 5\n\n\
                 [location]\nreverse_geocode = false\ngeocoder_url = \"http://127.0.0.1:1\"\n\n\
                 [storage]\npath = \"{}\"\n",
                base_url,
                state.display().to_string().replace('\\', "/")
            ),
        )
        .unwrap();
        Self { dir }
    }

    fn logged_in(base_url: &str) -> Self {
        let ws = Self::new(base_url);
        fs::write(ws.state_path(), r#"{"isLoggedIn":"true"}"#).unwrap();
        ws
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn state_path(&self) -> PathBuf {
        self.path().join("state.json")
    }

    fn media(&self, name: &str) -> PathBuf {
        let path = self.path().join(name);
        fs::write(&path, b"media").unwrap();
        path
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("citizen").unwrap();
        cmd.current_dir(self.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.path().join("citizen.toml"));
        cmd
    }
}

/// Serve `app` on a background thread and return the API base URL
fn spawn_server(app: Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    listener.set_nonblocking(true).unwrap();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });
    format!("http://{}/api", addr)
}

/// An address nothing is listening on
fn dead_server() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("citizen").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report coastal hazards"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("citizen").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("citizen"));
}

#[test]
fn test_invalid_subcommand() {
    let mut cmd = Command::cargo_bin("citizen").unwrap();
    cmd.arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_hazards_json() {
    let ws = Workspace::new(&dead_server());
    let out = ws.cmd().args(["--format", "json", "hazards"]).output().unwrap();
    assert!(out.status.success());

    let hazards: Vec<String> = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(hazards.len(), 5);
    assert_eq!(hazards[0], "Tropical Cyclones");
}

#[test]
fn test_start_routes_on_session() {
    let ws = Workspace::new(&dead_server());
    ws.cmd()
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("citizen login"));

    fs::write(ws.state_path(), r#"{"isLoggedIn":"true"}"#).unwrap();
    ws.cmd()
        .arg("start")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already logged in"));
}

#[test]
fn test_logout_clears_flag() {
    let ws = Workspace::logged_in(&dead_server());
    ws.cmd()
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    let state: Value = serde_json::from_str(&fs::read_to_string(ws.state_path()).unwrap()).unwrap();
    assert!(state.get("isLoggedIn").is_none());
}

#[test]
fn test_report_requires_login() {
    let ws = Workspace::new(&dead_server());
    ws.cmd()
        .args(["report", "--hazard", "tsunamis", "-d", "Wave", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("log in"))
        .stdout(predicate::str::contains("hazardType").not());
}

#[test]
fn test_report_dry_run_builds_payload() {
    let ws = Workspace::logged_in(&dead_server());
    let images: Vec<PathBuf> = (0..4).map(|i| ws.media(&format!("p{}.jpg", i))).collect();
    let video = ws.media("clip.mp4");

    let mut cmd = ws.cmd();
    cmd.args(["--format", "json", "report", "--hazard", "Storm Surges", "-d", "Water over the wall"]);
    for image in &images {
        cmd.arg("--image").arg(image);
    }
    cmd.arg("--video")
        .arg(&video)
        .args(["--lat", "13.05", "--lon", "80.2824", "--dry-run"]);

    let out = cmd.output().unwrap();
    assert!(out.status.success());

    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("Limit Reached"));
    assert!(stderr.contains("Location Acquired"));
    assert!(stderr.contains("13.05000, 80.28240"));

    let payload: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(payload["hazardType"], "Storm Surges");
    assert_eq!(payload["images"].as_array().unwrap().len(), 3);
    assert!(payload["video"].as_str().unwrap().ends_with("clip.mp4"));
    assert_eq!(payload["location"]["latitude"], 13.05);
    assert!(payload["address"].is_null());
}

#[test]
fn test_report_without_description_is_blocked() {
    let ws = Workspace::logged_in(&dead_server());
    ws.cmd()
        .args(["report", "--hazard", "tsunamis"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please select hazard type and add description.",
        ));
}

#[test]
fn test_camera_permission_denied() {
    let ws = Workspace::logged_in(&dead_server());
    let photo = ws.media("p.jpg");
    let out = ws
        .cmd()
        .env("CITIZEN_PERMISSIONS__CAMERA", "false")
        .args(["--format", "json", "report", "--hazard", "tsunamis", "-d", "Wave", "--dry-run", "--image"])
        .arg(&photo)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Permission Denied"));

    let payload: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(payload["images"], json!([]));
}

#[test]
fn test_report_submits_to_server() {
    let app = Router::new().route(
        "/api/reports/",
        post(|Json(body): Json<Value>| async move {
            assert_eq!(body["hazardType"], "Coastal Erosion");
            (StatusCode::CREATED, Json(json!({ "id": 42 })))
        }),
    );
    let ws = Workspace::logged_in(&spawn_server(app));

    ws.cmd()
        .args(["report", "--hazard", "coastal-erosion", "-d", "Dune collapsed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report Submitted"))
        .stdout(predicate::str::contains("Hazard: Coastal Erosion"));
}

#[test]
fn test_report_json_output_is_server_response() {
    let app = Router::new().route(
        "/api/reports/",
        post(|| async { (StatusCode::CREATED, Json(json!({ "id": 42 }))) }),
    );
    let ws = Workspace::logged_in(&spawn_server(app));
    let photo = ws.media("p.jpg");

    let out = ws
        .cmd()
        .args(["--format", "json", "report", "--hazard", "tsunamis", "-d", "Wave", "--image"])
        .arg(&photo)
        .args(["--lat", "13.05", "--lon", "80.28"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let response: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(response, json!({ "id": 42 }));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Citizen Report"));
    assert!(stderr.contains("Attached image"));
}

#[test]
fn test_report_server_error_fails() {
    let app = Router::new().route(
        "/api/reports/",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let ws = Workspace::logged_in(&spawn_server(app));

    ws.cmd()
        .args(["report", "--hazard", "tsunamis", "-d", "Wave"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Report was not submitted"));
}

#[test]
fn test_reports_lists_server_collection() {
    let app = Router::new().route(
        "/api/reports/",
        axum::routing::get(|| async {
            Json(json!([{ "hazardType": "Tsunamis", "description": "Wave at pier" }]))
        }),
    );
    let ws = Workspace::new(&spawn_server(app));

    ws.cmd()
        .arg("reports")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reports (1)"))
        .stdout(predicate::str::contains("Tsunamis: Wave at pier"));
}

#[test]
fn test_config_show_json() {
    let ws = Workspace::new("http://reports.example.org/api");
    let out = ws
        .cmd()
        .args(["--format", "json", "config", "show"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let config: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(config["api"]["base_url"], "http://reports.example.org/api");
    assert_eq!(config["location"]["reverse_geocode"], false);
}
