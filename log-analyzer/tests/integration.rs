use std::{fs, path::Path, process::Command};

use asserting::prelude::*;
use log_analyzer::Report;
use serde_json::Value;

const FIRST_LOG: &str = r#"192.168.1.1 - - [10/Oct/2023:13:55:36 -0700] "GET /index.html HTTP/1.1" 200 512 120
192.168.1.2 - - [10/Oct/2023:13:55:40 -0700] "POST /login HTTP/1.1" 302 0 80
192.168.1.1 - - [10/Oct/2023:13:56:02 -0700] "GET /home HTTP/1.1" 200 2048 45
short line
"#;

const SECOND_LOG: &str = r#"10.1.1.1 - - [11/Oct/2023:08:00:00 +0000] "PUT /item/7 HTTP/1.1" 204 0 12
"#;

fn analyze(log_path: &Path, output: &Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_log-analyzer"))
        .arg(log_path)
        .arg("--output")
        .arg(output)
        .output()
        .expect("Failed to start log-analyzer")
}

#[test]
fn single_file_writes_json_and_prints_report() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("access.log");
    let out = dir.path().join("stats.json");
    fs::write(&log, FIRST_LOG).unwrap();

    let result = analyze(&log, &out);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert_that!(stdout.clone()).starts_with("Total requests: 3\n");
    assert_that!(stdout.clone()).contains("GET: 2\nPOST: 1\n");
    assert_that!(stdout).contains(
        "Method: GET, URL: /index.html, IP: 192.168.1.1, Duration: 120 ms, Date and Time: 2023-10-10 13:55:36",
    );

    let json: Value = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["total_requests"], 3);
    assert_eq!(json["http_methods"]["GET"], 2);
    assert_eq!(json["top_ips"]["192.168.1.1"], 2);
    assert_eq!(json["top_requests"][1]["url"], "/login");
}

#[test]
fn directory_run_keeps_only_last_report() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");
    fs::create_dir(&logs).unwrap();
    fs::write(logs.join("a.log"), FIRST_LOG).unwrap();
    fs::write(logs.join("b.log"), SECOND_LOG).unwrap();
    let out = dir.path().join("stats.json");

    let result = analyze(&logs, &out);
    assert!(result.status.success());

    let stdout = String::from_utf8(result.stdout).unwrap();
    assert_eq!(stdout.matches("Total requests:").count(), 2);
    assert_that!(stdout).contains("Total requests: 3\n");

    let report: Report = serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report.total_requests, 1);
    assert_eq!(report.entries[0].ip.as_str(), "10.1.1.1");
    assert_eq!(report.entries[0].timestamp.to_string(), "2023-10-11 08:00:00");
}

#[test]
fn missing_path_is_a_quiet_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("stats.json");

    let result = analyze(&dir.path().join("does-not-exist"), &out);
    assert!(result.status.success());
    assert!(result.stdout.is_empty());
    assert!(!out.exists());
}

#[test]
fn unwritable_output_fails_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("access.log");
    fs::write(&log, SECOND_LOG).unwrap();

    let result = analyze(&log, &dir.path().join("no-such-dir").join("stats.json"));
    assert!(!result.status.success());
    let stderr = String::from_utf8(result.stderr).unwrap();
    assert_that!(stderr).contains("failed to write report");
}
