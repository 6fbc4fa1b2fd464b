use std::{fs, process::Command};

#[test]
fn writes_requested_number_of_lines() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("access.log");

    let status = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--lines", "25", "--seed", "3", "--output"])
        .arg(&out)
        .status()
        .expect("Failed to start noise-maker");
    assert!(status.success());

    let contents = fs::read_to_string(&out).unwrap();
    assert_eq!(contents.lines().count(), 25);
    assert!(contents.lines().all(|l| l.split(' ').count() == 11));
}

#[test]
fn fully_malformed_output_has_no_valid_durations() {
    let output = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--lines", "40", "--seed", "9", "--malformed-ratio", "1.0"])
        .output()
        .expect("Failed to start noise-maker");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 40);
    for line in stdout.lines() {
        let tokens: Vec<_> = line.split(' ').collect();
        let well_formed = tokens.len() >= 10
            && !tokens[3].starts_with("[99/")
            && tokens[tokens.len() - 1].parse::<i64>().is_ok();
        assert!(!well_formed, "line should be rejected: {line}");
    }
}

#[test]
fn ratio_outside_unit_interval_is_refused() {
    let status = Command::new(env!("CARGO_BIN_EXE_noise-maker"))
        .args(["--lines", "1", "--malformed-ratio", "1.5"])
        .output()
        .expect("Failed to start noise-maker");
    assert!(!status.status.success());
}
