//! Runs the `forecast` subcommand of the built binary against CSV fixtures.

use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::TempDir;

fn write_series(dir: &TempDir, rows: &[(&str, f64)]) -> std::path::PathBuf {
    let mut csv = String::from("date,value\n");
    for (date, value) in rows {
        csv.push_str(&format!("{date},{value}\n"));
    }
    let path = dir.path().join("series.csv");
    fs::write(&path, csv).expect("series fixture should be written");
    path
}

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_cropcast"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("cropcast should run")
}

#[test]
fn forecast_prints_json_report() {
    let dir = TempDir::new().expect("tempdir should be created");
    let rows: Vec<(String, f64)> = (1..=8)
        .map(|i| (format!("2024-01-{i:02}"), i as f64))
        .collect();
    let rows: Vec<(&str, f64)> = rows.iter().map(|(d, v)| (d.as_str(), *v)).collect();
    let input = write_series(&dir, &rows);

    let output = run(&["forecast", "--input", input.to_str().unwrap(), "--horizon", "3"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let report: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["horizon"], 3);
    assert_eq!(report["strategy"], "autoregressive");
    assert_eq!(report["observations"], 8);
    let forecast: Vec<f64> = report["forecast"]
        .as_array()
        .expect("forecast should be an array")
        .iter()
        .filter_map(Value::as_f64)
        .collect();
    assert_eq!(forecast.len(), 3);
    for (got, want) in forecast.iter().zip([9.0, 10.0, 11.0]) {
        assert!((got - want).abs() < 1e-9, "got {forecast:?}");
    }
}

#[test]
fn forecast_writes_csv_output() {
    let dir = TempDir::new().expect("tempdir should be created");
    let input = write_series(&dir, &[("2024-01-01", 4.0), ("2024-01-02", 6.5)]);
    let out = dir.path().join("forecast.csv");

    let output = run(&[
        "forecast",
        "--input",
        input.to_str().unwrap(),
        "--horizon",
        "2",
        "--output",
        out.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let written = fs::read_to_string(&out).expect("forecast CSV should exist");
    assert_eq!(written, "step,forecast\n1,6.5\n2,6.5\n");
}

#[test]
fn non_finite_value_fails_instead_of_printing_nulls() {
    let dir = TempDir::new().expect("tempdir should be created");
    let input = write_series(&dir, &[("d1", 1.0), ("d2", f64::NAN)]);

    let output = run(&["forecast", "--input", input.to_str().unwrap(), "--horizon", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("non-finite value in row 2"), "stderr: {stderr}");
}

#[test]
fn horizon_above_configured_maximum_fails() {
    let dir = TempDir::new().expect("tempdir should be created");
    let input = write_series(&dir, &[("d1", 1.0)]);
    let input = input.to_str().unwrap();

    for horizon in ["366", "18446744073709551615"] {
        let output = run(&["forecast", "--input", input, "--horizon", horizon]);
        assert_eq!(output.status.code(), Some(1), "horizon {horizon}");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("forecast.max_horizon"), "stderr: {stderr}");
    }
}

#[test]
fn zero_horizon_fails() {
    let dir = TempDir::new().expect("tempdir should be created");
    let input = write_series(&dir, &[("d1", 1.0)]);

    let output = run(&["forecast", "--input", input.to_str().unwrap(), "--horizon", "0"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn missing_input_fails_with_message() {
    let output = run(&["forecast", "--input", "/nonexistent/series.csv"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("/nonexistent/series.csv"), "stderr: {stderr}");
}

#[test]
fn invalid_config_is_reported() {
    let dir = TempDir::new().expect("tempdir should be created");
    let input = write_series(&dir, &[("2024-01-01", 1.0)]);
    let config = dir.path().join("cropcast.toml");
    fs::write(&config, "[forecast]\nlags = 0\n").expect("config should be written");

    let output = run(&[
        "forecast",
        "--input",
        input.to_str().unwrap(),
        "--config",
        config.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("forecast.lags"), "stderr: {stderr}");
}
