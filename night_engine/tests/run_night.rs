use std::process::Command;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tempfile::tempdir;

#[derive(Debug, Deserialize)]
struct RunManifest {
    mode: String,
    hours: u32,
    ticks: u64,
    in_game_minutes: f32,
    completion: Value,
    call_note: Option<String>,
    events: Vec<String>,
}

fn run_engine(args: &[&str]) -> Result<std::process::Output> {
    Command::new(env!("CARGO_BIN_EXE_night_engine"))
        .args(args)
        .output()
        .context("executing night_engine")
}

#[test]
fn night_one_produces_a_run_manifest() -> Result<()> {
    let temp_dir = tempdir().context("creating temporary directory for run artefacts")?;
    let manifest_path = temp_dir.path().join("run.json");
    let manifest_path_str = manifest_path
        .to_str()
        .context("manifest path is not valid UTF-8")?;

    let output = run_engine(&[
        "--night",
        "1",
        "--seed",
        "7",
        "--time-scale",
        "60",
        "--event-log-json",
        manifest_path_str,
    ])?;
    assert!(
        output.status.success(),
        "night_engine failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(manifest_path.is_file(), "no run manifest written");

    let manifest: RunManifest =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)
            .context("parsing run manifest")?;
    assert_eq!(manifest.mode, "night 1");
    assert_eq!(manifest.hours, 6);
    assert!(manifest.ticks > 0);
    assert!(manifest.in_game_minutes >= 360.0);
    assert!(manifest
        .events
        .iter()
        .any(|line| line == "director: night 1 begins"));
    assert!(manifest
        .events
        .iter()
        .any(|line| line == "director: night 1 won"));
    assert!(manifest.call_note.is_some());
    assert_eq!(manifest.completion["next_night"], 2);
    Ok(())
}

#[test]
fn overtime_challenge_runs_nine_hours() -> Result<()> {
    let temp_dir = tempdir().context("creating temporary directory for run artefacts")?;
    let manifest_path = temp_dir.path().join("overtime.json");
    let manifest_path_str = manifest_path
        .to_str()
        .context("manifest path is not valid UTF-8")?;

    let output = run_engine(&[
        "--challenge",
        "4",
        "--time-scale",
        "60",
        "--event-log-json",
        manifest_path_str,
    ])?;
    assert!(
        output.status.success(),
        "night_engine failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let manifest: RunManifest =
        serde_json::from_str(&std::fs::read_to_string(&manifest_path)?)
            .context("parsing run manifest")?;
    assert_eq!(manifest.mode, "challenge 4");
    assert_eq!(manifest.hours, 9);
    assert!(manifest.in_game_minutes >= 540.0);
    Ok(())
}

#[test]
fn unknown_custom_actor_is_rejected() -> Result<()> {
    let output = run_engine(&["--night", "7", "--custom", "ghost=4", "--time-scale", "60"])?;
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown actor"), "stderr: {stderr}");
    Ok(())
}

#[test]
fn unknown_night_is_rejected() -> Result<()> {
    let output = run_engine(&["--night", "9"])?;
    assert!(!output.status.success());
    Ok(())
}
