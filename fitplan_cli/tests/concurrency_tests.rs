//! Concurrency tests for the fitplan binary.
//!
//! These tests verify that multiple processes can safely:
//! - Replace store documents simultaneously (atomic writes)
//! - Read the store while it is being written

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

const PROFILE: &str = r#"
age = 38
height_cm = 180.0
current_weight_kg = 84.0
target_weight_kg = 80.0
gender = "male"
activity_level = "active"
goal = "maintain"
"#;

fn setup_test_dir() -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    std::fs::write(temp_dir.path().join("profile.toml"), PROFILE).unwrap();
    std::fs::write(temp_dir.path().join("config.toml"), "").unwrap();
    temp_dir
}

fn cli(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fitplan").expect("Failed to find fitplan binary");
    cmd.arg("--data-dir")
        .arg(dir.join("data"))
        .arg("--profile")
        .arg(dir.join("profile.toml"))
        .arg("--config")
        .arg(dir.join("config.toml"));
    cmd
}

fn store_dir(dir: &Path) -> PathBuf {
    dir.join("data/store")
}

#[test]
fn test_concurrent_workout_generation() {
    let temp_dir = setup_test_dir();
    let dir = temp_dir.path().to_path_buf();

    let handles: Vec<_> = (0..4u64)
        .map(|seed| {
            let dir = dir.clone();
            thread::spawn(move || {
                cli(&dir)
                    .args(["workout", "--parts", "chest,back,legs", "--seed"])
                    .arg(seed.to_string())
                    .assert()
                    .success();
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Workout thread panicked");
    }

    // Last writer wins, but the document is always complete
    let contents = std::fs::read_to_string(store_dir(&dir).join("workout_plan.json"))
        .expect("Failed to read plan");
    let plan: serde_json::Value = serde_json::from_str(&contents).expect("Plan is not valid JSON");
    assert_eq!(plan["days"].as_object().unwrap().len(), 7);

    // No stray temp files left behind
    let names: Vec<_> = std::fs::read_dir(store_dir(&dir))
        .unwrap()
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().all(|name| name.ends_with(".json")), "{:?}", names);
}

#[test]
fn test_reads_during_writes() {
    let temp_dir = setup_test_dir();
    let dir = temp_dir.path().to_path_buf();

    cli(&dir)
        .args(["workout", "--parts", "abs,cardio", "--seed", "1"])
        .assert()
        .success();

    let writer_dir = dir.clone();
    let writer = thread::spawn(move || {
        for frequency in ["2", "3", "4", "5"] {
            cli(&writer_dir)
                .args(["rebalance", "--frequency", frequency])
                .assert()
                .success();
        }
    });

    for i in 0..4 {
        thread::sleep(Duration::from_millis(i * 5));
        cli(&dir).arg("show").assert().success();
    }

    writer.join().expect("Writer thread panicked");

    let contents = std::fs::read_to_string(store_dir(&dir).join("workout_plan.json")).unwrap();
    let plan: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(plan["frequency"], 5);
}
