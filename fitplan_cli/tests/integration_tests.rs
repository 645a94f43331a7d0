//! Integration tests for the fitplan binary.
//!
//! These tests verify end-to-end behavior including:
//! - Metabolic targets from a profile file
//! - Workout generation, rebalancing and reset
//! - Nutrition plan generation
//! - CSV export

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODERATE_MAINTAIN: &str = r#"
age = 30
height_cm = 175.0
current_weight_kg = 70.0
target_weight_kg = 70.0
gender = "male"
activity_level = "moderate"
goal = "maintain"
"#;

const SEDENTARY_LOSE: &str = r#"
age = 45
height_cm = 168.0
current_weight_kg = 92.0
target_weight_kg = 80.0
gender = "female"
activity_level = "sedentary"
goal = "lose"
"#;

/// Temp dir holding a profile, an empty config and the data directory
fn setup_test_dir(profile: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("profile.toml"), profile).unwrap();
    fs::write(temp_dir.path().join("config.toml"), "").unwrap();
    temp_dir
}

/// CLI command pointed at the test directory
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

fn read_doc(dir: &Path, key: &str) -> Value {
    let path = dir.join("data/store").join(format!("{}.json", key));
    let contents = fs::read_to_string(&path).expect("Failed to read store document");
    serde_json::from_str(&contents).expect("Store document is not JSON")
}

/// Training days of a stored plan; JSON object keys come back sorted by name
fn active_days(plan: &Value) -> BTreeSet<String> {
    plan["days"]
        .as_object()
        .unwrap()
        .iter()
        .filter(|(_, exercises)| !exercises.as_array().unwrap().is_empty())
        .map(|(day, _)| day.clone())
        .collect()
}

fn days(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

fn scheduled_count(plan: &Value) -> usize {
    plan["days"]
        .as_object()
        .unwrap()
        .values()
        .map(|exercises| exercises.as_array().unwrap().len())
        .sum()
}

#[test]
fn test_cli_help() {
    Command::cargo_bin("fitplan")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Weekly workout and nutrition planner",
        ));
}

#[test]
fn test_targets_for_profile() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .arg("targets")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calorie target: 2628 kcal"))
        .stdout(predicate::str::contains("Protein: 197 g"))
        .stdout(predicate::str::contains("Carbs:   263 g"))
        .stdout(predicate::str::contains("Fat:     88 g"))
        .stdout(predicate::str::contains("Suggested training days: 5"));
}

#[test]
fn test_missing_profile_fails() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);
    fs::remove_file(temp_dir.path().join("profile.toml")).unwrap();

    cli(temp_dir.path())
        .arg("targets")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No profile found"));
}

#[test]
fn test_workout_saves_plan_and_recency() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .arg("workout")
        .arg("--parts")
        .arg("chest,legs")
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout plan saved"))
        .stdout(predicate::str::contains("Monday"));

    let plan = read_doc(temp_dir.path(), "workout_plan");
    assert_eq!(plan["frequency"], 5);
    assert_eq!(active_days(&plan), days(&["monday", "wednesday"]));

    let parts = read_doc(temp_dir.path(), "selected_body_parts");
    assert_eq!(parts, serde_json::json!(["chest", "legs"]));

    let recent = read_doc(temp_dir.path(), "recent_exercise_ids");
    assert_eq!(recent.as_array().unwrap().len(), 6);
}

#[test]
fn test_dry_run_does_not_save() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .arg("workout")
        .arg("--parts")
        .arg("back")
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp_dir.path().join("data/store/workout_plan.json").exists());
}

#[test]
fn test_workout_requires_body_parts() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .arg("workout")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Select at least one body part"));
}

#[test]
fn test_unknown_body_part_rejected() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .arg("workout")
        .arg("--parts")
        .arg("chest,neck")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown body part"));
}

#[test]
fn test_out_of_range_frequency_keeps_saved_state() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .args(["workout", "--parts", "chest,legs", "--seed", "1"])
        .assert()
        .success();
    let plan = read_doc(temp_dir.path(), "workout_plan");
    let recent = read_doc(temp_dir.path(), "recent_exercise_ids");

    for frequency in ["0", "8"] {
        cli(temp_dir.path())
            .args(["workout", "--parts", "chest,legs", "--seed", "2"])
            .args(["--frequency", frequency])
            .assert()
            .failure()
            .stderr(predicate::str::contains("1..=7"));

        assert_eq!(read_doc(temp_dir.path(), "workout_plan"), plan);
        assert_eq!(read_doc(temp_dir.path(), "recent_exercise_ids"), recent);
    }
}

#[test]
fn test_workout_reuses_saved_selection() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .args(["workout", "--parts", "abs", "--seed", "1"])
        .assert()
        .success();

    cli(temp_dir.path())
        .args(["workout", "--seed", "2"])
        .assert()
        .success();

    let plan = read_doc(temp_dir.path(), "workout_plan");
    assert_eq!(active_days(&plan), days(&["thursday", "friday"]));
}

#[test]
fn test_sedentary_plan_rebalanced_to_three_days() {
    let temp_dir = setup_test_dir(SEDENTARY_LOSE);

    cli(temp_dir.path())
        .args([
            "workout",
            "--parts",
            "chest,back,shoulders,biceps,triceps,legs,abs,cardio",
            "--seed",
            "3",
        ])
        .assert()
        .success();

    let generated = read_doc(temp_dir.path(), "workout_plan");
    assert_eq!(generated["frequency"], 3);

    cli(temp_dir.path())
        .args(["rebalance", "--frequency", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("rebalanced to 3 training days"));

    let rebalanced = read_doc(temp_dir.path(), "workout_plan");
    assert_eq!(active_days(&rebalanced), days(&["monday", "wednesday", "friday"]));
    assert_eq!(scheduled_count(&rebalanced), scheduled_count(&generated));
    assert_eq!(
        rebalanced["description"],
        "Weight Loss program with 3 training days per week"
    );
}

#[test]
fn test_rebalance_conserves_exercises() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .args(["workout", "--parts", "chest,back,legs,abs", "--seed", "5"])
        .assert()
        .success();
    let before = scheduled_count(&read_doc(temp_dir.path(), "workout_plan"));

    for frequency in ["2", "6", "7", "1"] {
        cli(temp_dir.path())
            .args(["rebalance", "--frequency", frequency])
            .assert()
            .success();
        let after = read_doc(temp_dir.path(), "workout_plan");
        assert_eq!(scheduled_count(&after), before);
    }
}

#[test]
fn test_rebalance_without_plan_fails() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .args(["rebalance", "--frequency", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No workout plan"));
}

#[test]
fn test_rebalance_to_zero_days_fails() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .args(["workout", "--parts", "legs", "--seed", "1"])
        .assert()
        .success();

    cli(temp_dir.path())
        .args(["rebalance", "--frequency", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid frequency"));
}

#[test]
fn test_show_export_and_reset() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);
    let csv_path = temp_dir.path().join("schedule.csv");

    cli(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("No workout plan saved yet"));

    cli(temp_dir.path())
        .args(["workout", "--parts", "shoulders,cardio", "--seed", "9"])
        .assert()
        .success();

    cli(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Thursday"))
        .stdout(predicate::str::contains("Sunday - rest"));

    cli(temp_dir.path())
        .arg("export")
        .arg("--output")
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"));

    let csv_content = fs::read_to_string(&csv_path).unwrap();
    let plan = read_doc(temp_dir.path(), "workout_plan");
    assert!(csv_content.starts_with("day,position,exercise_id"));
    assert_eq!(csv_content.lines().count(), scheduled_count(&plan) + 1);

    cli(temp_dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workout plan cleared"));

    assert!(!temp_dir.path().join("data/store/workout_plan.json").exists());
    assert!(temp_dir
        .path()
        .join("data/store/recent_exercise_ids.json")
        .exists());

    cli(temp_dir.path())
        .args(["export", "--output"])
        .arg(&csv_path)
        .assert()
        .failure();
}

#[test]
fn test_meals_saves_one_entry_per_slot() {
    let temp_dir = setup_test_dir(MODERATE_MAINTAIN);

    cli(temp_dir.path())
        .args(["meals", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nutrition plan saved"))
        .stdout(predicate::str::contains("2628 kcal per day"));

    let plan = read_doc(temp_dir.path(), "nutrition_plan");
    assert_eq!(plan["daily_calories"], 2628);

    let meals = plan["meals"].as_object().unwrap();
    assert_eq!(meals.len(), 4);
    for (slot, entries) in meals {
        let entries = entries.as_array().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(&entries[0]["meal_type"], slot.as_str());
        assert_eq!(entries[0]["date"], "2024-05-01");
    }
}

#[test]
fn test_meals_dry_run_does_not_save() {
    let temp_dir = setup_test_dir(SEDENTARY_LOSE);

    cli(temp_dir.path())
        .args(["meals", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breakfast"));

    assert!(!temp_dir.path().join("data/store/nutrition_plan.json").exists());
}
