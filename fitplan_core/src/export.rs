//! CSV export of a weekly workout schedule.
//!
//! One row per scheduled exercise, in week order. Rest days produce no rows.

use crate::{Result, WorkoutPlan};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A row in the CSV output
#[derive(Debug, serde::Serialize)]
struct ScheduleRow<'a> {
    day: &'a str,
    position: usize,
    exercise_id: &'a str,
    name: &'a str,
    body_part: &'a str,
    sets: u32,
    reps: u32,
    rest_seconds: u32,
    fallback: bool,
}

/// Write the plan's schedule as CSV to any writer
///
/// Returns the number of rows written.
pub fn write_schedule<W: Write>(plan: &WorkoutPlan, writer: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(writer);
    let mut count = 0;

    for (day, exercises) in &plan.days {
        for (idx, exercise) in exercises.iter().enumerate() {
            writer.serialize(ScheduleRow {
                day: day.name(),
                position: idx + 1,
                exercise_id: &exercise.id,
                name: &exercise.name,
                body_part: exercise.body_part.as_str(),
                sets: exercise.sets,
                reps: exercise.reps,
                rest_seconds: exercise.rest_time_seconds,
                fallback: exercise.synthesized,
            })?;
            count += 1;
        }
    }

    writer.flush()?;
    Ok(count)
}

/// Export the schedule to a CSV file, replacing any existing file
pub fn export_schedule_csv(plan: &WorkoutPlan, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = File::create(path)?;
    let count = write_schedule(plan, &file)?;
    file.sync_all()?;

    tracing::info!("Exported {} scheduled exercises to {:?}", count, path);
    Ok(count)
}
