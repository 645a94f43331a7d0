//! Weekly exercise allocation.
//!
//! Turns a set of selected body parts into a seven-day schedule:
//! - Match the weekly template against the selection
//! - Trim to the target number of training days, keeping the busiest days
//! - Draw exercises per body part, preferring ones not used recently
//! - Top up thin days with synthesized fallback exercises
//!
//! Randomness is injected so a seeded generator gives reproducible plans.

use crate::config::AllocatorConfig;
use crate::metabolic::derive_frequency;
use crate::schedule::WEEKLY_TEMPLATE;
use crate::{
    empty_week, Allocation, BodyPart, Catalog, Exercise, Goal, UserProfile, Weekday, WorkoutPlan,
};
use chrono::Utc;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};
use uuid::Uuid;

/// Caller inputs for one allocation run
#[derive(Clone, Debug, Default)]
pub struct AllocationRequest {
    pub selected_body_parts: Vec<BodyPart>,
    /// Explicit training days per week; derived from activity level when unset
    pub frequency: Option<u8>,
    /// Exercise ids persisted from an earlier run
    pub recently_used: BTreeSet<String>,
}

/// Allocate a week of exercises for the selected body parts
pub fn allocate_week<R: Rng + ?Sized>(
    catalog: &Catalog,
    profile: &UserProfile,
    request: &AllocationRequest,
    settings: &AllocatorConfig,
    rng: &mut R,
) -> Allocation {
    let frequency = request
        .frequency
        .unwrap_or_else(|| derive_frequency(profile.activity_level));

    if request.selected_body_parts.is_empty() {
        tracing::warn!("No body parts selected, every day will be a rest day");
    }

    tracing::info!(
        "Allocating week for {:?} at {} days per week",
        request.selected_body_parts,
        frequency
    );

    let assignments = assign_body_parts(&request.selected_body_parts, frequency);

    let mut used: HashSet<String> = request.recently_used.iter().cloned().collect();
    let mut used_exercise_ids = BTreeSet::new();
    let mut days = empty_week();

    for (day, parts) in &assignments {
        if parts.is_empty() {
            continue;
        }

        let mut todays: Vec<Exercise> = Vec::new();

        for part in parts {
            let picked = pick_for_body_part(catalog, *part, &used, &todays, settings, &mut *rng);
            for exercise in &picked {
                used.insert(exercise.id.clone());
                used_exercise_ids.insert(exercise.id.clone());
            }
            todays.extend(picked);
        }

        let mut fallback_count = 0;
        while todays.len() < settings.min_exercises_per_day {
            fallback_count += 1;
            todays.push(fallback_exercise(parts[0], fallback_count, settings, &mut *rng));
        }
        if fallback_count > 0 {
            tracing::debug!(
                "{}: added {} fallback exercise(s) for {}",
                day.name(),
                fallback_count,
                parts[0]
            );
        }

        days.insert(*day, todays);
    }

    let exercises: Vec<Exercise> = days.values().flatten().cloned().collect();

    let plan = WorkoutPlan {
        id: random_uuid(rng),
        name: format!("{} Training Plan", profile.goal.label()),
        description: plan_description(profile.goal, frequency),
        goal: profile.goal,
        frequency,
        exercises,
        days,
        generated_at: Utc::now(),
    };

    tracing::info!(
        "Allocated {} exercises over {} training days",
        plan.exercises.len(),
        plan.active_days().len()
    );

    Allocation {
        plan,
        used_exercise_ids,
    }
}

/// Body parts trained on each template day after trimming to `frequency`.
///
/// Days are returned in week order; trimmed days carry no body parts.
pub fn assign_body_parts(selected: &[BodyPart], frequency: u8) -> Vec<(Weekday, Vec<BodyPart>)> {
    let mut assignments: Vec<(Weekday, Vec<BodyPart>)> = WEEKLY_TEMPLATE
        .iter()
        .map(|template| {
            let parts = template
                .body_parts
                .iter()
                .copied()
                .filter(|part| selected.contains(part))
                .collect();
            (template.day, parts)
        })
        .collect();

    let mut active: Vec<usize> = assignments
        .iter()
        .enumerate()
        .filter(|(_, (_, parts))| !parts.is_empty())
        .map(|(idx, _)| idx)
        .collect();

    if active.len() > usize::from(frequency) {
        // Stable sort: equally busy days keep week order
        active.sort_by_key(|idx| std::cmp::Reverse(assignments[*idx].1.len()));
        for idx in active.into_iter().skip(usize::from(frequency)) {
            tracing::debug!("Demoting {} to a rest day", assignments[idx].0.name());
            assignments[idx].1.clear();
        }
    }

    assignments
}

/// Draw up to `exercises_per_body_part` catalog exercises for one body part
fn pick_for_body_part<R: Rng + ?Sized>(
    catalog: &Catalog,
    part: BodyPart,
    used: &HashSet<String>,
    todays: &[Exercise],
    settings: &AllocatorConfig,
    rng: &mut R,
) -> Vec<Exercise> {
    let candidates = catalog.exercises_for(part);
    let unused: Vec<&Exercise> = candidates
        .iter()
        .copied()
        .filter(|e| !used.contains(&e.id))
        .collect();

    let mut pool = if unused.len() >= settings.min_unused_candidates {
        unused
    } else {
        tracing::debug!(
            "Only {} unused {} exercises, allowing repeats",
            unused.len(),
            part
        );
        candidates
    };

    pool.shuffle(&mut *rng);

    pool.into_iter()
        .filter(|e| !todays.iter().any(|t| t.id == e.id))
        .take(settings.exercises_per_body_part)
        .cloned()
        .collect()
}

fn fallback_exercise<R: Rng + ?Sized>(
    part: BodyPart,
    number: usize,
    settings: &AllocatorConfig,
    rng: &mut R,
) -> Exercise {
    Exercise {
        id: format!("fallback-{}", random_uuid(rng)),
        name: format!("{} Exercise {}", part.display_name(), number),
        body_part: part,
        description: format!(
            "A basic {} exercise. Use a weight you can move with good form.",
            part
        ),
        video_url: None,
        sets: settings.fallback_sets,
        reps: settings.fallback_reps,
        rest_time_seconds: settings.fallback_rest_seconds,
        synthesized: true,
    }
}

/// Plan description shared by allocation and rebalancing
pub fn plan_description(goal: Goal, frequency: u8) -> String {
    format!(
        "{} program with {} training days per week",
        goal.label(),
        frequency
    )
}

fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    uuid::Builder::from_random_bytes(rng.gen()).into_uuid()
}
