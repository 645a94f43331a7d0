//! Redistribute an existing plan across a different number of training days.
//!
//! Rebalancing does not redo body-part matching. It gathers every scheduled
//! exercise, groups them by body part and deals them out in equal chunks over
//! the training days laid out for the new frequency.

use crate::allocator::plan_description;
use crate::schedule::training_days;
use crate::{empty_week, Error, Exercise, Result, WorkoutPlan};

/// Rebalance `plan` onto `frequency` training days.
///
/// The number of scheduled exercises is conserved exactly. Only `days`,
/// `frequency` and `description` change.
///
/// Exercises are not de-duplicated. An exercise the allocator placed on two
/// different days can land twice on the same day after grouping.
pub fn rebalance_days(plan: &WorkoutPlan, frequency: u8) -> Result<WorkoutPlan> {
    if frequency == 0 {
        return Err(Error::InvalidFrequency(frequency));
    }

    let retained = training_days(frequency);

    let mut pool: Vec<Exercise> = plan.days.values().flatten().cloned().collect();
    pool.sort_by(|a, b| a.body_part.as_str().cmp(b.body_part.as_str()));

    let mut days = empty_week();
    if !pool.is_empty() {
        let chunk_size = (pool.len() + retained.len() - 1) / retained.len();
        for (day, chunk) in retained.iter().zip(pool.chunks(chunk_size)) {
            days.insert(*day, chunk.to_vec());
        }
    }

    // Frequencies above seven are capped to the days available
    let frequency = retained.len() as u8;

    tracing::info!(
        "Rebalanced {} exercises onto {} training days",
        pool.len(),
        frequency
    );

    Ok(WorkoutPlan {
        description: plan_description(plan.goal, frequency),
        frequency,
        days,
        ..plan.clone()
    })
}
