//! Planner facade tying the pure planning functions to a persistence port.
//!
//! The allocator returns the exercise ids it used rather than writing them;
//! this is the layer that decides to persist them for the next run.

use crate::allocator::{allocate_week, AllocationRequest};
use crate::config::AllocatorConfig;
use crate::meals::build_nutrition_plan;
use crate::rebalance::rebalance_days;
use crate::store::{keys, load_typed, save_typed, PlanStore};
use crate::{Allocation, BodyPart, Catalog, Error, NutritionPlan, Result, UserProfile, WorkoutPlan};
use chrono::NaiveDate;
use rand::Rng;
use std::collections::BTreeSet;

/// Generates, rebalances and persists plans through a [`PlanStore`]
pub struct Planner<'a, S: PlanStore> {
    catalog: &'a Catalog,
    settings: AllocatorConfig,
    store: S,
}

impl<'a, S: PlanStore> Planner<'a, S> {
    pub fn new(catalog: &'a Catalog, settings: AllocatorConfig, store: S) -> Self {
        Self {
            catalog,
            settings,
            store,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Generate and persist a new weekly workout plan.
    ///
    /// Exercises used in the previous run are avoided where the catalog
    /// allows; this run's ids replace the stored recency set.
    pub fn generate_workout<R: Rng + ?Sized>(
        &mut self,
        profile: &UserProfile,
        selected_body_parts: &[BodyPart],
        frequency: Option<u8>,
        rng: &mut R,
    ) -> Result<WorkoutPlan> {
        let allocation = self.allocate(profile, selected_body_parts, frequency, rng)?;

        save_typed(&mut self.store, keys::WORKOUT_PLAN, &allocation.plan)?;
        save_typed(&mut self.store, keys::SELECTED_BODY_PARTS, &selected_body_parts)?;
        save_typed(
            &mut self.store,
            keys::RECENT_EXERCISE_IDS,
            &allocation.used_exercise_ids,
        )?;

        Ok(allocation.plan)
    }

    /// Same allocation as [`Planner::generate_workout`], without saving anything
    pub fn preview_workout<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        selected_body_parts: &[BodyPart],
        frequency: Option<u8>,
        rng: &mut R,
    ) -> Result<WorkoutPlan> {
        Ok(self
            .allocate(profile, selected_body_parts, frequency, rng)?
            .plan)
    }

    fn allocate<R: Rng + ?Sized>(
        &self,
        profile: &UserProfile,
        selected_body_parts: &[BodyPart],
        frequency: Option<u8>,
        rng: &mut R,
    ) -> Result<Allocation> {
        let request = AllocationRequest {
            selected_body_parts: selected_body_parts.to_vec(),
            frequency,
            recently_used: self.recent_exercise_ids()?,
        };
        Ok(allocate_week(self.catalog, profile, &request, &self.settings, rng))
    }

    /// Rebalance the stored plan onto a new number of training days
    pub fn change_frequency(&mut self, frequency: u8) -> Result<WorkoutPlan> {
        let plan = self.current_workout()?.ok_or(Error::NoWorkoutPlan)?;
        let rebalanced = rebalance_days(&plan, frequency)?;
        save_typed(&mut self.store, keys::WORKOUT_PLAN, &rebalanced)?;
        Ok(rebalanced)
    }

    /// Generate and persist a nutrition plan for `date`
    pub fn generate_nutrition(
        &mut self,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> Result<NutritionPlan> {
        let plan = build_nutrition_plan(profile, self.catalog, date)?;
        save_typed(&mut self.store, keys::NUTRITION_PLAN, &plan)?;
        Ok(plan)
    }

    pub fn current_workout(&self) -> Result<Option<WorkoutPlan>> {
        load_typed(&self.store, keys::WORKOUT_PLAN)
    }

    pub fn current_nutrition(&self) -> Result<Option<NutritionPlan>> {
        load_typed(&self.store, keys::NUTRITION_PLAN)
    }

    /// Body parts chosen for the last generated plan
    pub fn selected_body_parts(&self) -> Result<Vec<BodyPart>> {
        Ok(load_typed(&self.store, keys::SELECTED_BODY_PARTS)?.unwrap_or_default())
    }

    pub fn recent_exercise_ids(&self) -> Result<BTreeSet<String>> {
        Ok(load_typed(&self.store, keys::RECENT_EXERCISE_IDS)?.unwrap_or_default())
    }

    /// Discard the workout plan and body-part selection.
    ///
    /// The recency set is kept so the next plan still varies.
    pub fn reset(&mut self) -> Result<()> {
        self.store.remove(keys::WORKOUT_PLAN)?;
        self.store.remove(keys::SELECTED_BODY_PARTS)?;
        tracing::info!("Workout plan reset");
        Ok(())
    }
}
