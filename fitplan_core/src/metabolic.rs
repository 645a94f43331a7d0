//! Metabolic profile calculations.
//!
//! Converts a [`UserProfile`] into energy and macro targets:
//! - BMR via the Harris-Benedict equation
//! - TDEE from an activity multiplier
//! - Calorie target from a goal multiplier
//! - Macro grams from a goal-dependent percentage split
//!
//! Every function here is pure and total.

use crate::{ActivityLevel, Gender, Goal, MacroTargets, UserProfile};
use serde::Serialize;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Percentage split of the calorie target across macros
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Macro split used for each goal
pub fn macro_split(goal: Goal) -> MacroSplit {
    match goal {
        Goal::Lose => MacroSplit {
            protein: 0.35,
            carbs: 0.35,
            fat: 0.30,
        },
        Goal::Gain => MacroSplit {
            protein: 0.30,
            carbs: 0.45,
            fat: 0.25,
        },
        Goal::Maintain => MacroSplit {
            protein: 0.30,
            carbs: 0.40,
            fat: 0.30,
        },
    }
}

pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

pub fn goal_factor(goal: Goal) -> f64 {
    match goal {
        Goal::Lose => 0.8,
        Goal::Maintain => 1.0,
        Goal::Gain => 1.15,
    }
}

/// Default number of training days per week for an activity level
pub fn derive_frequency(level: ActivityLevel) -> u8 {
    match level {
        ActivityLevel::Sedentary => 3,
        ActivityLevel::Light => 4,
        ActivityLevel::Moderate => 5,
        ActivityLevel::Active | ActivityLevel::VeryActive => 6,
    }
}

/// Basal metabolic rate (kcal/day), Harris-Benedict equation
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let weight = profile.current_weight_kg;
    let height = profile.height_cm;
    let age = f64::from(profile.age);

    match profile.gender {
        Gender::Male => 88.362 + 13.397 * weight + 4.799 * height - 5.677 * age,
        Gender::Female | Gender::Other => {
            447.593 + 9.247 * weight + 3.098 * height - 4.330 * age
        }
    }
}

/// Total daily energy expenditure, rounded to whole kcal
pub fn calculate_tdee(profile: &UserProfile) -> u32 {
    to_kcal(calculate_bmr(profile) * activity_factor(profile.activity_level))
}

/// Daily calorie target for the profile's goal
pub fn calculate_calorie_target(profile: &UserProfile) -> u32 {
    to_kcal(f64::from(calculate_tdee(profile)) * goal_factor(profile.goal))
}

/// Macro targets in grams; each macro is rounded independently
pub fn calculate_macros(profile: &UserProfile) -> MacroTargets {
    macros_for_target(calculate_calorie_target(profile), profile.goal)
}

/// Macro grams for an explicit calorie target
pub fn macros_for_target(calorie_target: u32, goal: Goal) -> MacroTargets {
    let split = macro_split(goal);
    let calories = f64::from(calorie_target);

    MacroTargets {
        protein_g: to_kcal(calories * split.protein / KCAL_PER_GRAM_PROTEIN),
        carbs_g: to_kcal(calories * split.carbs / KCAL_PER_GRAM_CARBS),
        fat_g: to_kcal(calories * split.fat / KCAL_PER_GRAM_FAT),
    }
}

// Non-positive inputs are an upstream contract violation; clamp rather than wrap.
fn to_kcal(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// All metabolic values for a profile, for display and serialization
#[derive(Clone, Debug, Serialize)]
pub struct MetabolicSummary {
    pub bmr: f64,
    pub tdee: u32,
    pub calorie_target: u32,
    pub macros: MacroTargets,
    pub training_days: u8,
}

impl MetabolicSummary {
    pub fn for_profile(profile: &UserProfile) -> Self {
        let summary = Self {
            bmr: calculate_bmr(profile),
            tdee: calculate_tdee(profile),
            calorie_target: calculate_calorie_target(profile),
            macros: calculate_macros(profile),
            training_days: derive_frequency(profile.activity_level),
        };

        tracing::debug!(
            "Metabolic summary: bmr={:.1} tdee={} target={} macros={:?}",
            summary.bmr,
            summary.tdee,
            summary.calorie_target,
            summary.macros
        );

        summary
    }
}
