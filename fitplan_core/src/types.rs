//! Core domain types for the Fitplan planning engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - User profile and its enumerated attributes
//! - Body parts, weekdays and exercises
//! - Workout and nutrition plans
//! - Macro targets

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Profile Types
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported daily activity level
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

/// Body-weight goal driving calorie and macro targets
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    /// Human-readable label used in plan names and descriptions
    pub fn label(&self) -> &'static str {
        match self {
            Goal::Lose => "Weight Loss",
            Goal::Maintain => "Maintenance",
            Goal::Gain => "Muscle Gain",
        }
    }
}

/// Biometric profile supplied by the caller.
///
/// Ranges are validated upstream; the planner never mutates it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
}

// ============================================================================
// Training Types
// ============================================================================

/// Muscle group / training category used to tag exercises
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum BodyPart {
    Chest,
    Back,
    Shoulders,
    Biceps,
    Triceps,
    Legs,
    Abs,
    Cardio,
}

impl BodyPart {
    pub const ALL: [BodyPart; 8] = [
        BodyPart::Chest,
        BodyPart::Back,
        BodyPart::Shoulders,
        BodyPart::Biceps,
        BodyPart::Triceps,
        BodyPart::Legs,
        BodyPart::Abs,
        BodyPart::Cardio,
    ];

    /// Lowercase name, also the sort key used when regrouping exercises
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyPart::Chest => "chest",
            BodyPart::Back => "back",
            BodyPart::Shoulders => "shoulders",
            BodyPart::Biceps => "biceps",
            BodyPart::Triceps => "triceps",
            BodyPart::Legs => "legs",
            BodyPart::Abs => "abs",
            BodyPart::Cardio => "cardio",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BodyPart::Chest => "Chest",
            BodyPart::Back => "Back",
            BodyPart::Shoulders => "Shoulders",
            BodyPart::Biceps => "Biceps",
            BodyPart::Triceps => "Triceps",
            BodyPart::Legs => "Legs",
            BodyPart::Abs => "Abs",
            BodyPart::Cardio => "Cardio",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPart {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        let wanted = s.trim().to_lowercase();
        BodyPart::ALL
            .iter()
            .copied()
            .find(|part| part.as_str() == wanted)
            .ok_or_else(|| crate::Error::Other(format!("Unknown body part: {}", s)))
    }
}

/// Calendar weekday, ordered Monday first
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

/// An exercise record, either from the catalog or synthesized as a fallback
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub body_part: BodyPart,
    pub description: String,
    pub video_url: Option<String>,
    pub sets: u32,
    pub reps: u32,
    pub rest_time_seconds: u32,
    /// True for fallback exercises created by the allocator
    #[serde(default)]
    pub synthesized: bool,
}

/// Day schedule keyed by weekday; always holds all seven days
pub type WeekSchedule = BTreeMap<Weekday, Vec<Exercise>>;

/// Build a schedule where every day is a rest day
pub fn empty_week() -> WeekSchedule {
    Weekday::ALL.iter().map(|day| (*day, Vec::new())).collect()
}

/// A generated weekly workout plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub goal: Goal,
    /// Target number of active days
    pub frequency: u8,
    /// Every exercise placed in `days`, in week order
    pub exercises: Vec<Exercise>,
    pub days: WeekSchedule,
    pub generated_at: DateTime<Utc>,
}

impl WorkoutPlan {
    /// Days that have at least one exercise, in week order
    pub fn active_days(&self) -> Vec<Weekday> {
        self.days
            .iter()
            .filter(|(_, exercises)| !exercises.is_empty())
            .map(|(day, _)| *day)
            .collect()
    }

    /// Total number of exercises across all days
    pub fn scheduled_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Result of a weekly allocation run
#[derive(Clone, Debug)]
pub struct Allocation {
    pub plan: WorkoutPlan,
    /// Catalog ids placed in this run, for the caller to persist as recency hints
    pub used_exercise_ids: BTreeSet<String>,
}

// ============================================================================
// Nutrition Types
// ============================================================================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        };
        f.write_str(name)
    }
}

/// A food/meal record with its nutritional values
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionEntry {
    pub id: String,
    pub name: String,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    /// Unset on catalog entries; stamped when placed into a plan
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub meal_type: MealType,
}

/// Daily nutrition plan with one entry per meal slot
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct NutritionPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub daily_calories: u32,
    pub protein_target: u32,
    pub carbs_target: u32,
    pub fat_target: u32,
    pub meals: BTreeMap<MealType, Vec<NutritionEntry>>,
}

/// Daily macro targets in grams
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargets {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

impl MacroTargets {
    /// Calories implied by the rounded gram targets.
    ///
    /// Each macro is rounded on its own, so this can differ from the
    /// calorie target by a few kcal.
    pub fn calories(&self) -> u32 {
        self.protein_g * 4 + self.carbs_g * 4 + self.fat_g * 9
    }
}
