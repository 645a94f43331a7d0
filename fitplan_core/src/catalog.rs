//! Default exercise and nutrition catalogs.
//!
//! The catalogs are read-only reference data. Order is significant: the meal
//! selector breaks ties by catalog order.

use crate::config::CatalogConfig;
use crate::{BodyPart, Error, Exercise, MealType, NutritionEntry, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Exercises and meals available to the planner
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
    pub nutrition: Vec<NutritionEntry>,
}

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with built-in exercises and meals
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

#[allow(clippy::too_many_arguments)]
fn exercise(
    id: &str,
    name: &str,
    body_part: BodyPart,
    description: &str,
    video_url: &str,
    sets: u32,
    reps: u32,
    rest_time_seconds: u32,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        body_part,
        description: description.into(),
        video_url: Some(video_url.into()),
        sets,
        reps,
        rest_time_seconds,
        synthesized: false,
    }
}

fn meal(
    id: &str,
    name: &str,
    meal_type: MealType,
    calories: u32,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> NutritionEntry {
    NutritionEntry {
        id: id.into(),
        name: name.into(),
        calories,
        protein,
        carbs,
        fat,
        date: None,
        meal_type,
    }
}

fn build_default_catalog_internal() -> Catalog {
    use BodyPart::*;

    let exercises = vec![
        // ====================================================================
        // Chest
        // ====================================================================
        exercise(
            "bench_press",
            "Barbell Bench Press",
            Chest,
            "Lie on a flat bench and press the bar from mid-chest to lockout.",
            "https://www.youtube.com/watch?v=rT7DgCr-3pg",
            4,
            8,
            90,
        ),
        exercise(
            "incline_db_press",
            "Incline Dumbbell Press",
            Chest,
            "Press dumbbells on a 30 degree incline bench.",
            "https://www.youtube.com/watch?v=8iPEnn-ltC8",
            3,
            10,
            75,
        ),
        exercise(
            "push_up",
            "Push-up",
            Chest,
            "Keep a rigid plank and lower the chest to the floor.",
            "https://www.youtube.com/watch?v=IODxDxX7oi4",
            3,
            15,
            60,
        ),
        exercise(
            "cable_fly",
            "Cable Fly",
            Chest,
            "Bring the handles together in a wide arc with soft elbows.",
            "https://www.youtube.com/watch?v=Iwe6AmxVf7o",
            3,
            12,
            60,
        ),
        // ====================================================================
        // Back
        // ====================================================================
        exercise(
            "pull_up",
            "Pull-up",
            Back,
            "Hang from the bar and pull until the chin clears it.",
            "https://www.youtube.com/watch?v=eGo4IYlbE5g",
            4,
            6,
            90,
        ),
        exercise(
            "barbell_row",
            "Barbell Row",
            Back,
            "Hinge to 45 degrees and row the bar to the lower ribs.",
            "https://www.youtube.com/watch?v=FWJR5Ve8bnQ",
            4,
            8,
            90,
        ),
        exercise(
            "lat_pulldown",
            "Lat Pulldown",
            Back,
            "Pull the bar to the upper chest, driving elbows down.",
            "https://www.youtube.com/watch?v=CAwf7n6Luuc",
            3,
            12,
            60,
        ),
        exercise(
            "seated_cable_row",
            "Seated Cable Row",
            Back,
            "Row the handle to the torso while keeping the chest tall.",
            "https://www.youtube.com/watch?v=GZbfZ033f74",
            3,
            12,
            60,
        ),
        // ====================================================================
        // Shoulders
        // ====================================================================
        exercise(
            "overhead_press",
            "Overhead Press",
            Shoulders,
            "Press the bar from the front rack to overhead lockout.",
            "https://www.youtube.com/watch?v=2yjwXTZQDDI",
            4,
            8,
            90,
        ),
        exercise(
            "lateral_raise",
            "Dumbbell Lateral Raise",
            Shoulders,
            "Raise dumbbells out to the sides up to shoulder height.",
            "https://www.youtube.com/watch?v=3VcKaXpzqRo",
            3,
            15,
            45,
        ),
        exercise(
            "face_pull",
            "Face Pull",
            Shoulders,
            "Pull a rope attachment toward the face, elbows high.",
            "https://www.youtube.com/watch?v=rep-qVOkqgk",
            3,
            15,
            45,
        ),
        // ====================================================================
        // Biceps
        // ====================================================================
        exercise(
            "barbell_curl",
            "Barbell Curl",
            Biceps,
            "Curl the bar without swinging the torso.",
            "https://www.youtube.com/watch?v=kwG2ipFRgfo",
            3,
            10,
            60,
        ),
        exercise(
            "hammer_curl",
            "Hammer Curl",
            Biceps,
            "Curl dumbbells with a neutral grip.",
            "https://www.youtube.com/watch?v=zC3nLlEvin4",
            3,
            12,
            60,
        ),
        exercise(
            "incline_db_curl",
            "Incline Dumbbell Curl",
            Biceps,
            "Curl from a stretched position on an incline bench.",
            "https://www.youtube.com/watch?v=soxrZlIl35U",
            3,
            12,
            60,
        ),
        // ====================================================================
        // Triceps
        // ====================================================================
        exercise(
            "tricep_pushdown",
            "Cable Pushdown",
            Triceps,
            "Extend the elbows against a cable, upper arms pinned.",
            "https://www.youtube.com/watch?v=2-LAMcpzODU",
            3,
            12,
            60,
        ),
        exercise(
            "skull_crusher",
            "Skull Crusher",
            Triceps,
            "Lower an EZ bar toward the forehead and extend.",
            "https://www.youtube.com/watch?v=d_KZxkY_0cM",
            3,
            10,
            60,
        ),
        exercise(
            "bench_dip",
            "Bench Dip",
            Triceps,
            "Dip between two benches keeping the torso upright.",
            "https://www.youtube.com/watch?v=0326dy_-CzM",
            3,
            15,
            60,
        ),
        // ====================================================================
        // Legs
        // ====================================================================
        exercise(
            "back_squat",
            "Back Squat",
            Legs,
            "Squat below parallel with the bar on the upper back.",
            "https://www.youtube.com/watch?v=ultWZbUMPL8",
            4,
            6,
            120,
        ),
        exercise(
            "romanian_deadlift",
            "Romanian Deadlift",
            Legs,
            "Hinge at the hips with soft knees, bar close to the legs.",
            "https://www.youtube.com/watch?v=JCXUYuzwNrM",
            3,
            10,
            90,
        ),
        exercise(
            "walking_lunge",
            "Walking Lunge",
            Legs,
            "Step forward into a lunge and alternate legs.",
            "https://www.youtube.com/watch?v=L8fvypPrzzs",
            3,
            12,
            60,
        ),
        exercise(
            "leg_press",
            "Leg Press",
            Legs,
            "Press the sled through full range without locking knees.",
            "https://www.youtube.com/watch?v=IZxyjW7MPJQ",
            3,
            12,
            90,
        ),
        // ====================================================================
        // Abs
        // ====================================================================
        exercise(
            "plank",
            "Plank",
            Abs,
            "Hold a straight line from head to heels on the forearms.",
            "https://www.youtube.com/watch?v=ASdvN_XEl_c",
            3,
            1,
            45,
        ),
        exercise(
            "hanging_leg_raise",
            "Hanging Leg Raise",
            Abs,
            "Hang from a bar and raise straight legs to hip height.",
            "https://www.youtube.com/watch?v=hdng3Nm1x_E",
            3,
            12,
            60,
        ),
        exercise(
            "bicycle_crunch",
            "Bicycle Crunch",
            Abs,
            "Alternate elbow to opposite knee while pedalling.",
            "https://www.youtube.com/watch?v=9FGilxCbdz8",
            3,
            20,
            45,
        ),
        exercise(
            "dead_bug",
            "Dead Bug",
            Abs,
            "Extend opposite arm and leg while keeping the back flat.",
            "https://www.youtube.com/watch?v=g_BYB0R-4Ws",
            3,
            12,
            45,
        ),
        // ====================================================================
        // Cardio
        // ====================================================================
        exercise(
            "jump_rope",
            "Jump Rope Intervals",
            Cardio,
            "Skip for 45 seconds, rest 15 seconds.",
            "https://www.youtube.com/watch?v=FJmRQ5iTXKE",
            5,
            1,
            15,
        ),
        exercise(
            "rowing_intervals",
            "Rowing Machine Intervals",
            Cardio,
            "Row hard for 250 m, then paddle easy for a minute.",
            "https://www.youtube.com/watch?v=H0r_ZPXJLtg",
            6,
            1,
            60,
        ),
        exercise(
            "burpee",
            "Burpee",
            Cardio,
            "Squat, kick back to a plank, return and jump.",
            "https://www.youtube.com/watch?v=TU8QYVW0gDU",
            3,
            12,
            60,
        ),
    ];

    use MealType::*;

    let nutrition = vec![
        meal("oats_berries", "Oatmeal with Berries", Breakfast, 350, 12.0, 60.0, 7.0),
        meal("egg_scramble", "Veggie Egg Scramble", Breakfast, 450, 28.0, 20.0, 28.0),
        meal("greek_yogurt_bowl", "Greek Yogurt Granola Bowl", Breakfast, 550, 35.0, 65.0, 15.0),
        meal("protein_pancakes", "Protein Pancakes", Breakfast, 700, 45.0, 85.0, 18.0),
        meal("chicken_salad", "Grilled Chicken Salad", Lunch, 500, 45.0, 20.0, 25.0),
        meal("turkey_wrap", "Turkey Avocado Wrap", Lunch, 650, 40.0, 55.0, 28.0),
        meal("rice_bowl", "Chicken Rice Bowl", Lunch, 800, 50.0, 95.0, 20.0),
        meal("pasta_bolognese", "Pasta Bolognese", Lunch, 1000, 55.0, 120.0, 30.0),
        meal("salmon_veg", "Baked Salmon with Vegetables", Dinner, 550, 40.0, 25.0, 30.0),
        meal("beef_stir_fry", "Beef Stir Fry", Dinner, 700, 45.0, 60.0, 28.0),
        meal("chicken_sweet_potato", "Chicken and Sweet Potato", Dinner, 850, 55.0, 90.0, 22.0),
        meal("steak_potatoes", "Steak with Roast Potatoes", Dinner, 1000, 60.0, 85.0, 42.0),
        meal("apple_pb", "Apple with Peanut Butter", Snack, 200, 7.0, 25.0, 8.0),
        meal("protein_shake", "Protein Shake", Snack, 250, 30.0, 10.0, 5.0),
        meal("trail_mix", "Trail Mix", Snack, 350, 10.0, 30.0, 22.0),
    ];

    Catalog {
        exercises,
        nutrition,
    }
}

impl Catalog {
    /// Exercises tagged with a body part, in catalog order
    pub fn exercises_for(&self, body_part: BodyPart) -> Vec<&Exercise> {
        self.exercises
            .iter()
            .filter(|e| e.body_part == body_part)
            .collect()
    }

    /// Nutrition entries for a meal slot, in catalog order
    pub fn entries_for(&self, meal_type: MealType) -> Vec<&NutritionEntry> {
        self.nutrition
            .iter()
            .filter(|n| n.meal_type == meal_type)
            .collect()
    }

    /// Load the catalog to plan with.
    ///
    /// Starts from the default catalog and replaces the exercise and/or
    /// nutrition lists with JSON files named in the config.
    pub fn load(config: &CatalogConfig) -> Result<Catalog> {
        let mut catalog = get_default_catalog().clone();

        if let Some(path) = &config.exercises_path {
            catalog.exercises = read_json_list(path)?;
            tracing::info!(
                "Loaded {} exercises from {:?}",
                catalog.exercises.len(),
                path
            );
        }

        if let Some(path) = &config.nutrition_path {
            catalog.nutrition = read_json_list(path)?;
            tracing::info!(
                "Loaded {} nutrition entries from {:?}",
                catalog.nutrition.len(),
                path
            );
        }

        let errors = catalog.validate();
        if !errors.is_empty() {
            return Err(Error::CatalogValidation(errors.join("; ")));
        }

        Ok(catalog)
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let mut seen = HashSet::new();
        for exercise in &self.exercises {
            if exercise.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            } else if !seen.insert(exercise.id.as_str()) {
                errors.push(format!("Duplicate exercise ID '{}'", exercise.id));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", exercise.id));
            }
            if exercise.synthesized {
                errors.push(format!(
                    "Exercise '{}' is marked as synthesized",
                    exercise.id
                ));
            }
        }

        let mut seen = HashSet::new();
        for entry in &self.nutrition {
            if entry.id.is_empty() {
                errors.push("Nutrition entry has empty ID".to_string());
            } else if !seen.insert(entry.id.as_str()) {
                errors.push(format!("Duplicate nutrition ID '{}'", entry.id));
            }
            if entry.name.is_empty() {
                errors.push(format!("Nutrition entry '{}' has empty name", entry.id));
            }
        }

        for meal_type in [
            MealType::Breakfast,
            MealType::Lunch,
            MealType::Dinner,
            MealType::Snack,
        ] {
            if self.entries_for(meal_type).is_empty() {
                errors.push(format!("Catalog has no {} entries", meal_type));
            }
        }

        errors
    }
}

fn read_json_list<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
