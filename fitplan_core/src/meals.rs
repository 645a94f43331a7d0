//! Meal selection against a daily calorie target.
//!
//! Each meal slot receives a fixed share of the daily target. The selector
//! picks the single catalog entry of that slot whose calories are closest to
//! the slot's share.

use crate::metabolic::{calculate_calorie_target, macros_for_target};
use crate::schedule::MEAL_SLOTS;
use crate::{Catalog, Error, MealType, NutritionEntry, NutritionPlan, Result, UserProfile};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Closest catalog entry for a meal slot.
///
/// Ties go to the entry listed first in the catalog.
pub fn closest_entry(
    catalog: &Catalog,
    meal_type: MealType,
    target_calories: f64,
) -> Option<&NutritionEntry> {
    catalog
        .entries_for(meal_type)
        .into_iter()
        .min_by(|a, b| {
            let da = (f64::from(a.calories) - target_calories).abs();
            let db = (f64::from(b.calories) - target_calories).abs();
            da.total_cmp(&db)
        })
}

/// Pick one entry per meal slot for a daily calorie target
pub fn select_meals(
    catalog: &Catalog,
    calorie_target: u32,
) -> Result<BTreeMap<MealType, NutritionEntry>> {
    let mut meals = BTreeMap::new();

    for slot in MEAL_SLOTS {
        let sub_target = f64::from(calorie_target) * slot.share;
        let entry = closest_entry(catalog, slot.meal_type, sub_target)
            .ok_or(Error::NoMealCandidates(slot.meal_type))?;

        tracing::debug!(
            "{}: target {:.0} kcal, picked '{}' ({} kcal)",
            slot.meal_type,
            sub_target,
            entry.name,
            entry.calories
        );

        meals.insert(slot.meal_type, entry.clone());
    }

    Ok(meals)
}

/// Build a day's nutrition plan for a profile
pub fn build_nutrition_plan(
    profile: &UserProfile,
    catalog: &Catalog,
    date: NaiveDate,
) -> Result<NutritionPlan> {
    let daily_calories = calculate_calorie_target(profile);
    let macros = macros_for_target(daily_calories, profile.goal);

    let meals = select_meals(catalog, daily_calories)?
        .into_iter()
        .map(|(meal_type, mut entry)| {
            entry.date = Some(date);
            (meal_type, vec![entry])
        })
        .collect();

    tracing::info!(
        "Built nutrition plan for {} at {} kcal",
        date,
        daily_calories
    );

    Ok(NutritionPlan {
        id: Uuid::new_v4(),
        name: format!("{} Nutrition Plan", profile.goal.label()),
        description: format!(
            "{} kcal per day: {}g protein, {}g carbs, {}g fat",
            daily_calories, macros.protein_g, macros.carbs_g, macros.fat_g
        ),
        daily_calories,
        protein_target: macros.protein_g,
        carbs_target: macros.carbs_g,
        fat_target: macros.fat_g,
        meals,
    })
}
