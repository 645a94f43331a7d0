//! Declarative scheduling tables.
//!
//! Schedule policy lives here as plain data so it can be swapped without
//! touching the allocation code:
//! - the weekly body-part template used by the allocator
//! - the frequency → training-day layouts used by the rebalancer
//! - the per-slot share of daily calories used by the meal selector

use crate::{BodyPart, MealType, Weekday};

/// Body parts trained on a given template day
#[derive(Clone, Copy, Debug)]
pub struct DayTemplate {
    pub day: Weekday,
    pub body_parts: &'static [BodyPart],
}

/// Default push/pull/legs style week; Sunday is always rest
pub const WEEKLY_TEMPLATE: [DayTemplate; 7] = [
    DayTemplate {
        day: Weekday::Monday,
        body_parts: &[BodyPart::Chest, BodyPart::Triceps],
    },
    DayTemplate {
        day: Weekday::Tuesday,
        body_parts: &[BodyPart::Back, BodyPart::Biceps],
    },
    DayTemplate {
        day: Weekday::Wednesday,
        body_parts: &[BodyPart::Legs],
    },
    DayTemplate {
        day: Weekday::Thursday,
        body_parts: &[BodyPart::Shoulders, BodyPart::Abs],
    },
    DayTemplate {
        day: Weekday::Friday,
        body_parts: &[BodyPart::Abs, BodyPart::Cardio],
    },
    DayTemplate {
        day: Weekday::Saturday,
        body_parts: &[BodyPart::Cardio],
    },
    DayTemplate {
        day: Weekday::Sunday,
        body_parts: &[],
    },
];

/// Training days used for a given weekly frequency
#[derive(Clone, Copy, Debug)]
pub struct FrequencyLayout {
    pub frequency: u8,
    pub days: &'static [Weekday],
}

pub const FREQUENCY_LAYOUTS: [FrequencyLayout; 5] = [
    FrequencyLayout {
        frequency: 2,
        days: &[Weekday::Monday, Weekday::Thursday],
    },
    FrequencyLayout {
        frequency: 3,
        days: &[Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
    },
    FrequencyLayout {
        frequency: 4,
        days: &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Thursday,
            Weekday::Friday,
        ],
    },
    FrequencyLayout {
        frequency: 5,
        days: &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Friday,
            Weekday::Saturday,
        ],
    },
    FrequencyLayout {
        frequency: 6,
        days: &[
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
            Weekday::Saturday,
        ],
    },
];

/// Training days for a frequency, in week order.
///
/// Frequencies without a layout take the first `frequency` weekdays.
pub fn training_days(frequency: u8) -> Vec<Weekday> {
    FREQUENCY_LAYOUTS
        .iter()
        .find(|layout| layout.frequency == frequency)
        .map(|layout| layout.days.to_vec())
        .unwrap_or_else(|| {
            Weekday::ALL
                .iter()
                .copied()
                .take(usize::from(frequency))
                .collect()
        })
}

/// Share of the daily calorie target assigned to a meal slot
#[derive(Clone, Copy, Debug)]
pub struct MealSlot {
    pub meal_type: MealType,
    pub share: f64,
}

pub const MEAL_SLOTS: [MealSlot; 4] = [
    MealSlot {
        meal_type: MealType::Breakfast,
        share: 0.25,
    },
    MealSlot {
        meal_type: MealType::Lunch,
        share: 0.35,
    },
    MealSlot {
        meal_type: MealType::Dinner,
        share: 0.30,
    },
    MealSlot {
        meal_type: MealType::Snack,
        share: 0.10,
    },
];
