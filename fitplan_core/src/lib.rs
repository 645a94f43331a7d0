#![forbid(unsafe_code)]

//! Core domain model and planning logic for Fitplan.
//!
//! This crate provides:
//! - Domain types (profiles, exercises, workout and nutrition plans)
//! - Metabolic calculations (BMR, TDEE, calorie and macro targets)
//! - Weekly exercise allocation and day rebalancing
//! - Meal selection
//! - Persistence port with file-backed and in-memory stores

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod schedule;
pub mod metabolic;
pub mod allocator;
pub mod rebalance;
pub mod meals;
pub mod store;
pub mod planner;
pub mod export;
pub mod profile;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, Catalog};
pub use config::Config;
pub use metabolic::{
    calculate_bmr, calculate_calorie_target, calculate_macros, calculate_tdee, MetabolicSummary,
};
pub use allocator::{allocate_week, AllocationRequest};
pub use rebalance::rebalance_days;
pub use meals::{build_nutrition_plan, select_meals};
pub use store::{JsonFileStore, MemoryStore, PlanStore};
pub use planner::Planner;
pub use export::export_schedule_csv;
