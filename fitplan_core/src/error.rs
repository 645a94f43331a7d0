//! Error types for the fitplan_core library.

use crate::MealType;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fitplan_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// Persistence store error
    #[error("Store error: {0}")]
    Store(String),

    /// Profile could not be loaded
    #[error("Profile error: {0}")]
    Profile(String),

    /// Rebalancing needs at least one training day
    #[error("Invalid frequency {0}: at least one training day is required")]
    InvalidFrequency(u8),

    /// Nutrition catalog has nothing for a meal slot
    #[error("No catalog entries for meal slot '{0}'")]
    NoMealCandidates(MealType),

    /// No persisted workout plan to operate on
    #[error("No workout plan has been generated yet")]
    NoWorkoutPlan,

    /// Generic error
    #[error("{0}")]
    Other(String),
}
